use std::fmt::Debug;

use num_traits::Float;

use crate::error::{KMeansError, Result};


pub trait Centroid: Sized + Clone + Debug + Default {
    /// Adds `data_point / count`, where `count` is the final size of the cluster.
    fn update_centroid(&mut self, data_point: &Self, count: usize);
}


impl<F: Float + Debug> Centroid for Vec<F> {
    fn update_centroid(&mut self, data_point: &Self, count: usize) {
        if self.is_empty() {
            *self = vec![F::zero(); data_point.len()];
        }

        let count = F::from(count).unwrap_or_else(F::one);
        for (a, b) in self.iter_mut().zip(data_point.iter()) {
            *a = *a + *b / count;
        }
    }
}

/// Elementwise mean of the observations assigned to each of the `k` clusters.
///
/// A cluster without members yields `None`; the caller decides what replaces it.
pub fn recompute_centroids(
    data: &[Vec<f64>],
    memberships: &[usize],
    k: usize,
) -> Result<Vec<Option<Vec<f64>>>> {
    if data.len() != memberships.len() {
        return Err(KMeansError::DimensionMismatch {
            expected: data.len(),
            found: memberships.len(),
        });
    }

    let mut sizes = vec![0usize; k];
    for &label in memberships {
        if label >= k {
            return Err(KMeansError::InvalidParameter {
                name: "memberships",
                message: "cluster index out of range",
            });
        }
        sizes[label] += 1;
    }

    // Scaled before summing so large finite members cannot overflow the total.
    let mut means: Vec<Vec<f64>> = vec![Vec::new(); k];
    for (point, &label) in data.iter().zip(memberships.iter()) {
        if !means[label].is_empty() && means[label].len() != point.len() {
            return Err(KMeansError::DimensionMismatch {
                expected: means[label].len(),
                found: point.len(),
            });
        }
        means[label].update_centroid(point, sizes[label]);
    }

    Ok(means
        .into_iter()
        .zip(sizes)
        .map(|(centroid, size)| if size == 0 { None } else { Some(centroid) })
        .collect())
}
