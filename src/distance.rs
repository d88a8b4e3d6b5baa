use ndarray::{Array2, ArrayView1};
use num_traits::Float;

use crate::error::{KMeansError, Result};

fn check_dimensions(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(KMeansError::DimensionMismatch { expected, found });
    }
    Ok(())
}

pub fn squared_euclidean<F: Float>(us: &[F], them: &[F]) -> Result<F> {
    check_dimensions(them.len(), us.len())?;

    Ok(us
        .iter()
        .zip(them.iter())
        .map(|(&a, &b)| {
            let diff = a - b;
            diff * diff
        })
        .fold(F::zero(), |acc, value| acc + value))
}

pub fn euclidean<F: Float>(us: &[F], them: &[F]) -> Result<F> {
    squared_euclidean(us, them).map(Float::sqrt)
}

/// Euclidean distance from every vector in `vectors` to `reference`, in input order.
pub fn euclidean_distance<F: Float>(vectors: &[Vec<F>], reference: &[F]) -> Result<Vec<F>> {
    vectors
        .iter()
        .map(|vector| euclidean(vector, reference))
        .collect()
}

/// N x k matrix of distances; column `c` holds the distances to `centroids[c]`.
pub fn distance_matrix(table: &[Vec<f64>], centroids: &[Vec<f64>]) -> Result<Array2<f64>> {
    let mut distances = Array2::zeros((table.len(), centroids.len()));

    for (centroid_idx, centroid) in centroids.iter().enumerate() {
        let column = euclidean_distance(table, centroid)?;
        distances
            .column_mut(centroid_idx)
            .assign(&ArrayView1::from(&column[..]));
    }

    Ok(distances)
}
