use itertools::Itertools;
use rand::{seq::index, Rng};

use crate::distance::distance_matrix;
use crate::error::{KMeansError, Result};

/// Initial state of a run: `k` observations picked as centroids.
///
/// `memberships` gives callers a labelling before any iteration runs; the fit loop
/// recomputes memberships from distances on its first pass and does not read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Seeding {
    pub centroids: Vec<Vec<f64>>,
    pub memberships: Vec<usize>,
    /// Row of the table each centroid was copied from.
    pub seed_indices: Vec<usize>,
}

pub(crate) fn check_cluster_count(k: usize, n_observations: usize) -> Result<()> {
    if k == 0 {
        return Err(KMeansError::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }
    if k > n_observations {
        return Err(KMeansError::InvalidClusterCount {
            requested: k,
            n_observations,
        });
    }
    Ok(())
}

/// Picks `k` distinct rows uniformly at random, without replacement.
///
/// Every row starts in the cluster of its nearest seed (lowest cluster index on ties),
/// and each seed row is pinned to its own cluster even when duplicated elsewhere.
pub fn seed_centroids<R: Rng + ?Sized>(data: &[Vec<f64>], k: usize, rng: &mut R) -> Result<Seeding> {
    check_cluster_count(k, data.len())?;

    let seed_indices = index::sample(rng, data.len(), k).into_vec();
    let centroids = seed_indices.iter().map(|&idx| data[idx].clone()).collect_vec();

    let distances = distance_matrix(data, &centroids)?;
    let mut memberships = crate::algorithm::assign_memberships(&distances);
    for (centroid_idx, &row) in seed_indices.iter().enumerate() {
        memberships[row] = centroid_idx;
    }

    log::info!("seeded {} centroids from rows {:?}", k, seed_indices);

    Ok(Seeding {
        centroids,
        memberships,
        seed_indices,
    })
}
