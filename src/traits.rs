use rand::Rng;

use crate::distance::euclidean_distance;
use crate::error::Result;
use crate::initialization::{seed_centroids, Seeding};
use crate::validation::validate;

/// Shared behaviour of centroid-based clustering variants.
///
/// Implementors provide the cluster count and the fit itself; validation, distance and
/// seeding come with the trait.
pub trait KClustering {
    fn n_clusters(&self) -> usize;

    /// Fit the model and return one cluster index per observation.
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>>;

    fn validate(&self, data: &[Vec<f64>]) -> Result<usize> {
        validate(data)
    }

    fn distance(&self, vectors: &[Vec<f64>], reference: &[f64]) -> Result<Vec<f64>> {
        euclidean_distance(vectors, reference)
    }

    fn seed<R: Rng + ?Sized>(&self, data: &[Vec<f64>], rng: &mut R) -> Result<Seeding>
    where
        Self: Sized,
    {
        seed_centroids(data, self.n_clusters(), rng)
    }
}
