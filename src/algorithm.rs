use std::collections::BTreeSet;

use itertools::Itertools;
use ndarray::Array2;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::centroid::recompute_centroids;
use crate::convergence::{step_status, Convergence, StepStatus};
use crate::distance::distance_matrix;
use crate::error::{KMeansError, Result};
use crate::inertia::calculate_inertia;
use crate::initialization::check_cluster_count;
use crate::traits::KClustering;
use crate::validation::validate;

pub const DEFAULT_K: usize = 4;
pub const DEFAULT_MAX_ITERATIONS: usize = 258;

/// What replaces the centroid of a cluster that ends an iteration without members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// Keep the centroid from the previous iteration.
    #[default]
    RetainPrevious,
    /// Move the centroid onto a randomly chosen observation.
    Reseed,
}

/// How a fit loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    /// Recomputing the centroids no longer changed them.
    Converged,
    /// The iteration cap was hit first; the result may not be stable.
    Capped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    pub centroids: Vec<Vec<f64>>,
    pub memberships: Vec<usize>,
    /// Number of assign/update iterations run.
    pub iterations: usize,
    pub status: FitStatus,
    pub inertia: f64,
    /// Clusters that were left without members in at least one iteration.
    pub empty_clusters: Vec<usize>,
}

impl KMeansFit {
    pub fn is_converged(&self) -> bool {
        self.status == FitStatus::Converged
    }

    /// Labels new observations with the index of their nearest centroid.
    pub fn predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        validate(data)?;
        let distances = distance_matrix(data, &self.centroids)?;
        Ok(assign_memberships(&distances))
    }
}

/// Lloyd's algorithm configuration.
///
/// ```
/// use lloyd_kmeans::{Convergence, KMeans};
///
/// let data = vec![
///     vec![0.0, 0.0],
///     vec![0.1, 0.1],
///     vec![10.0, 10.0],
///     vec![10.1, 10.1],
/// ];
/// let fit = KMeans::new(2)
///     .with_convergence(Convergence::Exact)
///     .with_seed(42)
///     .fit(&data)
///     .unwrap();
/// assert_eq!(fit.memberships[0], fit.memberships[1]);
/// assert_ne!(fit.memberships[0], fit.memberships[2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KMeans {
    k: usize,
    max_iterations: usize,
    convergence: Convergence,
    empty_cluster: EmptyClusterPolicy,
    seed: Option<u64>,
    n_init: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new(DEFAULT_K)
    }
}

impl KMeans {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence: Convergence::default(),
            empty_cluster: EmptyClusterPolicy::default(),
            seed: None,
            n_init: 1,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_convergence(mut self, convergence: Convergence) -> Self {
        self.convergence = convergence;
        self
    }

    pub fn with_empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster = policy;
        self
    }

    /// Fixes the random source used by [`KMeans::fit`] and [`KMeans::fit_from`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of independently seeded runs; the one with the lowest inertia is kept.
    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn convergence(&self) -> Convergence {
        self.convergence
    }

    pub fn empty_cluster_policy(&self) -> EmptyClusterPolicy {
        self.empty_cluster
    }

    fn check_parameters(&self) -> Result<()> {
        if self.k == 0 {
            return Err(KMeansError::InvalidParameter { name: "k", message: "must be at least 1" });
        }
        if self.max_iterations == 0 {
            return Err(KMeansError::InvalidParameter {
                name: "max_iterations",
                message: "must be at least 1",
            });
        }
        if self.n_init == 0 {
            return Err(KMeansError::InvalidParameter { name: "n_init", message: "must be at least 1" });
        }
        if let Convergence::Tolerance(tolerance) = self.convergence {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(KMeansError::InvalidParameter {
                    name: "convergence",
                    message: "tolerance must be finite and non-negative",
                });
            }
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn fit(&self, data: &[Vec<f64>]) -> Result<KMeansFit> {
        self.fit_with_rng(data, &mut self.rng())
    }

    /// Fits with an explicit random source, ignoring any configured seed.
    pub fn fit_with_rng<R: Rng + ?Sized>(&self, data: &[Vec<f64>], rng: &mut R) -> Result<KMeansFit> {
        self.check_parameters()?;
        self.validate(data)?;
        check_cluster_count(self.k, data.len())?;

        let mut best: Option<KMeansFit> = None;
        for initialization_index in 0..self.n_init {
            let seeding = self.seed(data, rng)?;
            let fit = self.lloyd(data, seeding.centroids, rng)?;
            log::info!(
                "Finished KMeans for initialization #{} - Inertia: {}",
                initialization_index,
                fit.inertia
            );

            if best.as_ref().map_or(true, |current| fit.inertia < current.inertia) {
                best = Some(fit);
            }
        }

        best.ok_or(KMeansError::InvalidParameter { name: "n_init", message: "must be at least 1" })
    }

    /// Runs the loop from the given centroids instead of seeding new ones.
    pub fn fit_from(&self, data: &[Vec<f64>], centroids: Vec<Vec<f64>>) -> Result<KMeansFit> {
        self.check_parameters()?;
        let dimensions = self.validate(data)?;
        check_cluster_count(self.k, data.len())?;

        if centroids.len() != self.k {
            return Err(KMeansError::InvalidParameter {
                name: "centroids",
                message: "expected exactly k centroids",
            });
        }
        let centroid_dimensions = validate(&centroids)?;
        if centroid_dimensions != dimensions {
            return Err(KMeansError::DimensionMismatch {
                expected: dimensions,
                found: centroid_dimensions,
            });
        }

        self.lloyd(data, centroids, &mut self.rng())
    }

    fn lloyd<R: Rng + ?Sized>(
        &self,
        data: &[Vec<f64>],
        mut centroids: Vec<Vec<f64>>,
        rng: &mut R,
    ) -> Result<KMeansFit> {
        let mut memberships = Vec::new();
        let mut empty_clusters = BTreeSet::new();

        for iter in 1..=self.max_iterations {
            if iter % 10 == 0 {
                log::debug!("Finished iteration {}", iter);
            }

            let distances = distance_matrix(data, &centroids)?;
            memberships = assign_memberships(&distances);

            let updated =
                self.update_centroids(data, &memberships, &centroids, rng, &mut empty_clusters)?;
            let status = step_status(&centroids, &updated, self.convergence);
            log::trace!("iteration {}: {:?}", iter, status);
            centroids = updated;

            if status == StepStatus::Converged {
                log::info!("Converged after {} iterations", iter);
                return Ok(self.finish(
                    data,
                    centroids,
                    memberships,
                    iter,
                    FitStatus::Converged,
                    empty_clusters,
                ));
            }
        }

        log::warn!(
            "Stopped after {} iterations without converging",
            self.max_iterations
        );
        Ok(self.finish(
            data,
            centroids,
            memberships,
            self.max_iterations,
            FitStatus::Capped,
            empty_clusters,
        ))
    }

    fn update_centroids<R: Rng + ?Sized>(
        &self,
        data: &[Vec<f64>],
        memberships: &[usize],
        previous: &[Vec<f64>],
        rng: &mut R,
        empty_clusters: &mut BTreeSet<usize>,
    ) -> Result<Vec<Vec<f64>>> {
        let means = recompute_centroids(data, memberships, self.k)?;

        Ok(means
            .into_iter()
            .zip(previous.iter())
            .enumerate()
            .map(|(idx, (mean, previous))| match mean {
                Some(centroid) => centroid,
                None => {
                    empty_clusters.insert(idx);
                    log::warn!("Cluster {} has no members ({:?})", idx, self.empty_cluster);
                    match self.empty_cluster {
                        EmptyClusterPolicy::RetainPrevious => previous.clone(),
                        // Reassign to a random data point if cluster is empty
                        EmptyClusterPolicy::Reseed => data
                            .choose(rng)
                            .cloned()
                            .unwrap_or_else(|| previous.clone()),
                    }
                }
            })
            .collect_vec())
    }

    fn finish(
        &self,
        data: &[Vec<f64>],
        centroids: Vec<Vec<f64>>,
        memberships: Vec<usize>,
        iterations: usize,
        status: FitStatus,
        empty_clusters: BTreeSet<usize>,
    ) -> KMeansFit {
        let inertia = calculate_inertia(data, &centroids, &memberships);
        KMeansFit {
            centroids,
            memberships,
            iterations,
            status,
            inertia,
            empty_clusters: empty_clusters.into_iter().collect(),
        }
    }
}

impl KClustering for KMeans {
    fn n_clusters(&self) -> usize {
        self.k
    }

    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        self.fit(data).map(|fit| fit.memberships)
    }
}

/// Index of the nearest centroid for every row of an N x k distance matrix.
///
/// Ties go to the lowest cluster index.
pub fn assign_memberships(distances: &Array2<f64>) -> Vec<usize> {
    distances
        .rows()
        .into_iter()
        .map(|row| row.iter().position_min_by(|a, b| a.total_cmp(b)).unwrap_or(0))
        .collect()
}
