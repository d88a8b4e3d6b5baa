//! Lloyd's k-means clustering.
//!
//! Observations are rows of a `&[Vec<f64>]` table. A fit seeds `k` centroids from
//! randomly chosen rows, then alternates two steps until the centroids stop moving or
//! the iteration cap is reached:
//!
//! 1. assign every observation to its nearest centroid (Euclidean distance, ties go to
//!    the lowest cluster index);
//! 2. move every centroid to the mean of its members.
//!
//! ```
//! use lloyd_kmeans::{FitStatus, KMeans};
//!
//! let data = vec![vec![1.0, 0.0], vec![1.5, 0.5], vec![8.0, 8.0], vec![8.5, 7.5]];
//! let fit = KMeans::new(2).with_seed(7).fit(&data).unwrap();
//! assert_eq!(fit.status, FitStatus::Converged);
//! assert!(fit.memberships.iter().all(|&label| label < 2));
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod centroid;
pub mod convergence;
pub mod distance;
pub mod error;
pub mod inertia;
pub mod initialization;
pub mod logger;
pub mod traits;
pub mod validation;

pub use algorithm::{assign_memberships, EmptyClusterPolicy, FitStatus, KMeans, KMeansFit};
pub use centroid::recompute_centroids;
pub use convergence::{centroids_equal, has_converged, Convergence, StepStatus};
pub use distance::{distance_matrix, euclidean_distance};
pub use error::{KMeansError, Result};
pub use initialization::{seed_centroids, Seeding};
pub use traits::KClustering;
pub use validation::{is_valid, validate};
