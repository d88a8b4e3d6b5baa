use crate::centroid::recompute_centroids;
use crate::error::Result;

/// Criterion used to decide that two consecutive centroid sets are the same.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Convergence {
    /// Every element must compare equal with `==`.
    Exact,
    /// The largest absolute elementwise difference must not exceed the value.
    Tolerance(f64),
}

impl Default for Convergence {
    fn default() -> Self {
        Convergence::Tolerance(1e-9)
    }
}

/// Outcome of a single assign/update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Converged,
    Continuing,
}

pub fn centroids_equal(a: &[Vec<f64>], b: &[Vec<f64>], criterion: Convergence) -> bool {
    if a.len() != b.len() || a.iter().zip(b.iter()).any(|(x, y)| x.len() != y.len()) {
        return false;
    }

    let mut pairs = a
        .iter()
        .zip(b.iter())
        .flat_map(|(x, y)| x.iter().zip(y.iter()));

    match criterion {
        Convergence::Exact => pairs.all(|(x, y)| x == y),
        Convergence::Tolerance(tolerance) => pairs.all(|(x, y)| (x - y).abs() <= tolerance),
    }
}

pub fn step_status(previous: &[Vec<f64>], updated: &[Vec<f64>], criterion: Convergence) -> StepStatus {
    if centroids_equal(previous, updated, criterion) {
        StepStatus::Converged
    } else {
        StepStatus::Continuing
    }
}

/// Recomputes the centroids from `memberships` and checks them against `centroids` exactly.
///
/// Returns the flag together with the recomputed set; `centroids` itself is left untouched.
/// A cluster without members keeps its entry from `centroids`.
pub fn has_converged(
    data: &[Vec<f64>],
    centroids: &[Vec<f64>],
    memberships: &[usize],
) -> Result<(bool, Vec<Vec<f64>>)> {
    let updated: Vec<Vec<f64>> = recompute_centroids(data, memberships, centroids.len())?
        .into_iter()
        .zip(centroids.iter())
        .map(|(mean, previous)| mean.unwrap_or_else(|| previous.clone()))
        .collect();

    let converged = centroids_equal(centroids, &updated, Convergence::Exact);
    Ok((converged, updated))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Vec<Vec<f64>> {
        vec![vec![0.0, 0.0, 0.0], vec![4.0, 4.0, 4.0], vec![-4.0, -4.0, -4.0]]
    }

    #[test]
    fn test_has_converged_only_on_exact_means() {
        let data = data();
        let memberships = [0, 1, 2];

        let off = vec![vec![1.0, 0.0, 0.0], vec![3.0, 4.0, 3.0], vec![-2.0, -3.0, -4.0]];
        let (converged, updated) = has_converged(&data, &off, &memberships).unwrap();
        assert!(!converged);
        assert_eq!(updated, data);

        let (converged, _) = has_converged(&data, &data, &memberships).unwrap();
        assert!(converged);
    }

    #[test]
    fn test_tolerance_absorbs_noise() {
        let a = vec![vec![1.0, 2.0]];
        let b = vec![vec![1.0 + 1e-12, 2.0]];
        assert!(!centroids_equal(&a, &b, Convergence::Exact));
        assert!(centroids_equal(&a, &b, Convergence::Tolerance(1e-9)));
        assert!(!centroids_equal(&a, &b, Convergence::Tolerance(0.0)));
    }

    #[test]
    fn test_shape_mismatch_is_not_equal() {
        let a = vec![vec![1.0, 2.0]];
        let b = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert!(!centroids_equal(&a, &b, Convergence::Exact));
        assert!(!centroids_equal(&a, &[vec![1.0]], Convergence::Tolerance(1.0)));
    }

    #[test]
    fn test_step_status() {
        let a = vec![vec![0.5]];
        assert_eq!(step_status(&a, &a, Convergence::Exact), StepStatus::Converged);
        assert_eq!(
            step_status(&a, &[vec![0.75]], Convergence::Tolerance(0.1)),
            StepStatus::Continuing
        );
    }

    #[test]
    fn test_nan_never_converges() {
        let a = vec![vec![f64::NAN]];
        assert!(!centroids_equal(&a, &a, Convergence::Exact));
        assert!(!centroids_equal(&a, &a, Convergence::Tolerance(1.0)));
    }
}
