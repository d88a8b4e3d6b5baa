use lloyd_kmeans::distance::euclidean;
use lloyd_kmeans::{Convergence, FitStatus, KMeans};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_fit_terminates_with_labels_in_range(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 3), 1..30),
        k in 1usize..6,
        max_iterations in 1usize..20,
    ) {
        // Skip if k > n
        if k <= data.len() {
            let fit = KMeans::new(k)
                .with_max_iterations(max_iterations)
                .with_seed(42)
                .fit(&data)
                .unwrap();

            prop_assert_eq!(fit.memberships.len(), data.len());
            prop_assert_eq!(fit.centroids.len(), k);
            prop_assert!(fit.iterations >= 1 && fit.iterations <= max_iterations);
            if fit.status == FitStatus::Capped {
                prop_assert_eq!(fit.iterations, max_iterations);
            }
            for &label in &fit.memberships {
                prop_assert!(label < k);
            }
            for centroid in &fit.centroids {
                prop_assert_eq!(centroid.len(), 3);
                prop_assert!(centroid.iter().all(|value| value.is_finite()));
            }
        }
    }

    #[test]
    fn prop_euclidean_symmetric(
        a in prop::collection::vec(-1e3f64..1e3, 4),
        b in prop::collection::vec(-1e3f64..1e3, 4),
    ) {
        prop_assert_eq!(euclidean(&a, &b).unwrap(), euclidean(&b, &a).unwrap());
        prop_assert_eq!(euclidean(&a, &a).unwrap(), 0.0);
        prop_assert!(euclidean(&a, &b).unwrap() >= 0.0);
    }

    #[test]
    fn prop_same_seed_same_fit(
        data in prop::collection::vec(prop::collection::vec(-5.0f64..5.0, 2), 2..25),
        seed in any::<u64>(),
    ) {
        let kmeans = KMeans::new(2).with_seed(seed).with_convergence(Convergence::Exact);
        prop_assert_eq!(kmeans.fit(&data).unwrap(), kmeans.fit(&data).unwrap());
    }
}
