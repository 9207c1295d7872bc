use exemplar::cluster::{Clustering, DistanceMatrix, Pam};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_pam_all_assigned(
        data in prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 2), 1..20),
        k in 1usize..5
    ) {
        // Skip if k > n
        if k <= data.len() {
            let model = Pam::new(k).with_seed(42);
            let fit = model.fit(&data).unwrap();

            prop_assert!(fit.converged);
            prop_assert!(fit.cost >= 0.0);
            prop_assert_eq!(fit.labels.len(), data.len());
            for &l in &fit.labels {
                prop_assert!(l < k);
            }

            let mut medoids = fit.medoids.clone();
            medoids.sort_unstable();
            medoids.dedup();
            prop_assert_eq!(medoids.len(), k);
            prop_assert!(medoids.iter().all(|&m| m < data.len()));

            // Same seed through the trait: identical labels.
            let labels = model.fit_predict(&data).unwrap();
            prop_assert_eq!(labels, fit.labels);
        }
    }

    #[test]
    fn prop_distance_matrix_symmetric(
        data in prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 3), 1..15)
    ) {
        let dist = DistanceMatrix::from_points(&data);
        for i in 0..data.len() {
            prop_assert_eq!(dist.get(i, i), 0.0);
            for j in 0..data.len() {
                prop_assert_eq!(dist.get(i, j), dist.get(j, i));
                prop_assert!(dist.get(i, j) >= 0.0);
            }
        }
    }
}
