use dbscan1d::{Dbscan1D, NOISE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_every_point_labeled(
        data in prop::collection::vec(-10.0f64..10.0, 0..40),
        eps in 0.0f64..3.0,
        min_samples in 1usize..6,
    ) {
        let mut model = Dbscan1D::new(eps, min_samples);
        let labels = model.fit_predict(&data, None).unwrap();

        prop_assert_eq!(labels.len(), data.len());
        for &l in &labels {
            prop_assert!(l >= NOISE);
        }
    }

    #[test]
    fn prop_cluster_ids_contiguous_from_zero(
        data in prop::collection::vec(-10.0f64..10.0, 1..40),
        eps in 0.0f64..3.0,
        min_samples in 1usize..6,
    ) {
        let mut model = Dbscan1D::new(eps, min_samples);
        let labels = model.fit_predict(&data, None).unwrap();

        let mut ids: Vec<i64> = labels.iter().copied().filter(|&l| l != NOISE).collect();
        ids.sort_unstable();
        ids.dedup();
        for (k, &id) in ids.iter().enumerate() {
            prop_assert_eq!(id, k as i64);
        }
    }

    #[test]
    fn prop_labeled_points_near_core_of_same_cluster(
        data in prop::collection::vec(-10.0f64..10.0, 1..40),
        eps in 0.0f64..3.0,
        min_samples in 1usize..6,
    ) {
        let mut model = Dbscan1D::new(eps, min_samples);
        model.fit(&data, None).unwrap();
        let labels = model.labels().unwrap();
        let cores = model.core_sample_indices().unwrap();

        for (i, &label) in labels.iter().enumerate() {
            if label == NOISE {
                continue;
            }
            let ok = cores.contains(&i)
                || cores.iter().any(|&j| {
                    labels[j] == label && (data[i] - data[j]).abs() <= eps
                });
            prop_assert!(ok, "point {} labeled {} has no core within eps", i, label);
        }
    }

    #[test]
    fn prop_order_invariant_under_reversal(
        data in prop::collection::vec(-10.0f64..10.0, 0..40),
        eps in 0.0f64..3.0,
        min_samples in 1usize..6,
    ) {
        let mut model = Dbscan1D::new(eps, min_samples);
        let labels = model.fit_predict(&data, None).unwrap();

        let mut reversed = data.clone();
        reversed.reverse();
        let mut labels_rev = model.fit_predict(&reversed, None).unwrap();
        labels_rev.reverse();

        prop_assert_eq!(labels, labels_rev);
    }

    #[test]
    fn prop_unit_weights_match_default(
        data in prop::collection::vec(-10.0f64..10.0, 0..40),
        eps in 0.0f64..3.0,
        min_samples in 1usize..6,
    ) {
        let weights = vec![1.0f64; data.len()];
        let mut model = Dbscan1D::new(eps, min_samples);

        let unweighted = model.fit_predict(&data, None).unwrap();
        let weighted = model.fit_predict(&data, Some(&weights)).unwrap();

        prop_assert_eq!(unweighted, weighted);
    }
}
