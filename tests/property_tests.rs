use cleanroute::batch::batch_by_proximity;
use cleanroute::geo::GeoPoint;
use cleanroute::job::{Job, Severity, WasteType};
use cleanroute::route::nearest_neighbor;
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_point()(
        lat in -80.0..80.0f64,
        lng in -179.0..179.0f64
    ) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }
}

prop_compose! {
    fn arb_jobs()(
        points in proptest::collection::vec(arb_point(), 1..30)
    ) -> Vec<Job> {
        points
            .into_iter()
            .enumerate()
            .map(|(i, location)| Job {
                id: i as u64 + 1,
                location,
                waste_type: WasteType::default(),
                severity: Severity::default(),
                description: String::new(),
            })
            .collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_fallback_returns_a_permutation(origin in arb_point(), jobs in arb_jobs()) {
        let ordered = nearest_neighbor(origin, &jobs);

        let mut expected: Vec<u64> = jobs.iter().map(|j| j.id).collect();
        let mut actual: Vec<u64> = ordered.iter().map(|j| j.id).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn test_fallback_is_deterministic(origin in arb_point(), jobs in arb_jobs()) {
        let first: Vec<u64> = nearest_neighbor(origin, &jobs).iter().map(|j| j.id).collect();
        let second: Vec<u64> = nearest_neighbor(origin, &jobs).iter().map(|j| j.id).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_batches_partition_the_input(
        jobs in arb_jobs(),
        threshold in 0.001..500.0f64
    ) {
        let batches = batch_by_proximity(&jobs, threshold);

        let mut ids: Vec<u64> = batches
            .iter()
            .flat_map(|b| std::iter::once(b.anchor.id).chain(b.members.iter().map(|m| m.id)))
            .collect();
        ids.sort_unstable();

        let mut expected: Vec<u64> = jobs.iter().map(|j| j.id).collect();
        expected.sort_unstable();

        prop_assert_eq!(ids, expected);
        prop_assert!(batches.iter().all(|b| b.size == b.members.len() + 1));
    }

    #[test]
    fn test_haversine_symmetry(a in arb_point(), b in arb_point()) {
        let ab = a.haversine_km(&b);
        let ba = b.haversine_km(&a);
        prop_assert!((ab - ba).abs() < 1e-9);
        prop_assert!(ab >= 0.0);
    }

    #[test]
    fn test_haversine_identity(p in arb_point()) {
        prop_assert_eq!(p.haversine_km(&p), 0.0);
    }
}
