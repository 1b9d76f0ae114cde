use super::*;
use crate::helpers::models::*;

parameterized_test! {can_measure_distance, (kind, from, to, expected), {
    assert_eq!(kind.measure(&Coordinate::from(from), &Coordinate::from(to)), expected);
}}

can_measure_distance! {
    case01_euclidean: (DistanceKind::Euclidean, (0., 0.), (3., 4.), 5.),
    case02_euclidean_fraction: (DistanceKind::Euclidean, (0., 0.), (0., 0.5), 0.5),
    case03_rounded: (DistanceKind::RoundedEuclidean, (0., 0.), (1., 1.), 1.),
    case04_rounded_up: (DistanceKind::RoundedEuclidean, (0., 0.), (1.5, 1.5), 2.),
    case05_ceil: (DistanceKind::CeilEuclidean, (0., 0.), (1., 1.), 2.),
    case06_ceil_exact: (DistanceKind::CeilEuclidean, (0., 0.), (3., 4.), 5.),
    case07_pseudo: (DistanceKind::Pseudo, (0., 0.), (10., 0.), 4.),
    case08_pseudo_exact: (DistanceKind::Pseudo, (0., 0.), (0., 10.), 4.),
}

#[test]
fn can_create_problem_with_symmetric_distances() {
    let problem = create_square_problem(4);

    assert_eq!(problem.size(), 5);
    assert_eq!(problem.kind(), DistanceKind::Euclidean);
    assert_eq!(problem.coordinate(2), &Coordinate::new(1., 1.));
    assert!(problem.distances().is_symmetric());
    (0..5).for_each(|city| assert_eq!(problem.distance(city, city), 0.));
    assert_eq!(problem.distance(0, 4), 0.5);
    assert_eq!(problem.distance(1, 3), 2_f64.sqrt());
}

parameterized_test! {can_build_candidate_lists, (k_backup, city, expected), {
    let problem = create_square_problem(k_backup);
    assert_eq!(problem.candidates(city), expected.as_slice());
}}

can_build_candidate_lists! {
    case01_full_list: (4, 0, vec![4, 1, 3, 2]),
    case02_ties_by_id: (4, 2, vec![1, 3, 4, 0]),
    case03_truncated: (2, 0, vec![4, 1]),
    case04_middle_city: (2, 4, vec![0, 1]),
    case05_k_clamped: (10, 3, vec![0, 2, 4, 1]),
}

#[test]
fn can_keep_candidates_ordered_and_unique() {
    let problem = create_random_problem(60, 10, 3);

    (0..problem.size()).for_each(|city| {
        let candidates = problem.candidates(city);
        assert_eq!(candidates.len(), 10);
        assert!(!candidates.contains(&city));
        assert!(candidates.windows(2).all(|pair| problem.distance(city, pair[0]) <= problem.distance(city, pair[1])));

        let mut unique = candidates.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), candidates.len());

        let farthest = problem.distance(city, candidates[9]);
        (0..problem.size())
            .filter(|other| *other != city && !candidates.contains(other))
            .for_each(|other| assert!(problem.distance(city, other) >= farthest));
    });
}

#[test]
fn can_estimate_nearest_neighbour_tour() {
    let problem = create_square_problem(4);

    // 0 -> 4 -> 1 -> 2 -> 3 -> 0
    assert_eq!(problem.nn_tour_length(), 4.);
}

#[test]
fn can_calculate_tour_length() {
    let problem = create_square_problem(4);

    assert_eq!(problem.tour_length(&[0, 4, 1, 2, 3]), 4.);
    assert_approx!(problem.tour_length(&[0, 2, 1, 3, 4]), 2. * 2_f64.sqrt() + 1. + 1.25_f64.sqrt() + 0.5);
    assert_eq!(problem.tour_length(&[]), 0.);
}

parameterized_test! {can_detect_degenerate_instance, coordinates, {
    let coordinates = coordinates.into_iter().map(Coordinate::from).collect::<Vec<_>>();
    let result = Problem::new(coordinates, DistanceKind::Euclidean, 4);
    assert!(matches!(result, Err(AcoError::DegenerateInstance(_))));
}}

can_detect_degenerate_instance! {
    case01_empty: Vec::<(f64, f64)>::new(),
    case02_single: vec![(0., 0.)],
    case03_coincident: vec![(0., 0.), (1., 1.), (0., 0.)],
    case04_not_finite: vec![(0., 0.), (f64::NAN, 1.)],
}

#[test]
fn can_detect_coincident_cities_after_rounding() {
    let coordinates = vec![Coordinate::new(0., 0.), Coordinate::new(0.2, 0.2), Coordinate::new(5., 5.)];

    let result = Problem::new(coordinates, DistanceKind::RoundedEuclidean, 2);

    assert!(matches!(result, Err(AcoError::DegenerateInstance(_))));
}
