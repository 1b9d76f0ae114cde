use super::*;
use crate::helpers::models::*;

fn create_field(problem: &Problem) -> PheromoneField {
    let tau0 = PheromoneField::initial_trail(problem);
    let mut field = PheromoneField::new(problem, tau0 * 1e-3).unwrap();
    field.initialize(tau0);

    field
}

#[test]
fn can_calculate_initial_trail() {
    let problem = create_square_problem(4);

    assert_eq!(PheromoneField::initial_trail(&problem), 1. / 20.);
}

#[test]
fn can_reject_non_positive_minimum() {
    let problem = create_square_problem(4);

    assert!(matches!(PheromoneField::new(&problem, 0.), Err(AcoError::Configuration(_))));
    assert!(matches!(PheromoneField::new(&problem, f64::NAN), Err(AcoError::Configuration(_))));
}

#[test]
fn can_initialize_trail_not_below_minimum() {
    let problem = create_square_problem(4);
    let mut field = PheromoneField::new(&problem, 0.1).unwrap();

    field.initialize(0.01);

    assert_eq!(field.min_trail(), 0.1);
    assert_eq!(field.tau_min(), 0.1);
    assert_eq!(field.size(), 5);
}

#[test]
fn can_evaporate_with_clamping() {
    let problem = create_square_problem(4);
    let mut field = PheromoneField::new(&problem, 0.01).unwrap();
    field.initialize(1.);

    field.evaporate(0.5);
    assert_eq!(field.trail(0, 1), 0.5);

    (0..10).for_each(|_| field.evaporate(0.5));
    assert_eq!(field.trail(0, 1), 0.01);
    assert_eq!(field.min_trail(), 0.01);
}

#[test]
fn can_keep_trail_with_zero_rho() {
    let problem = create_square_problem(4);
    let mut field = create_field(&problem);
    let before = field.total_trail();

    field.evaporate(0.);

    assert_eq!(field.total_trail(), before);
}

#[test]
fn can_deposit_symmetrically() {
    let problem = create_square_problem(4);
    let mut field = PheromoneField::new(&problem, 0.01).unwrap();
    field.initialize(1.);
    let tour = Tour::new(&problem, vec![0, 4, 1, 2, 3]);

    field.deposit(&tour, 0.25);

    tour.edges().for_each(|(from, to)| {
        assert_eq!(field.trail(from, to), 1.25);
        assert_eq!(field.trail(to, from), 1.25);
    });
    assert_eq!(field.trail(0, 2), 1.);
    assert!(field.is_symmetric());
}

parameterized_test! {can_rebuild_choice_info, (alpha, beta, expected), {
    can_rebuild_choice_info_impl(alpha, beta, expected);
}}

can_rebuild_choice_info! {
    case01_both: (1., 2., 2. * 4.),
    case02_heuristic_only: (0., 2., 4.),
    case03_pheromone_only: (1., 0., 2.),
    case04_fractional: (0.5, 1., 2_f64.sqrt() * 2.),
}

fn can_rebuild_choice_info_impl(alpha: f64, beta: f64, expected: f64) {
    let problem = create_square_problem(4);
    let mut field = PheromoneField::new(&problem, 0.01).unwrap();
    field.initialize(2.);

    field.rebuild_choice_info(alpha, beta);

    // distance between 0 and 4 is 0.5, so heuristic is 2
    assert_approx!(field.choice(0, 4), expected);
    assert_approx!(field.choice(4, 0), expected);
    assert_eq!(field.heuristic(0, 4), 2.);
    (0..5).for_each(|city| assert_eq!(field.choice(city, city), 0.));
    assert_eq!(field.choice_row(0).len(), 5);
}

#[test]
fn can_keep_symmetry_and_positivity_after_many_updates() {
    let problem = create_random_problem(50, 10, 11);
    let mut field = create_field(&problem);
    let mut stream = crate::utils::RandomStream::new(17, 64);
    let mut cities = (0..50).collect::<Vec<_>>();

    for _ in 0..1000 {
        stream.shuffle(cities.as_mut_slice());
        let tour = Tour::new(&problem, cities.clone());

        field.evaporate(0.2);
        field.deposit(&tour, 1. / tour.length());
        field.rebuild_choice_info(1., 2.);
    }

    assert!(field.is_symmetric());
    assert!(field.min_trail() >= field.tau_min());
    assert!(field.tau_min() > 0.);
}

#[test]
fn can_have_less_mass_with_larger_rho() {
    let problem = create_circle_problem(20, 5);
    let tours = [
        Tour::new(&problem, (0..20).collect()),
        Tour::new(&problem, (0..20).rev().collect()),
        Tour::new(&problem, (0..20).map(|idx| (idx * 3) % 20).collect()),
    ];

    let masses = [0.1, 0.3, 0.5, 0.9]
        .iter()
        .map(|&rho| {
            let mut field = create_field(&problem);
            for iteration in 0..200 {
                field.evaporate(rho);
                field.deposit(&tours[iteration % tours.len()], 1. / tours[iteration % tours.len()].length());
            }
            field.total_trail()
        })
        .collect::<Vec<_>>();

    assert!(masses.windows(2).all(|pair| pair[0] >= pair[1]), "masses are not decreasing: {masses:?}");
}
