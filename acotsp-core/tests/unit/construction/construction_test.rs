use super::*;
use crate::helpers::models::*;

struct Context {
    pool: ThreadPool,
    streams: RandomStreamPool,
    arena: WorkerArena,
    field: PheromoneField,
}

fn create_context(problem: &Problem, threads: usize, seed: u64) -> Context {
    let tau0 = PheromoneField::initial_trail(problem);
    let mut field = PheromoneField::new(problem, tau0 * 1e-3).unwrap();
    field.initialize(tau0);
    field.rebuild_choice_info(1., 2.);

    Context {
        pool: ThreadPool::new(threads).unwrap(),
        streams: RandomStreamPool::new(seed, threads),
        arena: WorkerArena::new(threads, problem.size(), problem.candidates_size(), 1).unwrap(),
        field,
    }
}

fn run_construction(problem: &Problem, ants: usize, ctx: &mut Context) -> AcoResult<Vec<Tour>> {
    TourConstruction::new(ants).run(&ctx.pool, problem, &ctx.field, &mut ctx.streams, &mut ctx.arena)
}

parameterized_test! {can_construct_tours_for_all_ants, (size, ants, threads), {
    can_construct_tours_for_all_ants_impl(size, ants, threads);
}}

can_construct_tours_for_all_ants! {
    case01_less_ants_than_threads: (10, 2, 4),
    case02_even_split: (10, 8, 4),
    case03_uneven_split: (30, 7, 3),
    case04_more_ants_than_cities: (5, 12, 2),
    case05_single_thread: (20, 5, 1),
}

fn can_construct_tours_for_all_ants_impl(size: usize, ants: usize, threads: usize) {
    let problem = create_random_problem(size, 4, size as u64);
    let mut ctx = create_context(&problem, threads, 1);

    let tours = run_construction(&problem, ants, &mut ctx).unwrap();

    assert_eq!(tours.len(), ants);
    tours.iter().enumerate().for_each(|(ant, tour)| {
        assert!(is_permutation(tour.cities(), size));
        assert_eq!(tour.cities()[0], ant % size);
        assert_approx!(tour.length(), problem.tour_length(tour.cities()), 1e-6);
    });
}

#[test]
fn can_reproduce_tours_with_same_seed_and_threads() {
    let problem = create_random_problem(50, 10, 1);

    let build = || {
        let mut ctx = create_context(&problem, 3, 42);
        (0..3).map(|_| run_construction(&problem, 10, &mut ctx).unwrap()).collect::<Vec<_>>()
    };

    assert_eq!(build(), build());
}

#[test]
fn can_detect_streams_and_arena_mismatch() {
    let problem = create_square_problem(4);
    let mut ctx = create_context(&problem, 2, 0);
    ctx.streams = RandomStreamPool::new(0, 3);

    let result = run_construction(&problem, 4, &mut ctx);

    assert!(matches!(result, Err(AcoError::InvariantViolation(_))));
}
