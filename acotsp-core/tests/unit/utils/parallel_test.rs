use super::*;
use std::ops::Range;

parameterized_test! {can_split_into_chunk_ranges, (items, workers, expected), {
    can_split_into_chunk_ranges_impl(items, workers, expected);
}}

can_split_into_chunk_ranges! {
    case01_even: (8, 4, vec![0..2, 2..4, 4..6, 6..8]),
    case02_uneven: (10, 4, vec![0..3, 3..6, 6..9, 9..10]),
    case03_less_items: (2, 4, vec![0..1, 1..2, 2..2, 2..2]),
    case04_single_worker: (5, 1, vec![0..5]),
    case05_no_items: (0, 2, vec![0..0, 0..0]),
    case06_tail_is_empty: (7, 3, vec![0..3, 3..6, 6..7]),
}

fn can_split_into_chunk_ranges_impl(items: usize, workers: usize, expected: Vec<Range<usize>>) {
    let ranges = chunk_ranges(items, workers);

    assert_eq!(ranges, expected);
    assert_eq!(ranges.iter().map(|range| range.len()).sum::<usize>(), items);
}

#[test]
fn can_collect_in_source_order() {
    let pool = ThreadPool::new(3).unwrap();

    let result = pool.execute(|| parallel_into_collect((0..100).collect(), |value: usize| value * 2));

    assert_eq!(result, (0..100).map(|value| value * 2).collect::<Vec<_>>());
    assert_eq!(pool.threads(), 3);
}

#[test]
fn can_process_chunks_with_their_index() {
    let mut data = vec![0_usize; 10];

    parallel_chunks_mut(data.as_mut_slice(), 3, |idx, chunk| chunk.iter_mut().for_each(|value| *value = idx));

    assert_eq!(data, vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 3]);
}

#[test]
fn can_process_chunks_on_pool_workers() {
    let pool = ThreadPool::new(2).unwrap();
    let mut names = vec![String::new(); 8];

    pool.execute(|| {
        parallel_chunks_mut(names.as_mut_slice(), 1, |_, chunk| {
            chunk[0] = std::thread::current().name().unwrap_or_default().to_string();
        })
    });

    assert!(names.iter().all(|name| name.starts_with("ant-worker-")), "{names:?}");
}
