#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

pub use self::actual::ThreadPool;
pub use self::actual::parallel_chunks_mut;
pub use self::actual::parallel_into_collect;

use std::ops::Range;

/// Splits `items` into `workers` contiguous ranges of `ceil(items / workers)` elements. Trailing
/// ranges can be shorter or empty, so the result always has `workers` entries.
pub fn chunk_ranges(items: usize, workers: usize) -> Vec<Range<usize>> {
    let chunk = items.div_ceil(workers.max(1));

    (0..workers).map(|worker| (worker * chunk).min(items)..((worker + 1) * chunk).min(items)).collect()
}

#[cfg(not(target_arch = "wasm32"))]
mod actual {
    extern crate rayon;
    use self::rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};
    use crate::utils::{AcoError, AcoResult};
    use rayon::prelude::*;

    /// Represents a thread pool wrapper.
    pub struct ThreadPool {
        inner: RayonThreadPool,
    }

    impl ThreadPool {
        /// Creates a new instance of `ThreadPool` with exactly `num_threads` workers.
        pub fn new(num_threads: usize) -> AcoResult<Self> {
            ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .thread_name(|idx| format!("ant-worker-{idx}"))
                .build()
                .map(|inner| Self { inner })
                .map_err(|err| AcoError::ResourceExhaustion(format!("cannot build a thread pool: '{err}'")))
        }

        /// Executes given operation on thread pool.
        pub fn execute<OP, R>(&self, op: OP) -> R
        where
            OP: FnOnce() -> R + Send,
            R: Send,
        {
            self.inner.install(op)
        }

        /// Returns amount of worker threads.
        pub fn threads(&self) -> usize {
            self.inner.current_num_threads()
        }
    }

    /// Maps collection and collects results into vector in parallel preserving the source order.
    pub fn parallel_into_collect<T, F, R>(source: Vec<T>, map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(T) -> R + Sync + Send,
        R: Send,
    {
        source.into_par_iter().map(map_op).collect()
    }

    /// Applies action to each chunk of the given size (the last one can be shorter) in parallel.
    /// The action receives chunk index.
    pub fn parallel_chunks_mut<T, F>(source: &mut [T], chunk_size: usize, action: F)
    where
        T: Send + Sync,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        source.par_chunks_mut(chunk_size.max(1)).enumerate().for_each(|(idx, chunk)| action(idx, chunk))
    }
}

#[cfg(target_arch = "wasm32")]
mod actual {
    use crate::utils::AcoResult;

    /// Represents a thread pool wrapper.
    pub struct ThreadPool;

    impl ThreadPool {
        /// Creates a new instance of `ThreadPool`.
        pub fn new(_num_threads: usize) -> AcoResult<Self> {
            Ok(Self {})
        }

        /// Executes given operation on thread pool (dummy).
        pub fn execute<OP, R>(&self, op: OP) -> R
        where
            OP: FnOnce() -> R + Send,
            R: Send,
        {
            op()
        }

        /// Returns amount of worker threads.
        pub fn threads(&self) -> usize {
            1
        }
    }

    /// Map collections and collects results into vector synchronously.
    pub fn parallel_into_collect<T, F, R>(source: Vec<T>, map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(T) -> R + Sync + Send,
        R: Send,
    {
        source.into_iter().map(map_op).collect()
    }

    /// Applies action to each chunk synchronously.
    pub fn parallel_chunks_mut<T, F>(source: &mut [T], chunk_size: usize, action: F)
    where
        T: Send + Sync,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        source.chunks_mut(chunk_size.max(1)).enumerate().for_each(|(idx, chunk)| action(idx, chunk))
    }
}
