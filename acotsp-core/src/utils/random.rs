//! Per worker pseudorandom streams which serve uniform reals in batches.

#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Default amount of reals generated at once.
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Spreads worker seeds (golden ratio increment, as in splitmix64).
const STREAM_SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Maps the 53 high bits of an integer to [0, 1).
const REAL_SCALE: f64 = 1. / (1_u64 << 53) as f64;

/// A pseudorandom stream owned by a single worker.
///
/// Raw integers are produced with one `fill` call per batch and converted to reals in a tight
/// loop, so draws inside the hot construction loop are just a cursor increment. The struct is
/// aligned to a cache line: streams of neighbouring workers are stored next to each other and
/// their cursors must not share a line.
#[repr(align(64))]
pub struct RandomStream {
    rng: SmallRng,
    raw: Vec<u64>,
    batch: Vec<f64>,
    cursor: usize,
}

impl RandomStream {
    /// Creates a new stream with the given seed and batch capacity.
    pub fn new(seed: u64, batch_size: usize) -> Self {
        let batch_size = batch_size.max(1);

        Self {
            rng: SmallRng::seed_from_u64(seed),
            raw: vec![0; batch_size],
            batch: vec![0.; batch_size],
            cursor: batch_size,
        }
    }

    /// Returns `count` uniform reals in [0, 1). Regenerates the underlying batch when it has not
    /// enough values left and grows it when `count` exceeds its capacity.
    pub fn next_batch(&mut self, count: usize) -> &[f64] {
        if count > self.batch.len() {
            self.raw.resize(count, 0);
            self.batch.resize(count, 0.);
            self.cursor = self.batch.len();
        }

        if self.batch.len() - self.cursor < count {
            self.refill();
        }

        let start = self.cursor;
        self.cursor += count;

        &self.batch[start..self.cursor]
    }

    /// Returns a single uniform real in [0, 1).
    pub fn next_real(&mut self) -> f64 {
        if self.cursor == self.batch.len() {
            self.refill();
        }

        let value = self.batch[self.cursor];
        self.cursor += 1;

        value
    }

    /// Returns uniformly distributed index in [0, bound).
    pub fn uniform_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0);
        ((self.next_real() * bound as f64) as usize).min(bound - 1)
    }

    /// Shuffles items in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for idx in (1..items.len()).rev() {
            let other = self.uniform_index(idx + 1);
            items.swap(idx, other);
        }
    }

    /// Returns capacity of the underlying batch.
    pub fn batch_size(&self) -> usize {
        self.batch.len()
    }

    fn refill(&mut self) {
        self.rng.fill(self.raw.as_mut_slice());
        self.batch.iter_mut().zip(self.raw.iter()).for_each(|(real, &bits)| *real = (bits >> 11) as f64 * REAL_SCALE);
        self.cursor = 0;
    }
}

/// Keeps one independent stream per worker. A stream depends only on the pool seed and the worker
/// index, so a fixed seed and a fixed amount of workers give identical draws.
pub struct RandomStreamPool {
    seed: u64,
    streams: Vec<RandomStream>,
}

impl RandomStreamPool {
    /// Creates a pool of `workers` streams with default batch size.
    pub fn new(seed: u64, workers: usize) -> Self {
        Self::new_with_batch_size(seed, workers, DEFAULT_BATCH_SIZE)
    }

    /// Creates a pool of `workers` streams with given batch size.
    pub fn new_with_batch_size(seed: u64, workers: usize, batch_size: usize) -> Self {
        let streams = (0..workers as u64)
            .map(|worker| RandomStream::new(seed.wrapping_add(worker.wrapping_mul(STREAM_SEED_STEP)), batch_size))
            .collect();

        Self { seed, streams }
    }

    /// Returns a stream which belongs to the given worker.
    pub fn acquire(&mut self, worker: usize) -> &mut RandomStream {
        &mut self.streams[worker]
    }

    /// Returns all streams, indexed by worker.
    pub fn streams_mut(&mut self) -> &mut [RandomStream] {
        self.streams.as_mut_slice()
    }

    /// Returns amount of streams.
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Returns true if pool has no streams.
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Returns the pool seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
