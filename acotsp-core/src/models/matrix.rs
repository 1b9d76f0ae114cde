#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::algorithms::structures::{AlignedBuffer, elements_per_line};
use crate::utils::{AcoError, AcoResult};

/// A dense square matrix of reals stored row-major. Every row starts on a cache line boundary and
/// occupies a whole number of lines, so rows can be processed by different workers independently
/// and row scans stay vector friendly.
pub struct SquareMatrix {
    data: AlignedBuffer<f64>,
    size: usize,
    stride: usize,
}

impl SquareMatrix {
    /// Creates a new matrix filled with the given value.
    pub fn new(size: usize, value: f64) -> AcoResult<Self> {
        let line = elements_per_line::<f64>();
        let stride = size.div_ceil(line).max(1) * line;

        let total = size
            .checked_mul(stride)
            .ok_or_else(|| AcoError::ResourceExhaustion(format!("matrix of size {size} is too large")))?;

        Ok(Self { data: AlignedBuffer::new(total, value)?, size, stride })
    }

    /// Returns value at the given cell.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        debug_assert!(row < self.size && column < self.size);
        self.data.as_slice()[row * self.stride + column]
    }

    /// Sets value at the given cell.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        debug_assert!(row < self.size && column < self.size);
        self.data.as_mut_slice()[row * self.stride + column] = value;
    }

    /// Returns a row without padding.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.stride;
        &self.data.as_slice()[start..start + self.size]
    }

    /// Returns a row without padding.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.stride;
        &mut self.data.as_mut_slice()[start..start + self.size]
    }

    /// Returns the whole storage including row padding, use `stride` to split it into rows.
    pub fn as_mut_padded(&mut self) -> &mut [f64] {
        self.data.as_mut_slice()
    }

    /// Sets all cells (including diagonal) to the given value.
    pub fn fill(&mut self, value: f64) {
        self.data.as_mut_slice().iter_mut().for_each(|cell| *cell = value);
    }

    /// Returns amount of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between row starts in elements.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns true if matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
