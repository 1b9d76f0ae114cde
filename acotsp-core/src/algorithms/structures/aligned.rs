//! Cache line aligned storage.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/structures/aligned_test.rs"]
mod aligned_test;

use crate::utils::{AcoError, AcoResult};

/// Assumed size of a cache line in bytes.
pub const CACHE_LINE: usize = 64;

/// Returns how many elements of `T` fit into one cache line.
pub fn elements_per_line<T>() -> usize {
    (CACHE_LINE / std::mem::size_of::<T>().max(1)).max(1)
}

/// A fixed size buffer whose first element starts on a cache line boundary.
///
/// The backing vector is over-allocated by one line and the aligned window is located with
/// `align_offset`. The heap block never moves, so the offset stays valid for the buffer lifetime.
pub struct AlignedBuffer<T> {
    data: Vec<T>,
    offset: usize,
    len: usize,
}

impl<T: Copy> AlignedBuffer<T> {
    /// Creates a new buffer of `len` copies of `value`.
    pub fn new(len: usize, value: T) -> AcoResult<Self> {
        let extra = elements_per_line::<T>();
        let capacity = len
            .checked_add(extra)
            .ok_or_else(|| AcoError::ResourceExhaustion(format!("buffer of {len} elements is too large")))?;

        let mut data = Vec::new();
        data.try_reserve_exact(capacity).map_err(|err| {
            AcoError::ResourceExhaustion(format!("cannot allocate buffer of {capacity} elements: '{err}'"))
        })?;
        data.resize(capacity, value);

        // NOTE align_offset is allowed to give up (usize::MAX), the buffer is still usable then
        let offset = match data.as_ptr().align_offset(CACHE_LINE) {
            offset if offset < extra => offset,
            _ => 0,
        };

        Ok(Self { data, offset, len })
    }

    /// Returns the aligned window.
    pub fn as_slice(&self) -> &[T] {
        &self.data[self.offset..self.offset + self.len]
    }

    /// Returns the aligned window.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[self.offset..self.offset + self.len]
    }

    /// Returns amount of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if buffer has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// An arena with one slot per worker. Every slot starts on a cache line boundary and is followed by
/// `pad_blocks` whole lines of padding, so that slots of different workers never share a line and
/// adjacent line prefetching does not pull a neighbour's data.
pub struct PaddedArena<T> {
    buffer: AlignedBuffer<T>,
    slots: usize,
    slot_len: usize,
    stride: usize,
}

impl<T: Copy + Send> PaddedArena<T> {
    /// Creates a new arena with `slots` slots of `slot_len` elements each.
    pub fn new(slots: usize, slot_len: usize, pad_blocks: usize, value: T) -> AcoResult<Self> {
        let line = elements_per_line::<T>();
        let stride = (slot_len.div_ceil(line) + pad_blocks) * line;
        let stride = stride.max(line);

        let total = slots
            .checked_mul(stride)
            .ok_or_else(|| AcoError::ResourceExhaustion(format!("arena of {slots}x{stride} is too large")))?;

        Ok(Self { buffer: AlignedBuffer::new(total, value)?, slots, slot_len, stride })
    }

    /// Returns a slot of the given worker.
    pub fn slot(&self, idx: usize) -> &[T] {
        let start = idx * self.stride;
        &self.buffer.as_slice()[start..start + self.slot_len]
    }

    /// Returns a slot of the given worker.
    pub fn slot_mut(&mut self, idx: usize) -> &mut [T] {
        let start = idx * self.stride;
        &mut self.buffer.as_mut_slice()[start..start + self.slot_len]
    }

    /// Returns all slots as disjoint mutable slices, ordered by worker index.
    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        let slot_len = self.slot_len;
        self.buffer.as_mut_slice().chunks_mut(self.stride).map(move |chunk| chunk.split_at_mut(slot_len).0)
    }

    /// Returns distance between starts of two neighbour slots in elements.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns usable length of a slot.
    pub fn slot_len(&self) -> usize {
        self.slot_len
    }

    /// Returns amount of slots.
    pub fn slots(&self) -> usize {
        self.slots
    }
}
