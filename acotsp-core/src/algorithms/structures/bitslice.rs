//! A bit set view over borrowed words, a tweaked version of `BitVec` from `probabilistic-collections` crate.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/structures/bitslice_test.rs"]
mod bitslice_test;

const BITS_IN_BLOCK: usize = u64::BITS as usize;

/// Returns amount of blocks required to keep `length` bits.
pub fn blocks_for(length: usize) -> usize {
    length.div_ceil(BITS_IN_BLOCK)
}

/// A fixed length set of bits stored in borrowed blocks. The storage is owned by the caller
/// (usually a padded worker arena), so it can be reused without reallocation.
#[derive(Debug)]
pub struct BitSlice<'a> {
    blocks: &'a mut [u64],
    length: usize,
}

impl<'a> BitSlice<'a> {
    /// Creates a view of `length` bits. Blocks are not cleared.
    pub fn new(blocks: &'a mut [u64], length: usize) -> Self {
        assert!(blocks.len() >= blocks_for(length), "not enough blocks for {length} bits");
        Self { blocks, length }
    }

    /// Sets all bits to zero.
    pub fn clear(&mut self) {
        self.blocks.iter_mut().for_each(|block| *block = 0);
    }

    /// Sets bit value.
    pub fn set(&mut self, index: usize, bit: bool) {
        assert!(index < self.length);
        let mask = 1 << (index % BITS_IN_BLOCK);
        let block = &mut self.blocks[index / BITS_IN_BLOCK];

        if bit {
            *block |= mask;
        } else {
            *block &= !mask;
        }
    }

    /// Returns bit value.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.length);
        (self.blocks[index / BITS_IN_BLOCK] >> (index % BITS_IN_BLOCK)) & 1 != 0
    }

    /// Returns amount of set bits.
    pub fn count_ones(&self) -> usize {
        self.blocks[..blocks_for(self.length)].iter().map(|block| block.count_ones() as usize).sum()
    }

    /// Returns index of the first unset bit.
    pub fn first_zero(&self) -> Option<usize> {
        self.blocks[..blocks_for(self.length)]
            .iter()
            .enumerate()
            .find(|(_, block)| **block != u64::MAX)
            .map(|(idx, block)| idx * BITS_IN_BLOCK + block.trailing_ones() as usize)
            .filter(|&index| index < self.length)
    }

    /// Returns amount of bits.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if there are no bits.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}
