//! Bitboard for one stone color

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = TOTAL_CELLS.div_ceil(64);

/// One bit per cell. 4 x u64 cover the 225 cells (256 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let idx = pos.to_index();
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let idx = pos.to_index();
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Set positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
            current_word: self.bits[0],
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let idx = self.word_idx * 64 + self.current_word.trailing_zeros() as usize;
        self.current_word &= self.current_word - 1;

        // Bits past the last cell are never set
        (idx < TOTAL_CELLS).then(|| Pos::from_index(idx))
    }
}
