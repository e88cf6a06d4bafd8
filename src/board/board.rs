//! Stone placement on a 15x15 grid

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};

/// Game board: one bitboard per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    pub black: Bitboard,
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Place a stone, replacing nothing: callers check emptiness first
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }
}

/// Text grid, one row per line, `B`/`W`/`.` separated by spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            let line: Vec<String> = (0..BOARD_SIZE as u8)
                .map(|col| self.get(Pos::new(row, col)).symbol().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
