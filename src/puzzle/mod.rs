//! 8-puzzle model
//!
//! A state is the 3x3 grid flattened in row-major order, `0` standing for the
//! blank. Actions are named after the direction a tile slides into the blank:
//! `U` means the tile below the blank moves up, so the blank moves down.

pub mod heuristic;
pub mod input;


use std::fmt;

use crate::error::InputError;
use crate::search::Problem;

pub use heuristic::{manhattan_distance, max_heuristic, misplaced_tiles, Heuristic};
pub use input::{load_tiles, parse_tiles};

/// Grid side length
pub const SIDE: usize = 3;
/// Number of cells (tiles + blank)
pub const CELLS: usize = SIDE * SIDE;

/// Solved arrangement
pub const GOAL: Tiles = Tiles([1, 2, 3, 4, 5, 6, 7, 8, 0]);

/// Puzzle state: a permutation of 0..=8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tiles([u8; CELLS]);

impl Tiles {
    /// Build a state, checking that `cells` is a permutation of 0..=8
    pub fn new(cells: [u8; CELLS]) -> Result<Self, InputError> {
        let mut seen = [false; CELLS];
        for &tile in &cells {
            let idx = usize::from(tile);
            if idx >= CELLS {
                return Err(InputError::InvalidToken {
                    token: tile.to_string(),
                });
            }
            if seen[idx] {
                return Err(InputError::DuplicateTile(tile));
            }
            seen[idx] = true;
        }
        Ok(Self(cells))
    }

    #[inline]
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Linear index of the blank
    #[inline]
    pub fn blank_index(&self) -> usize {
        self.0.iter().position(|&t| t == 0).unwrap_or(CELLS - 1)
    }

    /// Out-of-order pairs among the non-blank tiles
    pub fn inversions(&self) -> u32 {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&t| t != 0).collect();
        let mut count = 0;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// On a 3-wide board a state can reach the goal iff its inversion count is even
    #[inline]
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    /// State after sliding a tile into the blank. The move must be legal.
    pub fn apply(&self, mv: Move) -> Tiles {
        let blank = self.blank_index();
        let target = blank
            .checked_add_signed(mv.blank_offset())
            .filter(|&t| t < CELLS)
            .unwrap_or(blank);
        debug_assert!(target != blank, "illegal move {mv:?} for {self}");
        let mut next = self.0;
        next.swap(blank, target);
        Tiles(next)
    }

    /// Legal moves, in the fixed order D, U, L, R
    pub fn legal_moves(&self) -> Vec<Move> {
        let blank = self.blank_index();
        Move::ALL
            .into_iter()
            .filter(|mv| match mv {
                Move::Down => blank >= SIDE,
                Move::Up => blank + SIDE < CELLS,
                Move::Left => (blank + 1) % SIDE != 0,
                Move::Right => blank % SIDE != 0,
            })
            .collect()
    }
}

impl fmt::Display for Tiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks(SIDE) {
            let line: Vec<String> = row
                .iter()
                .map(|&t| if t == 0 { "_".to_string() } else { t.to_string() })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A tile sliding into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Tile above the blank slides down
    Down,
    /// Tile below the blank slides up
    Up,
    /// Tile right of the blank slides left
    Left,
    /// Tile left of the blank slides right
    Right,
}

impl Move {
    /// Enumeration order used when expanding nodes
    pub const ALL: [Move; 4] = [Move::Down, Move::Up, Move::Left, Move::Right];

    /// Change in the blank's linear index
    #[inline]
    pub fn blank_offset(self) -> isize {
        match self {
            Move::Down => -(SIDE as isize),
            Move::Up => SIDE as isize,
            Move::Left => 1,
            Move::Right => -1,
        }
    }

    /// Move that undoes this one
    #[inline]
    pub fn inverse(self) -> Move {
        match self {
            Move::Down => Move::Up,
            Move::Up => Move::Down,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    #[inline]
    pub fn label(self) -> char {
        match self {
            Move::Down => 'D',
            Move::Up => 'U',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Concatenated move labels, e.g. `"ULLD"`
pub fn path_string(moves: &[Move]) -> String {
    moves.iter().map(|m| m.label()).collect()
}

/// The 8-puzzle as a search problem with the fixed [`GOAL`].
#[derive(Debug, Clone, Copy)]
pub struct EightPuzzle {
    initial: Tiles,
}

impl EightPuzzle {
    pub fn new(initial: Tiles) -> Self {
        Self { initial }
    }
}

impl Problem for EightPuzzle {
    type State = Tiles;
    type Action = Move;

    fn initial(&self) -> Tiles {
        self.initial
    }

    fn actions(&self, state: &Tiles) -> Vec<Move> {
        state.legal_moves()
    }

    fn result(&self, state: &Tiles, action: Move) -> Tiles {
        state.apply(action)
    }

    fn goal_test(&self, state: &Tiles) -> bool {
        *state == GOAL
    }
}
