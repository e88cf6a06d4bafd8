//! Heuristics for A* on the 8-puzzle

use std::fmt;

use super::{Tiles, CELLS, GOAL, SIDE};

/// Cells whose content differs from the goal.
///
/// The blank is compared like any other tile, so a state one slide away from
/// the goal scores 2.
pub fn misplaced_tiles(state: &Tiles) -> u32 {
    state
        .cells()
        .iter()
        .zip(GOAL.cells())
        .filter(|(s, g)| s != g)
        .count() as u32
}

/// Sum over tiles 0..=7 of the grid distance to their goal cell.
///
/// The blank (tile 0, goal cell 8) is included and tile 8 is left out, so
/// the value can exceed the true distance by up to the blank's own distance.
pub fn manhattan_distance(state: &Tiles) -> u32 {
    let mut position = [0usize; CELLS];
    for (idx, &tile) in state.cells().iter().enumerate() {
        position[usize::from(tile)] = idx;
    }

    (0..CELLS - 1)
        .map(|tile| grid_distance(position[tile], goal_cell(tile)))
        .sum()
}

/// Goal index of `tile`; the blank belongs in the last cell
#[inline]
pub fn goal_cell(tile: usize) -> usize {
    if tile == 0 {
        CELLS - 1
    } else {
        tile - 1
    }
}

/// Manhattan distance between two cell indices
#[inline]
pub fn grid_distance(a: usize, b: usize) -> u32 {
    ((a / SIDE).abs_diff(b / SIDE) + (a % SIDE).abs_diff(b % SIDE)) as u32
}

/// `max(h1, h2)`; dominates both
pub fn max_heuristic(state: &Tiles) -> u32 {
    misplaced_tiles(state).max(manhattan_distance(state))
}

/// Named heuristic choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// h1
    MisplacedTiles,
    /// h2
    Manhattan,
    /// h3
    Max,
}

impl Heuristic {
    pub fn evaluate(self, state: &Tiles) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(state),
            Heuristic::Manhattan => manhattan_distance(state),
            Heuristic::Max => max_heuristic(state),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heuristic::MisplacedTiles => "h1",
            Heuristic::Manhattan => "h2",
            Heuristic::Max => "h3",
        };
        f.write_str(name)
    }
}
