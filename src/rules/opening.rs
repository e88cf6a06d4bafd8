//! Opening restrictions and the scripted White player
//!
//! Black always opens on the centre point. For Black's second stone the
//! inner block of cells at rows and columns 2 to 4 (1-based) is off limits.

use log::debug;

use crate::board::{GameState, Pos, BOARD_SIZE};

/// Black's first move: the centre of the board
#[inline]
pub fn opening_move() -> Pos {
    let centre = (BOARD_SIZE / 2) as u8;
    Pos::new(centre, centre)
}

/// Whether Black may play `pos` as its second stone
#[inline]
pub fn is_allowed_second_move(pos: Pos) -> bool {
    let inner = 1..=3;
    !(inner.contains(&pos.row) && inner.contains(&pos.col))
}

/// `state` with its legal moves narrowed to allowed second moves
pub fn restrict_second_move(state: &GameState) -> GameState {
    let allowed = state
        .moves
        .iter()
        .copied()
        .filter(|&p| is_allowed_second_move(p))
        .collect();
    state.with_moves(allowed)
}

/// White's scripted replies (1-based row, col)
pub const PRESET_MOVES: [(usize, usize); 18] = [
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 5),
    (1, 6),
    (2, 5),
    (4, 3),
    (5, 4),
    (2, 2),
    (2, 4),
    (2, 6),
    (7, 7),
    (10, 10),
    (9, 10),
    (10, 1),
    (9, 3),
    (8, 7),
    (7, 9),
];

/// Replays [`PRESET_MOVES`] for White.
///
/// Each White turn consumes one script entry. If that entry is no longer
/// legal the following entry is played instead.
#[derive(Debug, Clone, Default)]
pub struct PresetScript {
    index: usize,
}

impl PresetScript {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(i: usize) -> Option<Pos> {
        PRESET_MOVES
            .get(i)
            .and_then(|&(row, col)| Pos::from_one_based(row, col))
    }

    /// Next scripted move, or `None` once the script cannot continue
    pub fn next_move(&mut self, state: &GameState) -> Option<Pos> {
        let i = self.index;
        self.index += 1;

        let legal = |p: &Pos| state.moves.contains(p);
        match Self::entry(i).filter(legal) {
            Some(pos) => Some(pos),
            None => {
                let fallback = Self::entry(i + 1).filter(legal);
                debug!("preset move {i} unavailable, falling back to {fallback:?}");
                fallback
            }
        }
    }

    /// Script entries consumed so far
    #[inline]
    pub fn played(&self) -> usize {
        self.index
    }
}
