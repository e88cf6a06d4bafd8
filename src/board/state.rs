//! Immutable Gomoku game state

use super::{Board, Pos, Stone, TOTAL_CELLS};

/// Snapshot of a Gomoku game.
///
/// States are never mutated once built: playing a move produces a new state.
/// `moves` holds exactly the empty cells, in row-major order, unless a caller
/// narrowed it (see [`GameState::with_moves`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Color to play next
    pub to_move: Stone,
    /// +1000 once Black has five in a row, -1000 for White, otherwise 0
    pub utility: i32,
    pub board: Board,
    /// Remaining legal moves
    pub moves: Vec<Pos>,
}

impl GameState {
    /// Empty board, Black to move
    pub fn new() -> Self {
        Self {
            to_move: Stone::Black,
            utility: 0,
            board: Board::new(),
            moves: (0..TOTAL_CELLS).map(Pos::from_index).collect(),
        }
    }

    /// Copy of this state with a different legal-move list
    pub fn with_moves(&self, moves: Vec<Pos>) -> Self {
        Self {
            moves,
            ..self.clone()
        }
    }

    /// Number of stones played so far
    #[inline]
    pub fn ply(&self) -> u32 {
        self.board.stone_count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
