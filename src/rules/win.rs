//! Five-in-a-row detection
//!
//! Only lines through the stone just played can have changed, so every check
//! here is local to one position.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Utility of a Black win; a White win is the negation
pub const WIN_UTILITY: i32 = 1000;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, -1), // Anti-diagonal
    (1, 1),  // Diagonal
];

/// Length of the run of `color` stones through `pos` along one direction.
fn run_length(board: &Board, pos: Pos, color: Stone, (dr, dc): (i32, i32)) -> usize {
    if board.get(pos) != color {
        return 0;
    }
    let forward = (1..)
        .map_while(|i| pos.offset(dr, dc, i))
        .take_while(|&p| board.get(p) == color)
        .count();
    let backward = (1..)
        .map_while(|i| pos.offset(-dr, -dc, i))
        .take_while(|&p| board.get(p) == color)
        .count();
    1 + forward + backward
}

/// True if the run of `player` stones through `pos` along `direction` is at
/// least `k` long.
#[inline]
pub fn k_in_row(board: &Board, pos: Pos, player: Stone, direction: (i32, i32), k: usize) -> bool {
    run_length(board, pos, player, direction) >= k
}

/// Utility after `player` has played at `pos`: ±[`WIN_UTILITY`] if that stone
/// completed five in a row (positive for Black), otherwise 0.
pub fn compute_utility(board: &Board, pos: Pos, player: Stone) -> i32 {
    let won = DIRECTIONS
        .iter()
        .any(|&dir| k_in_row(board, pos, player, dir, WIN_LENGTH));
    match (won, player) {
        (true, Stone::Black) => WIN_UTILITY,
        (true, _) => -WIN_UTILITY,
        (false, _) => 0,
    }
}

/// Stones of the winning line through `pos`, ordered along the line.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for (dr, dc) in DIRECTIONS {
        let start = (1..)
            .map_while(|i| pos.offset(-dr, -dc, i))
            .take_while(|&p| board.get(p) == color)
            .last()
            .unwrap_or(pos);
        let line: Vec<Pos> = (0..)
            .map_while(|i| start.offset(dr, dc, i))
            .take_while(|&p| board.get(p) == color)
            .collect();
        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }
    None
}
