//! Static evaluation functions for Gomoku positions
//!
//! Scores are from Black's point of view: Black is the alpha-beta player and
//! the maximiser. White stones are not looked at.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

use super::patterns::{run_score, ChainScore};

/// Scan directions: down, right, down-right, down-left
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Origins and directions of every five-cell window that fits on the board.
fn windows() -> impl Iterator<Item = (Pos, (i32, i32))> {
    let reach = (ChainScore::WINDOW - 1) as i32;
    (0..BOARD_SIZE * BOARD_SIZE).flat_map(move |idx| {
        let origin = Pos::from_index(idx);
        DIRECTIONS.into_iter().filter_map(move |dir| {
            origin
                .offset(dir.0, dir.1, reach)
                .map(|_| (origin, dir))
        })
    })
}

/// Consecutive Black stones from `origin` along `dir`, at most one window long
fn black_run(board: &Board, origin: Pos, (dr, dc): (i32, i32)) -> usize {
    (0..ChainScore::WINDOW as i32)
        .map_while(|i| origin.offset(dr, dc, i))
        .take_while(|&p| board.get(p) == Stone::Black)
        .count()
}

/// Win counter: [`ChainScore::FIVE`] for every window completely filled with
/// Black stones.
#[must_use]
pub fn eval_func_one(board: &Board) -> i32 {
    windows()
        .filter(|&(origin, dir)| black_run(board, origin, dir) == ChainScore::WINDOW)
        .map(|_| ChainScore::FIVE)
        .sum()
}

/// Chain counter: every window is scored by the unbroken run of Black stones
/// at its start (see [`run_score`]).
#[must_use]
pub fn eval_func_two(board: &Board) -> i32 {
    windows()
        .map(|(origin, dir)| run_score(black_run(board, origin, dir)))
        .sum()
}
