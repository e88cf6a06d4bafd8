//! Score weights for Gomoku evaluation
//!
//! Both evaluators slide a five-cell window over every line of the board and
//! only ever look at Black stones.

/// Scoring weights for window scans
pub struct ChainScore;

impl ChainScore {
    /// Window length (same as the winning row length)
    pub const WINDOW: usize = 5;

    /// Complete five inside one window, used by the win-counting evaluator
    pub const FIVE: i32 = 1000;

    /// Added for each additional Black stone in an unbroken run from the
    /// start of a window: 1st, 2nd, 3rd, 4th, 5th.
    pub const RUN_STEPS: [i32; 5] = [10, 20, 30, 40, 1000];
}

/// Total score of a run of `len` consecutive Black stones from a window's start.
///
/// `run_score(0) == 0`, `run_score(5) == 1100`.
#[inline]
pub fn run_score(len: usize) -> i32 {
    ChainScore::RUN_STEPS
        .iter()
        .take(len.min(ChainScore::WINDOW))
        .sum()
}
