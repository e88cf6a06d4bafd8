//! Evaluation functions for Gomoku positions
//!
//! Two interchangeable scorers, selected by [`EvalFn`]:
//! - [`eval_func_one`] counts completed fives
//! - [`eval_func_two`] rewards runs of Black stones

pub mod heuristic;
pub mod patterns;

use std::fmt;
use std::str::FromStr;

use crate::board::GameState;
use crate::error::InputError;
use crate::rules::Gomoku;

pub use heuristic::{eval_func_one, eval_func_two};
pub use patterns::{run_score, ChainScore};

/// Which static evaluator alpha-beta uses at its cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalFn {
    One,
    #[default]
    Two,
}

impl EvalFn {
    /// Score `state` for Black. Terminal states return their cached utility.
    pub fn evaluate(self, game: &Gomoku, state: &GameState) -> i32 {
        if game.terminal_test(state) {
            return state.utility;
        }
        match self {
            EvalFn::One => eval_func_one(&state.board),
            EvalFn::Two => eval_func_two(&state.board),
        }
    }
}

impl FromStr for EvalFn {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(EvalFn::One),
            "2" => Ok(EvalFn::Two),
            other => Err(InputError::InvalidEval(other.to_string())),
        }
    }
}

impl fmt::Display for EvalFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalFn::One => f.write_str("1"),
            EvalFn::Two => f.write_str("2"),
        }
    }
}
