//! Gomoku AI engine
//!
//! Wraps the alpha-beta [`Searcher`] with the chosen evaluation function and
//! the opening rules for Black:
//!
//! 1. **Opening**: the first stone always goes on the centre point
//! 2. **Second stone**: searched over the restricted move list only
//! 3. **Alpha-Beta**: every later move is a plain depth-limited search
//!
//! # Example
//!
//! ```
//! use aima::{GomokuEngine, Pos};
//! use aima::eval::EvalFn;
//! use aima::rules::Gomoku;
//!
//! let game = Gomoku::new();
//! let engine = GomokuEngine::with_config(EvalFn::Two, 0);
//!
//! // Black opens on the centre
//! let first = engine.get_move_with_stats(&game.initial());
//! assert_eq!(first.best_move, Some(Pos::new(7, 7)));
//!
//! let state = game.result(&game.initial(), Pos::new(7, 7));
//! let state = game.result(&state, Pos::new(0, 0));
//! let result = engine.get_move_with_stats(&state);
//! println!("Best move: {:?} in {}ms", result.best_move, result.time_ms);
//! ```

use std::time::Instant;

use log::info;

use crate::board::{GameState, Pos, Stone};
use crate::eval::EvalFn;
use crate::rules::{opening_move, restrict_second_move, Gomoku};
use crate::search::{SearchResult, Searcher, DEFAULT_MAX_DEPTH};

/// Which rule produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Fixed centre opening, no search
    Opening,
    /// Depth-limited alpha-beta search
    AlphaBeta,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Backed-up minimax value of the move (Black's point of view)
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult<Pos>, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Alpha-beta player for Gomoku.
///
/// Cheap to copy: the engine holds only its configuration, so it can be
/// moved onto a worker thread together with a state snapshot.
#[derive(Debug, Clone, Copy)]
pub struct GomokuEngine {
    game: Gomoku,
    eval: EvalFn,
    max_depth: u8,
}

impl GomokuEngine {
    /// Engine with evaluation function 2 and depth [`DEFAULT_MAX_DEPTH`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EvalFn::default(), DEFAULT_MAX_DEPTH)
    }

    /// Create an engine with custom configuration.
    ///
    /// * `eval` - Static evaluation applied at the cutoff
    /// * `max_depth` - Plies searched below each root move
    #[must_use]
    pub fn with_config(eval: EvalFn, max_depth: u8) -> Self {
        Self {
            game: Gomoku::new(),
            eval,
            max_depth,
        }
    }

    #[inline]
    pub fn eval(&self) -> EvalFn {
        self.eval
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Best move for Black, `None` if the game is over or White is to move
    #[must_use]
    pub fn get_move(&self, state: &GameState) -> Option<Pos> {
        self.get_move_with_stats(state).best_move
    }

    /// Best move for Black, with timing and node count.
    ///
    /// The evaluation always scores Black, so the engine only moves for
    /// Black. Finished games and White-to-move states give no move.
    #[must_use]
    pub fn get_move_with_stats(&self, state: &GameState) -> MoveResult {
        let start = Instant::now();

        if self.game.terminal_test(state) || state.to_move != Stone::Black {
            return MoveResult {
                best_move: None,
                score: state.utility,
                search_type: SearchType::AlphaBeta,
                time_ms: 0,
                nodes: 0,
            };
        }

        let centre = opening_move();
        if state.ply() == 0 && state.moves.contains(&centre) {
            return MoveResult::opening(centre, start.elapsed().as_millis() as u64);
        }

        let restricted;
        let root = if state.ply() == 2 {
            restricted = restrict_second_move(state);
            &restricted
        } else {
            state
        };

        let game = self.game;
        let eval = self.eval;
        let mut searcher = Searcher::new(self.max_depth, |s: &GameState| eval.evaluate(&game, s));
        let result = searcher.search(&self.game, root);
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            "engine (eval {}, depth {}): {:?} score {} in {}ms, {} nodes",
            self.eval, self.max_depth, result.best_move, result.score, time_ms, result.nodes
        );

        MoveResult::from_alphabeta(result, time_ms)
    }
}

impl Default for GomokuEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_allowed_second_move;

    fn play(moves: &[(u8, u8)]) -> GameState {
        let game = Gomoku::new();
        moves.iter().fold(game.initial(), |state, &(r, c)| {
            game.result(&state, Pos::new(r, c))
        })
    }

    #[test]
    fn test_engine_creation() {
        let engine = GomokuEngine::new();
        assert_eq!(engine.max_depth(), 2);
        assert_eq!(engine.eval(), EvalFn::Two);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = GomokuEngine::with_config(EvalFn::One, 3);
        assert_eq!(engine.max_depth(), 3);
        assert_eq!(engine.eval(), EvalFn::One);
    }

    #[test]
    fn test_engine_opens_in_centre() {
        let engine = GomokuEngine::new();
        let result = engine.get_move_with_stats(&GameState::new());
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.search_type, SearchType::Opening);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_second_black_move_respects_restriction() {
        // White replies inside the restricted block, so Black's best
        // unrestricted reply would be next to it.
        let state = play(&[(7, 7), (2, 2)]);
        let engine = GomokuEngine::with_config(EvalFn::Two, 0);
        let result = engine.get_move_with_stats(&state);

        let pos = result.best_move.unwrap();
        assert!(is_allowed_second_move(pos));
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        // Depth 0 visits each root child once
        assert_eq!(result.nodes, 223 - 8);
    }

    #[test]
    fn test_engine_takes_immediate_win() {
        // Black: (9,0..4), White scattered; Black to move
        let state = play(&[
            (9, 0),
            (0, 14),
            (9, 1),
            (1, 14),
            (9, 2),
            (3, 14),
            (9, 3),
            (5, 14),
        ]);
        assert_eq!(state.to_move, Stone::Black);

        for eval in [EvalFn::One, EvalFn::Two] {
            let engine = GomokuEngine::with_config(eval, 0);
            let result = engine.get_move_with_stats(&state);
            assert_eq!(result.best_move, Some(Pos::new(9, 4)), "eval {eval}");
            assert_eq!(result.score, 1000);
        }
    }

    #[test]
    fn test_no_move_when_white_to_move() {
        let state = play(&[(7, 7)]);
        assert_eq!(state.to_move, Stone::White);
        let result = GomokuEngine::with_config(EvalFn::Two, 0).get_move_with_stats(&state);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_finished_game_has_no_move() {
        let mut state = play(&[(7, 7)]);
        state.utility = 1000;
        let engine = GomokuEngine::new();
        assert_eq!(engine.get_move(&state), None);
    }
}
