//! Gomoku match between the engine (Black) and a human or scripted White
//!
//! Shared by the terminal front end and the GUI. The session owns the
//! current [`GameState`] and the move history; the engine search itself can
//! run elsewhere and hand its [`MoveResult`] back through
//! [`Session::apply_ai_result`].

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::{GameState, Pos, Stone};
use crate::engine::{GomokuEngine, MoveResult};
use crate::error::MoveError;
use crate::rules::{Gomoku, PresetScript};

/// The engine always plays this color
pub const AI_COLOR: Stone = Stone::Black;

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    AiWins,
    HumanWins,
    Draw,
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MatchOutcome::AiWins => "Alpha-Beta wins!",
            MatchOutcome::HumanWins => "You won!",
            MatchOutcome::Draw => "You guys tied!",
        };
        f.write_str(text)
    }
}

/// One Gomoku match.
pub struct Session {
    game: Gomoku,
    engine: GomokuEngine,
    state: GameState,
    preset: Option<PresetScript>,
    history: Vec<(Pos, Stone)>,
    last_ai_result: Option<MoveResult>,
    started: Instant,
}

impl Session {
    /// New match. With `use_preset`, White's moves come from the built-in script.
    pub fn new(engine: GomokuEngine, use_preset: bool) -> Self {
        let game = Gomoku::new();
        Self {
            game,
            engine,
            state: game.initial(),
            preset: use_preset.then(PresetScript::new),
            history: Vec::new(),
            last_ai_result: None,
            started: Instant::now(),
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn engine(&self) -> GomokuEngine {
        self.engine
    }

    #[inline]
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    #[inline]
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    #[inline]
    pub fn uses_preset(&self) -> bool {
        self.preset.is_some()
    }

    /// Time since the match started
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.game.terminal_test(&self.state)
    }

    #[inline]
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.state.to_move == AI_COLOR
    }

    #[inline]
    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.state.to_move != AI_COLOR
    }

    /// Result of a finished match
    pub fn outcome(&self) -> Option<MatchOutcome> {
        if !self.is_over() {
            return None;
        }
        Some(match self.game.winner(&self.state) {
            Some(AI_COLOR) => MatchOutcome::AiWins,
            Some(_) => MatchOutcome::HumanWins,
            None => MatchOutcome::Draw,
        })
    }

    /// Stones of the five that ended the match, if any
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        self.game.winner(&self.state)?;
        crate::rules::winning_line(&self.state.board, self.last_move()?)
    }

    fn apply(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.state.moves.contains(&pos) {
            return Err(MoveError::Illegal(pos));
        }
        let color = self.state.to_move;
        self.state = self.game.result(&self.state, pos);
        self.history.push((pos, color));
        debug!("{color:?} plays {pos}");

        if let Some(outcome) = self.outcome() {
            info!("match over after {} moves: {outcome}", self.history.len());
        }
        Ok(())
    }

    /// Play a human move for White
    pub fn play_human(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.is_ai_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.apply(pos)
    }

    /// Next scripted White move, when playing from the preset
    pub fn next_preset_move(&mut self) -> Option<Pos> {
        let state = &self.state;
        self.preset.as_mut()?.next_move(state)
    }

    /// Search and play the engine's move on the calling thread
    pub fn play_ai(&mut self) -> Result<MoveResult, MoveError> {
        if !self.is_ai_turn() {
            return Err(if self.is_over() {
                MoveError::GameOver
            } else {
                MoveError::NotYourTurn
            });
        }
        let result = self.engine.get_move_with_stats(&self.state);
        self.apply_ai_result(result.clone())?;
        Ok(result)
    }

    /// Play a move computed by the engine, possibly on another thread
    pub fn apply_ai_result(&mut self, result: MoveResult) -> Result<Pos, MoveError> {
        if !self.is_ai_turn() {
            return Err(MoveError::NotYourTurn);
        }
        let pos = result.best_move.ok_or(MoveError::NoMove)?;
        self.apply(pos)?;
        self.last_ai_result = Some(result);
        Ok(pos)
    }
}
