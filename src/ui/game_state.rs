//! Match state for the Gomoku GUI
//!
//! Wraps a [`Session`] with the bits only the GUI needs: the background AI
//! thread, move timers and status messages.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::warn;

use crate::eval::EvalFn;
use crate::search::DEFAULT_MAX_DEPTH;
use crate::session::Session;
use crate::{GomokuEngine, MoveResult, Pos};

/// Options chosen before a match starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    pub eval: EvalFn,
    pub max_depth: u8,
    /// White follows the built-in script instead of mouse input
    pub use_preset: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            eval: EvalFn::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            use_preset: false,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Everything the GUI tracks about the current match
pub struct MatchState {
    pub session: Session,
    pub settings: MatchSettings,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    /// Frozen total once the match ends
    pub final_time: Option<Duration>,
}

impl MatchState {
    pub fn new(settings: MatchSettings) -> Self {
        let engine = GomokuEngine::with_config(settings.eval, settings.max_depth);
        Self {
            session: Session::new(engine, settings.use_preset),
            settings,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            final_time: None,
        }
    }

    /// Start over with the current settings
    pub fn reset(&mut self) {
        *self = Self::new(self.settings);
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal cells for a mouse move, `None` when clicks are not accepted
    pub fn clickable_moves(&self) -> Option<&[Pos]> {
        let accepting = self.session.is_human_turn()
            && !self.session.uses_preset()
            && !self.is_ai_thinking();
        accepting.then(|| self.session.state().moves.as_slice())
    }

    /// Place White's stone from a click
    pub fn try_place_stone(&mut self, pos: Pos) {
        match self.session.play_human(pos) {
            Ok(()) => self.after_move(),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Play the next scripted White move, if the preset is active
    pub fn play_preset_move(&mut self) {
        if !self.session.uses_preset() || !self.session.is_human_turn() {
            return;
        }
        match self.session.next_preset_move() {
            Some(pos) => self.try_place_stone(pos),
            None => {
                if self.message.is_none() {
                    warn!("preset script exhausted");
                    self.message = Some("Preset moves exhausted".to_string());
                }
            }
        }
    }

    fn after_move(&mut self) {
        self.message = None;
        self.move_timer.start();
        if self.session.is_over() {
            self.final_time = Some(self.session.elapsed());
        }
    }

    /// Start the engine on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.session.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let engine = self.session.engine();
        let state = self.session.state().clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&state);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.ai_thinking_time = Some(elapsed);
            match self.session.apply_ai_result(move_result) {
                Ok(_) => self.after_move(),
                Err(err) => self.message = Some(format!("AI move rejected: {err}")),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Total match time, frozen once the game is over
    pub fn match_time(&self) -> Duration {
        self.final_time.unwrap_or_else(|| self.session.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn wait_for_ai(state: &mut MatchState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
    }

    fn fast_settings(use_preset: bool) -> MatchSettings {
        MatchSettings {
            eval: EvalFn::Two,
            max_depth: 0,
            use_preset,
        }
    }

    #[test]
    fn test_ai_move_arrives_from_thread() {
        let mut state = MatchState::new(fast_settings(false));
        assert!(state.clickable_moves().is_none());

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert_eq!(state.session.last_move(), Some(Pos::new(7, 7)));
        assert!(state.move_timer.ai_thinking_time.is_some());
        assert_eq!(state.clickable_moves().map(|m| m.len()), Some(224));
    }

    #[test]
    fn test_click_on_occupied_cell_sets_message() {
        let mut state = MatchState::new(fast_settings(false));
        state.start_ai_thinking();
        wait_for_ai(&mut state);

        state.try_place_stone(Pos::new(7, 7));
        assert!(state.message.is_some());

        state.try_place_stone(Pos::new(0, 0));
        assert!(state.message.is_none());
        assert_eq!(state.session.state().board.get(Pos::new(0, 0)), Stone::White);
    }

    #[test]
    fn test_preset_mode_disables_clicks() {
        let mut state = MatchState::new(fast_settings(true));
        state.start_ai_thinking();
        wait_for_ai(&mut state);

        assert!(state.clickable_moves().is_none());
        state.play_preset_move();
        assert_eq!(state.session.last_move(), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_reset_keeps_settings() {
        let mut state = MatchState::new(fast_settings(true));
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        state.reset();
        assert!(state.session.history().is_empty());
        assert_eq!(state.settings, fast_settings(true));
    }
}
