//! Game rules for freestyle Gomoku on a 15x15 board
//!
//! - Black moves first
//! - Five or more in a row wins (overlines count)
//! - A full board with no five is a draw
//! - Black's opening moves are constrained (see [`opening`])

pub mod opening;
pub mod win;

use log::trace;

use crate::board::{GameState, Pos, Stone};
use crate::search::Game;

pub use opening::{
    is_allowed_second_move, opening_move, restrict_second_move, PresetScript, PRESET_MOVES,
};
pub use win::{compute_utility, k_in_row, winning_line, DIRECTIONS, WIN_LENGTH, WIN_UTILITY};

/// Gomoku game definition.
///
/// Stateless: all game data lives in [`GameState`], this type only knows how
/// to move between states.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gomoku;

impl Gomoku {
    pub fn new() -> Self {
        Gomoku
    }

    /// Empty board with Black to move
    pub fn initial(&self) -> GameState {
        GameState::new()
    }

    pub fn actions(&self, state: &GameState) -> Vec<Pos> {
        state.moves.clone()
    }

    /// Play `mv` for the side to move.
    ///
    /// A move outside the state's legal-move list leaves the state unchanged.
    pub fn result(&self, state: &GameState, mv: Pos) -> GameState {
        if !state.moves.contains(&mv) {
            trace!("ignoring illegal move {mv}");
            return state.clone();
        }

        let player = state.to_move;
        let mut board = state.board;
        board.place_stone(mv, player);
        let moves = state.moves.iter().copied().filter(|&p| p != mv).collect();

        GameState {
            to_move: player.opponent(),
            utility: compute_utility(&board, mv, player),
            board,
            moves,
        }
    }

    /// Someone has five in a row, or no moves remain
    #[inline]
    pub fn terminal_test(&self, state: &GameState) -> bool {
        state.utility != 0 || state.moves.is_empty()
    }

    /// Cached utility seen from `player`'s side
    #[inline]
    pub fn utility(&self, state: &GameState, player: Stone) -> i32 {
        if player == Stone::White {
            -state.utility
        } else {
            state.utility
        }
    }

    /// Winner of a finished game, `None` for a draw or a game in progress
    pub fn winner(&self, state: &GameState) -> Option<Stone> {
        match state.utility.signum() {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }
}

impl Game for Gomoku {
    type State = GameState;
    type Move = Pos;

    fn actions(&self, state: &GameState) -> Vec<Pos> {
        Gomoku::actions(self, state)
    }

    fn result(&self, state: &GameState, mv: Pos) -> GameState {
        Gomoku::result(self, state, mv)
    }

    fn terminal_test(&self, state: &GameState) -> bool {
        Gomoku::terminal_test(self, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    fn play(game: &Gomoku, moves: &[(u8, u8)]) -> GameState {
        moves.iter().fold(game.initial(), |state, &(r, c)| {
            game.result(&state, Pos::new(r, c))
        })
    }

    #[test]
    fn test_result_places_stone_and_flips_turn() {
        let game = Gomoku::new();
        let initial = game.initial();
        let state = game.result(&initial, Pos::new(7, 7));

        assert_eq!(state.board.get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(state.to_move, Stone::White);
        assert_eq!(state.moves.len(), TOTAL_CELLS - 1);
        assert!(!state.moves.contains(&Pos::new(7, 7)));

        // The old state is untouched
        assert_eq!(initial.board.stone_count(), 0);
        assert_eq!(initial.moves.len(), TOTAL_CELLS);
    }

    #[test]
    fn test_illegal_move_returns_same_state() {
        let game = Gomoku::new();
        let state = play(&game, &[(7, 7)]);
        let again = game.result(&state, Pos::new(7, 7));
        assert_eq!(again, state);
    }

    #[test]
    fn test_black_five_is_terminal() {
        let game = Gomoku::new();
        // Black fills row 0 columns 0..5, White answers on row 5
        let state = play(
            &game,
            &[(0, 0), (5, 0), (0, 1), (5, 1), (0, 2), (5, 2), (0, 3), (5, 3)],
        );
        assert!(!game.terminal_test(&state));

        let state = game.result(&state, Pos::new(0, 4));
        assert!(game.terminal_test(&state));
        assert_eq!(state.utility, WIN_UTILITY);
        assert_eq!(game.utility(&state, Stone::Black), 1000);
        assert_eq!(game.utility(&state, Stone::White), -1000);
        assert_eq!(game.winner(&state), Some(Stone::Black));
    }

    #[test]
    fn test_white_five_is_negative() {
        let game = Gomoku::new();
        let state = play(
            &game,
            &[
                (0, 0), (3, 3), (0, 2), (4, 4), (0, 4), (5, 5), (0, 6), (6, 6), (0, 8), (7, 7),
            ],
        );
        assert_eq!(state.utility, -WIN_UTILITY);
        assert_eq!(game.winner(&state), Some(Stone::White));
        assert_eq!(game.utility(&state, Stone::White), 1000);
    }

    #[test]
    fn test_full_board_without_five_is_draw() {
        let game = Gomoku::new();
        let state = GameState {
            moves: Vec::new(),
            ..game.initial()
        };
        assert!(game.terminal_test(&state));
        assert_eq!(game.winner(&state), None);
    }

    #[test]
    fn test_game_trait_matches_inherent_methods() {
        let game = Gomoku::new();
        let state = play(&game, &[(7, 7), (6, 6)]);
        assert_eq!(Game::actions(&game, &state), game.actions(&state));
        assert_eq!(
            Game::result(&game, &state, Pos::new(1, 1)),
            game.result(&state, Pos::new(1, 1))
        );
        assert_eq!(Game::terminal_test(&game, &state), game.terminal_test(&state));
    }
}
