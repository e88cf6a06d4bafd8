//! Depth-limited alpha-beta minimax
//!
//! Plain max/min recursion over a [`Game`], cut off at a fixed depth where a
//! caller supplied static evaluation takes over. The player at the root is
//! the maximiser.
//!
//! # Example
//!
//! ```
//! use aima::rules::Gomoku;
//! use aima::search::Searcher;
//! use aima::eval::EvalFn;
//! use aima::{GameState, Pos};
//!
//! let game = Gomoku::new();
//! let state = game.result(&game.initial(), Pos::new(7, 7));
//! let state = game.result(&state, Pos::new(0, 0));
//!
//! let mut searcher = Searcher::new(0, |s: &GameState| EvalFn::Two.evaluate(&game, s));
//! let result = searcher.search(&game, &state);
//! assert!(result.best_move.is_some());
//! ```

use std::fmt::Debug;

use log::debug;

/// Bounds used for the initial alpha-beta window
const INF: i32 = i32::MAX;
const NEG_INF: i32 = i32::MIN;

/// Default number of plies searched below the root move
pub const DEFAULT_MAX_DEPTH: u8 = 2;

/// A two-player, alternating-move game.
pub trait Game {
    type State;
    type Move: Copy + PartialEq + Debug;

    /// Legal moves in `state`, in a fixed order
    fn actions(&self, state: &Self::State) -> Vec<Self::Move>;

    /// State after playing `mv`
    fn result(&self, state: &Self::State, mv: Self::Move) -> Self::State;

    fn terminal_test(&self, state: &Self::State) -> bool;
}

/// Best move found by a search along with its backed-up value.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// Best move found, `None` when the root has no legal moves
    pub best_move: Option<M>,
    /// Minimax value of the best move
    pub score: i32,
    /// Nodes visited below the root
    pub nodes: u64,
}

/// Fixed-depth alpha-beta searcher.
///
/// `eval` scores a state from the maximiser's point of view and is applied at
/// the depth cutoff and at terminal states.
pub struct Searcher<E> {
    max_depth: u8,
    eval: E,
    nodes: u64,
}

impl<E> Searcher<E> {
    pub fn new(max_depth: u8, eval: E) -> Self {
        Self {
            max_depth,
            eval,
            nodes: 0,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Pick the move with the highest min-value.
    ///
    /// Ties keep the first move found.
    pub fn search<G>(&mut self, game: &G, state: &G::State) -> SearchResult<G::Move>
    where
        G: Game,
        E: Fn(&G::State) -> i32,
    {
        self.nodes = 0;

        let mut alpha = NEG_INF;
        let beta = INF;
        let mut best_move = None;

        for mv in game.actions(state) {
            let child = game.result(state, mv);
            let v = self.min_value(game, &child, alpha, beta, 1);
            if v > alpha {
                alpha = v;
                best_move = Some(mv);
            }
        }

        debug!(
            "alpha-beta depth {}: best {:?} score {} ({} nodes)",
            self.max_depth, best_move, alpha, self.nodes
        );

        SearchResult {
            best_move,
            score: alpha,
            nodes: self.nodes,
        }
    }

    fn max_value<G>(&mut self, game: &G, state: &G::State, mut alpha: i32, beta: i32, depth: u16) -> i32
    where
        G: Game,
        E: Fn(&G::State) -> i32,
    {
        self.nodes += 1;
        if depth > u16::from(self.max_depth) || game.terminal_test(state) {
            return (self.eval)(state);
        }

        let mut v = NEG_INF;
        for mv in game.actions(state) {
            let child = game.result(state, mv);
            v = v.max(self.min_value(game, &child, alpha, beta, depth + 1));
            if v >= beta {
                return v;
            }
            alpha = alpha.max(v);
        }
        v
    }

    fn min_value<G>(&mut self, game: &G, state: &G::State, alpha: i32, mut beta: i32, depth: u16) -> i32
    where
        G: Game,
        E: Fn(&G::State) -> i32,
    {
        self.nodes += 1;
        if depth > u16::from(self.max_depth) || game.terminal_test(state) {
            return (self.eval)(state);
        }

        let mut v = INF;
        for mv in game.actions(state) {
            let child = game.result(state, mv);
            v = v.min(self.max_value(game, &child, alpha, beta, depth + 1));
            if v <= alpha {
                return v;
            }
            beta = beta.min(v);
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-ply game tree from the textbook figure: three moves for MAX, then
    /// three replies for MIN, then a leaf value.
    struct Tree;

    const LEAVES: [[i32; 3]; 3] = [[3, 12, 8], [2, 4, 6], [14, 5, 2]];
    /// Static values of the interior positions after MAX's first move
    const INTERIOR: [i32; 3] = [7, 1, 9];

    impl Game for Tree {
        type State = Vec<usize>;
        type Move = usize;

        fn actions(&self, state: &Vec<usize>) -> Vec<usize> {
            if state.len() < 2 {
                vec![0, 1, 2]
            } else {
                Vec::new()
            }
        }

        fn result(&self, state: &Vec<usize>, mv: usize) -> Vec<usize> {
            let mut next = state.clone();
            next.push(mv);
            next
        }

        fn terminal_test(&self, state: &Vec<usize>) -> bool {
            state.len() == 2
        }
    }

    fn tree_eval(state: &Vec<usize>) -> i32 {
        match state.as_slice() {
            [a, b] => LEAVES[*a][*b],
            [a] => INTERIOR[*a],
            _ => 0,
        }
    }

    #[test]
    fn test_minimax_value() {
        let mut searcher = Searcher::new(DEFAULT_MAX_DEPTH, tree_eval);
        let result = searcher.search(&Tree, &Vec::new());
        assert_eq!(result.best_move, Some(0));
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_pruning_skips_refuted_replies() {
        let mut searcher = Searcher::new(DEFAULT_MAX_DEPTH, tree_eval);
        let result = searcher.search(&Tree, &Vec::new());
        // 3 MIN nodes + 3 + 1 + 3 leaves; the full tree would be 12.
        assert_eq!(result.nodes, 10);
    }

    #[test]
    fn test_depth_zero_is_one_ply_maximisation() {
        let mut searcher = Searcher::new(0, tree_eval);
        let result = searcher.search(&Tree, &Vec::new());

        let root: Vec<usize> = Vec::new();
        let mut direct: Option<(usize, i32)> = None;
        for mv in Tree.actions(&root) {
            let v = tree_eval(&Tree.result(&root, mv));
            if direct.map_or(true, |(_, best)| v > best) {
                direct = Some((mv, v));
            }
        }

        assert_eq!(result.best_move, direct.map(|(mv, _)| mv));
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, 9);
    }

    /// One forced move per ply; the game ends after 300 plies.
    struct Chain;

    impl Game for Chain {
        type State = u32;
        type Move = ();

        fn actions(&self, _state: &u32) -> Vec<()> {
            vec![()]
        }

        fn result(&self, state: &u32, _mv: ()) -> u32 {
            state + 1
        }

        fn terminal_test(&self, state: &u32) -> bool {
            *state >= 300
        }
    }

    #[test]
    fn test_largest_depth_cuts_off_without_overflow() {
        let mut searcher = Searcher::new(u8::MAX, |s: &u32| *s as i32);
        let result = searcher.search(&Chain, &0);
        // The cutoff fires one ply below the deepest searched ply.
        assert_eq!(result.best_move, Some(()));
        assert_eq!(result.score, 256);
        assert_eq!(result.nodes, 256);
    }

    #[test]
    fn test_ties_keep_first_move() {
        let mut searcher = Searcher::new(0, |_: &Vec<usize>| 5);
        let result = searcher.search(&Tree, &Vec::new());
        assert_eq!(result.best_move, Some(0));
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut searcher = Searcher::new(2, tree_eval);
        let result = searcher.search(&Tree, &vec![0, 0]);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }
}
