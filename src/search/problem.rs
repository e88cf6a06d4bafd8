//! Problem abstraction and per-run bookkeeping for graph search

use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::node::Node;

/// Wall-clock ceiling for a single search run (15 minutes)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(900);

/// A single-agent search problem.
///
/// States must be cheap to clone and hashable so that frontier membership
/// and explored sets can be kept by value.
pub trait Problem {
    type State: Clone + Eq + Ord + Hash + Debug;
    type Action: Copy + Debug;

    /// Starting state
    fn initial(&self) -> Self::State;

    /// Legal actions from `state`, in a fixed order
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// State reached by applying `action` to `state`
    fn result(&self, state: &Self::State, action: Self::Action) -> Self::State;

    fn goal_test(&self, state: &Self::State) -> bool;
}

/// Limits applied to a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Total time allowed since the run started. Checked once per frontier pop.
    pub timeout: Duration,
}

impl SearchLimits {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Statistics accumulated by one search run.
///
/// Owned by the caller and passed by `&mut` into the algorithm, so that counts
/// never leak between runs.
#[derive(Debug, Clone)]
pub struct SearchStats {
    started: Instant,
    /// Number of child nodes produced by expansions
    pub nodes_generated: u64,
}

impl SearchStats {
    /// Start the clock for a new run
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            nodes_generated: 0,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// True once the run has used up its time budget
    #[inline]
    pub fn timed_out(&self, limits: &SearchLimits) -> bool {
        self.elapsed() >= limits.timeout
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::start()
    }
}

/// How a search run ended.
#[derive(Debug, Clone)]
pub enum Outcome<S, A> {
    /// Goal reached; `node` carries the full path back to the root
    Solved {
        node: Rc<Node<S, A>>,
        elapsed: Duration,
        nodes_generated: u64,
    },
    /// The time budget ran out before the goal was found
    TimedOut {
        elapsed: Duration,
        nodes_generated: u64,
    },
    /// Search space exhausted without reaching the goal
    NoSolution,
}

impl<S, A: Copy> Outcome<S, A> {
    pub(crate) fn solved(node: Rc<Node<S, A>>, stats: &SearchStats) -> Self {
        Outcome::Solved {
            node,
            elapsed: stats.elapsed(),
            nodes_generated: stats.nodes_generated,
        }
    }

    pub(crate) fn timed_out(stats: &SearchStats) -> Self {
        Outcome::TimedOut {
            elapsed: stats.elapsed(),
            nodes_generated: stats.nodes_generated,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }

    /// Actions from the root to the goal, if solved
    pub fn path(&self) -> Option<Vec<A>> {
        match self {
            Outcome::Solved { node, .. } => Some(node.path()),
            _ => None,
        }
    }

    /// Number of actions in the solution, if solved
    pub fn path_len(&self) -> Option<usize> {
        match self {
            Outcome::Solved { node, .. } => Some(node.depth()),
            _ => None,
        }
    }
}
