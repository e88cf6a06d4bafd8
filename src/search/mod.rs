//! Search algorithms
//!
//! Contains:
//! - Problem/node model shared by the single-agent searches
//! - Priority frontier with lookup and delete-by-value
//! - Breadth-first and iterative deepening search
//! - Best-first and A* search
//! - Depth-limited alpha-beta for two-player games

pub mod alphabeta;
pub mod frontier;
pub mod informed;
pub mod node;
pub mod problem;
pub mod uninformed;

pub use alphabeta::{Game, SearchResult, Searcher, DEFAULT_MAX_DEPTH};
pub use frontier::{Order, PriorityFrontier};
pub use informed::{astar_search, best_first_search, HeuristicCache};
pub use node::Node;
pub use problem::{Outcome, Problem, SearchLimits, SearchStats, DEFAULT_TIMEOUT};
pub use uninformed::{
    breadth_first_search, depth_limited_search, iterative_deepening_search, DepthLimited,
};
