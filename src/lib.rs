//! Classic AI search: 8-puzzle solving and Gomoku alpha-beta
//!
//! Two exercises built on one search core:
//! - The 8-puzzle solved by breadth-first search, iterative deepening, or A*
//!   with one of three heuristics, under a wall-clock timeout
//! - Gomoku on a 15x15 board played by a depth-limited alpha-beta engine
//!   with two interchangeable evaluation functions
//!
//! # Architecture
//!
//! - [`search`]: Problem/node model, priority frontier, BFS/IDS/A*, alpha-beta
//! - [`puzzle`]: 8-puzzle state, moves, heuristics and file parsing
//! - [`solver`]: Algorithm selection, solvability check and reports
//! - [`batch`]: Directory runs and averaged statistics
//! - [`board`]: Gomoku board representation with bitboards
//! - [`rules`]: Gomoku rules (five in a row, opening restrictions)
//! - [`eval`]: Gomoku evaluation functions
//! - [`engine`]: Alpha-beta player integrating search and evaluation
//! - [`session`]: A match between the engine and a human or scripted player
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use aima::puzzle::parse_tiles;
//! use aima::solver::{Algorithm, Solver};
//!
//! let tiles = parse_tiles("1 2 3\n4 5 6\n_ 7 8").unwrap();
//! let report = Solver::default().solve(tiles, Algorithm::Bfs).unwrap();
//! assert_eq!(report.path().as_deref(), Some("LL"));
//! ```
//!
//! ```
//! use aima::{GameState, GomokuEngine, Pos};
//! use aima::eval::EvalFn;
//!
//! let engine = GomokuEngine::with_config(EvalFn::One, 0);
//! assert_eq!(engine.get_move(&GameState::new()), Some(Pos::new(7, 7)));
//! ```

pub mod batch;
pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod puzzle;
pub mod rules;
pub mod search;
pub mod session;
pub mod solver;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, GameState, Pos, Stone, BOARD_SIZE};
pub use engine::{GomokuEngine, MoveResult, SearchType};
pub use error::{Error, Result};
