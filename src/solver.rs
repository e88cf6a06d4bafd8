//! 8-puzzle solver front end
//!
//! Ties the puzzle model to the search algorithms: picks an algorithm by
//! name, rejects unsolvable instances up front, runs the search with its own
//! statistics, and renders the result in the two report formats.
//!
//! # Example
//!
//! ```
//! use aima::puzzle::parse_tiles;
//! use aima::solver::{Algorithm, OutputFormat, Solver};
//!
//! let tiles = parse_tiles("1 2 3\n4 5 6\n7 _ 8").unwrap();
//! let report = Solver::default().solve(tiles, Algorithm::AStarManhattan).unwrap();
//! assert_eq!(report.path_len(), Some(1));
//! println!("{}", report.render(OutputFormat::Human));
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use log::info;

use crate::error::{InputError, Result, SearchError};
use crate::puzzle::{load_tiles, path_string, EightPuzzle, Heuristic, Move, Tiles};
use crate::search::{
    astar_search, breadth_first_search, iterative_deepening_search, Outcome, SearchLimits,
    SearchStats,
};

/// Search strategy selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Ids,
    AStarMisplaced,
    AStarManhattan,
    AStarMax,
}

impl Algorithm {
    /// All algorithms in report order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Ids,
        Algorithm::AStarMisplaced,
        Algorithm::AStarManhattan,
        Algorithm::AStarMax,
    ];

    /// Command-line name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Ids => "ids",
            Algorithm::AStarMisplaced => "h1",
            Algorithm::AStarManhattan => "h2",
            Algorithm::AStarMax => "h3",
        }
    }

    /// Heuristic driving A*, `None` for the uninformed searches
    pub fn heuristic(self) -> Option<Heuristic> {
        match self {
            Algorithm::Bfs | Algorithm::Ids => None,
            Algorithm::AStarMisplaced => Some(Heuristic::MisplacedTiles),
            Algorithm::AStarManhattan => Some(Heuristic::Manhattan),
            Algorithm::AStarMax => Some(Heuristic::Max),
        }
    }
}

impl FromStr for Algorithm {
    type Err = InputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == lower)
            .ok_or_else(|| InputError::InvalidAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Path, path length, formatted time and node count
    #[default]
    Human,
    /// Elapsed seconds and node count on two lines
    Machine,
}

/// Result of one solver run.
#[derive(Debug, Clone)]
pub enum Report {
    /// Rejected by the parity check; no search was run
    Unsolvable,
    /// The search ran to one of its terminal outcomes
    Finished {
        outcome: Outcome<Tiles, Move>,
        elapsed: Duration,
        nodes_generated: u64,
    },
}

impl Report {
    fn finished(outcome: Outcome<Tiles, Move>, stats: &SearchStats) -> Self {
        let (elapsed, nodes_generated) = match &outcome {
            Outcome::Solved {
                elapsed,
                nodes_generated,
                ..
            }
            | Outcome::TimedOut {
                elapsed,
                nodes_generated,
            } => (*elapsed, *nodes_generated),
            Outcome::NoSolution => (stats.elapsed(), stats.nodes_generated),
        };
        Report::Finished {
            outcome,
            elapsed,
            nodes_generated,
        }
    }

    pub fn path_len(&self) -> Option<usize> {
        match self {
            Report::Finished { outcome, .. } => outcome.path_len(),
            Report::Unsolvable => None,
        }
    }

    /// Path as move labels, if solved
    pub fn path(&self) -> Option<String> {
        match self {
            Report::Finished { outcome, .. } => outcome.path().map(|p| path_string(&p)),
            Report::Unsolvable => None,
        }
    }

    /// Elapsed time and node count, when a search ran
    pub fn timing(&self) -> Option<(Duration, u64)> {
        match self {
            Report::Finished {
                elapsed,
                nodes_generated,
                ..
            } => Some((*elapsed, *nodes_generated)),
            Report::Unsolvable => None,
        }
    }

    pub fn timed_out(&self) -> bool {
        matches!(
            self,
            Report::Finished {
                outcome: Outcome::TimedOut { .. },
                ..
            }
        )
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match (self, format) {
            (Report::Unsolvable, _) => "The given puzzle is not solvable".to_string(),
            (
                Report::Finished {
                    outcome: Outcome::NoSolution,
                    ..
                },
                _,
            ) => "No solution found".to_string(),
            (
                Report::Finished {
                    elapsed,
                    nodes_generated,
                    ..
                },
                OutputFormat::Machine,
            ) => format!("{}\n{}", elapsed.as_secs_f64(), nodes_generated),
            (
                Report::Finished {
                    outcome,
                    elapsed,
                    nodes_generated,
                },
                OutputFormat::Human,
            ) => {
                let (path, length) = match outcome.path() {
                    Some(p) => (path_string(&p), p.len().to_string()),
                    None => ("Timeout".to_string(), "Timeout".to_string()),
                };
                format!(
                    "Path: {path}\nPath length: {length}\nTime taken: {}\nNodes Generated: {nodes_generated}",
                    format_elapsed(*elapsed, self.timed_out())
                )
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(OutputFormat::Human))
    }
}

/// `12.345 seconds` under a minute, `2 minutes and 3.456 seconds` above.
/// Timed-out runs only show whole minutes.
pub fn format_elapsed(elapsed: Duration, timed_out: bool) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{secs:.3} seconds")
    } else if timed_out {
        format!("{} minutes", elapsed.as_secs() / 60)
    } else {
        format!("{} minutes and {:.3} seconds", elapsed.as_secs() / 60, secs % 60.0)
    }
}

/// Runs one algorithm on one puzzle instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    limits: SearchLimits,
}

impl Solver {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    #[inline]
    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Solve `initial` with `algorithm`. Unsolvable states are rejected before
    /// any search starts.
    pub fn solve(
        &self,
        initial: Tiles,
        algorithm: Algorithm,
    ) -> std::result::Result<Report, SearchError> {
        if !initial.is_solvable() {
            info!("rejecting unsolvable instance ({} inversions)", initial.inversions());
            return Ok(Report::Unsolvable);
        }

        let problem = EightPuzzle::new(initial);
        let mut stats = SearchStats::start();
        info!("solving with {algorithm}");

        let outcome = match algorithm.heuristic() {
            None if algorithm == Algorithm::Bfs => {
                breadth_first_search(&problem, &self.limits, &mut stats)
            }
            None => iterative_deepening_search(&problem, &self.limits, &mut stats),
            Some(h) => astar_search(&problem, |s| h.evaluate(s), &self.limits, &mut stats)?,
        };

        Ok(Report::finished(outcome, &stats))
    }

    /// Load a puzzle file and solve it
    pub fn solve_file(&self, path: &Path, algorithm: Algorithm) -> Result<Report> {
        let tiles = load_tiles(path)?;
        Ok(self.solve(tiles, algorithm)?)
    }
}
