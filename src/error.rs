//! Error types shared by the search engine, the puzzle loader, the Gomoku
//! session and the binaries

use std::path::PathBuf;

use thiserror::Error;

/// Contract violations on a search frontier.
///
/// Search loops check membership before touching the frontier, so seeing one
/// of these means a bug in the caller rather than bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("trying to pop from an empty priority frontier")]
    EmptyFrontier,

    #[error("{0} is not in the priority frontier")]
    KeyNotFound(String),
}

/// Problems with user supplied puzzle files, algorithm names or moves.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid token '{token}' (expected a digit 0-8 or '_')")]
    InvalidToken { token: String },

    #[error("expected 9 tiles, found {found}")]
    WrongTileCount { found: usize },

    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),

    #[error("invalid algorithm '{0}' (options are bfs, ids, h1, h2 or h3)")]
    InvalidAlgorithm(String),

    #[error("invalid part '{0}' (options are part2 or part3)")]
    InvalidPart(String),

    #[error("invalid move '{0}' (expected two coordinates between 1 and 15)")]
    InvalidMove(String),

    #[error("invalid evaluation function '{0}' (options are 1 or 2)")]
    InvalidEval(String),
}

/// Moves rejected by a Gomoku session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("{0} is not a legal move")]
    Illegal(crate::board::Pos),

    #[error("no move available")]
    NoMove,
}

/// Crate-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
