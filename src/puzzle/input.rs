//! Puzzle file parsing
//!
//! A puzzle file holds nine whitespace-separated tokens in row-major order.
//! Each token is a digit 0-8 or `_` for the blank (`0` is accepted as the
//! blank too).

use std::fs;
use std::io;
use std::path::Path;

use crate::error::InputError;

use super::{Tiles, CELLS};

/// Parse puzzle text into a state
pub fn parse_tiles(text: &str) -> Result<Tiles, InputError> {
    let mut cells = Vec::with_capacity(CELLS);
    for token in text.split_whitespace() {
        let tile = match token {
            "_" => 0,
            _ => token
                .parse::<u8>()
                .ok()
                .filter(|&t| usize::from(t) < CELLS)
                .ok_or_else(|| InputError::InvalidToken {
                    token: token.to_string(),
                })?,
        };
        cells.push(tile);
    }

    let cells: [u8; CELLS] = cells
        .try_into()
        .map_err(|v: Vec<u8>| InputError::WrongTileCount { found: v.len() })?;
    Tiles::new(cells)
}

/// Read and parse a puzzle file
pub fn load_tiles(path: &Path) -> Result<Tiles, InputError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::FileNotFound(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_tiles(&text)
}
