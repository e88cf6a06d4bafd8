//! Board representation for Gomoku

pub mod bitboard;
pub mod board;
pub mod state;


pub use bitboard::Bitboard;
pub use board::Board;
pub use state::GameState;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Single-character symbol used in text boards
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'B',
            Stone::White => 'W',
            Stone::Empty => '.',
        }
    }
}

/// Position on the board, 0-based. Displayed 1-based as `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbour `steps` cells away along `(dr, dc)`, if still on the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Option<Pos> {
        let r = self.row as i32 + dr * steps;
        let c = self.col as i32 + dc * steps;
        Pos::is_valid(r, c).then(|| Pos::new(r as u8, c as u8))
    }

    /// Position from 1-based coordinates as shown to players
    pub fn from_one_based(row: usize, col: usize) -> Option<Pos> {
        let valid = (1..=BOARD_SIZE).contains(&row) && (1..=BOARD_SIZE).contains(&col);
        valid.then(|| Pos::new((row - 1) as u8, (col - 1) as u8))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

impl std::str::FromStr for Pos {
    type Err = crate::error::InputError;

    /// Parse `"r c"`, `"r,c"` or `"(r, c)"` in 1-based coordinates.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::error::InputError::InvalidMove(s.trim().to_string());
        let coords: Vec<usize> = s
            .split(|c: char| c == ',' || c == '(' || c == ')' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<_, _>>()?;
        match coords[..] {
            [row, col] => Pos::from_one_based(row, col).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}
