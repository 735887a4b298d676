//! Core domain types for SOS.

use crate::action::MoveError;
use crate::config::{BoardSize, ConfigurationError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A letter a player may place on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Letter {
    /// The outer letter of an SOS.
    S,
    /// The middle letter of an SOS.
    O,
}

impl Letter {
    /// Parses a single character (`s`, `S`, `o`, `O`).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(Letter::S),
            'O' => Some(Letter::O),
            _ => None,
        }
    }
}

/// A cell on the SOS board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Cell holding a placed letter.
    Filled(Letter),
}

impl Cell {
    /// Returns the letter in this cell, if any.
    pub fn letter(self) -> Option<Letter> {
        match self {
            Cell::Empty => None,
            Cell::Filled(letter) => Some(letter),
        }
    }
}

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Blue player (goes first).
    Blue,
    /// Red player (goes second).
    Red,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }
}

/// Rule variant, fixed for the lifetime of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// First SOS wins.
    #[default]
    #[strum(to_string = "Simple", serialize = "Simple Game")]
    Simple,
    /// Play until the board is full; most SOS sequences wins.
    #[strum(to_string = "General", serialize = "General Game")]
    General,
}

/// Lifecycle of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum GameStatus {
    /// No game has been started yet.
    #[default]
    Inactive,
    /// Moves are being accepted.
    Active,
    /// Game is over; only a reset leaves this state.
    Finished,
}

/// Zero-based coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Position {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Position {
    /// Offsets the position by a signed delta, returning `None` below zero.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square N x N SOS board.
///
/// Deserialization goes through [`RawBoard`] so a snapshot whose cell count
/// does not match its size is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Side length.
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let size = size.get();
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns an empty board of the same size.
    pub(crate) fn cleared(&self) -> Self {
        Self {
            size: self.size,
            cells: vec![Cell::Empty; self.cells.len()],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.size + pos.col)
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Gets the letter at the given position, `None` if empty or off the board.
    pub fn letter(&self, pos: Position) -> Option<Letter> {
        self.get(pos).and_then(Cell::letter)
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), MoveError> {
        let i = self.index(pos).ok_or(MoveError::OutOfBounds {
            position: pos,
            size: self.size,
        })?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Checks if a cell is empty (false for positions off the board).
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Checks if every cell holds a letter.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of cells holding a letter.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
}

/// Wire form of a [`Board`], validated before it becomes one.
#[derive(Deserialize)]
struct RawBoard {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigurationError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let size = raw.size.get();
        if raw.cells.len() != size * size {
            return Err(ConfigurationError::new(format!(
                "Board of size {} needs {} cells, got {}",
                size,
                size * size,
                raw.cells.len()
            )));
        }
        Ok(Self {
            size,
            cells: raw.cells,
        })
    }
}
