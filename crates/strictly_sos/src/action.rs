//! First-class action types for SOS.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated independently of execution.

use crate::types::{GameStatus, Letter, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in SOS: a player placing a letter at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell receiving the letter.
    pub position: Position,
    /// The letter placed.
    pub letter: Letter,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position, letter: Letter) -> Self {
        Self {
            player,
            position,
            letter,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} plays {} at {}", self.player, self.letter, self.position)
    }
}

/// A completed move together with the SOS sequences it formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveRecord {
    mov: Move,
    completed: u32,
}

/// Illegal move: the move was rejected and the game state is untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position lies outside the board.
    #[display("Position {position} is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested position.
        position: Position,
        /// Side length of the board.
        size: usize,
    },

    /// The cell already holds a letter.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Position),

    /// The game is not accepting moves.
    #[display("Game is not active (status: {_0})")]
    NotActive(GameStatus),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
