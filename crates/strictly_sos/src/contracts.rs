//! Contract-based validation for SOS.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions run on every move; postconditions run in
//! debug builds.

use crate::action::{Move, MoveError};
use crate::engine::GameEngine;
use crate::invariants::{InvariantSet, SosInvariants};
use crate::types::GameStatus;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must be accepting moves.
pub struct GameIsActive;

impl GameIsActive {
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        match engine.status() {
            GameStatus::Active => Ok(()),
            status => Err(MoveError::NotActive(status)),
        }
    }
}

/// Precondition: The move must target a cell on the board.
pub struct WithinBounds;

impl WithinBounds {
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.board().contains(mov.position) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                position: mov.position,
                size: engine.board().size(),
            })
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Composite precondition: active game, on the board, empty cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in that order.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        GameIsActive::check(engine)?;
        WithinBounds::check(mov, engine)?;
        CellIsEmpty::check(mov, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is active
/// - Position is on the board
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one more cell is filled
/// - Tallies never decrease
/// - Every engine invariant holds
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(engine: &GameEngine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, engine)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        if after.board().filled_count() != before.board().filled_count() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must fill exactly one cell".to_string(),
            ));
        }

        let (was, now) = (before.tally(), after.tally());
        if now.total() < was.total() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: tallies decreased".to_string(),
            ));
        }

        SosInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
