//! First-class invariants for SOS.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and double as documentation of the
//! engine's guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();

                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod history_consistent;
pub mod monotonic_board;
pub mod tally_consistent;
pub mod turn_order;

pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use tally_consistent::TallyConsistentInvariant;
pub use turn_order::TurnOrderInvariant;

/// All SOS engine invariants as a composable set.
pub type SosInvariants = (
    MonotonicBoardInvariant,
    HistoryConsistentInvariant,
    TurnOrderInvariant,
    TallyConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEngine;
    use crate::types::{Cell, GameMode, Letter, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let mut engine = GameEngine::new();
        engine.reset(4, GameMode::General).unwrap();
        assert!(SosInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        engine.reset(3, GameMode::General).unwrap();
        engine.submit_move(0, 0, Letter::S).unwrap();
        engine.submit_move(0, 1, Letter::O).unwrap();
        engine.submit_move(0, 2, Letter::S).unwrap();
        engine.submit_move(2, 2, Letter::O).unwrap();
        assert!(SosInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::new();
        engine.reset(3, GameMode::Simple).unwrap();
        engine.submit_move(1, 1, Letter::O).unwrap();

        // A letter with no move behind it breaks two invariants at once.
        engine
            .board
            .set(Position::new(0, 0), Cell::Filled(Letter::S))
            .unwrap();

        let violations = SosInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new();
        type TwoInvariants = (MonotonicBoardInvariant, TurnOrderInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
