//! Monotonic board invariant: cells never change once written.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Cell;

/// Invariant: Board cells are monotonic (never overwritten, never cleared).
///
/// Replaying the move records onto an empty board must reproduce the
/// current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = engine.board().cleared();

        for record in engine.history() {
            let mov = record.mov();

            // Cell must be empty before placing
            if !reconstructed.is_empty(mov.position) {
                return false;
            }

            if reconstructed
                .set(mov.position, Cell::Filled(mov.letter))
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
