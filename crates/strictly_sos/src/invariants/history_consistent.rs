//! History consistency invariant: one record per filled cell.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: Record count equals the number of filled cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().len() == engine.board().filled_count()
    }

    fn description() -> &'static str {
        "Move records match the number of filled cells"
    }
}
