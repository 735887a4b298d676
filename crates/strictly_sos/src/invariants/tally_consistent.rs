//! Tally invariant: scores are exactly the SOS sequences each player made.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{GameMode, Player};
use strum::IntoEnumIterator;

/// Invariant: Each tally equals the sum of that player's General-mode completions.
///
/// Simple mode never credits a tally.
pub struct TallyConsistentInvariant;

impl Invariant<GameEngine> for TallyConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        Player::iter().all(|player| {
            let expected: u32 = match engine.mode() {
                GameMode::Simple => 0,
                GameMode::General => engine
                    .history()
                    .iter()
                    .filter(|record| record.mov().player == player)
                    .map(|record| *record.completed())
                    .sum(),
            };
            engine.tally().get(player) == expected
        })
    }

    fn description() -> &'static str {
        "Tallies match the SOS sequences recorded for each player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Letter;

    #[test]
    fn test_scoring_holds() {
        let mut engine = GameEngine::new();
        engine.reset(3, GameMode::General).unwrap();
        engine.submit_move(0, 0, Letter::S).unwrap();
        engine.submit_move(0, 1, Letter::O).unwrap();
        engine.submit_move(0, 2, Letter::S).unwrap();
        assert_eq!(engine.tally().get(Player::Blue), 1);
        assert!(TallyConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_simple_mode_never_scores() {
        let mut engine = GameEngine::new();
        engine.reset(3, GameMode::Simple).unwrap();
        engine.submit_move(0, 0, Letter::S).unwrap();
        engine.submit_move(0, 1, Letter::O).unwrap();
        engine.submit_move(0, 2, Letter::S).unwrap();
        assert_eq!(engine.tally().total(), 0);
        assert!(TallyConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_inflated_tally_violates() {
        let mut engine = GameEngine::new();
        engine.reset(3, GameMode::General).unwrap();
        engine.tally.add(Player::Red, 1);
        assert!(!TallyConsistentInvariant::holds(&engine));
    }
}
