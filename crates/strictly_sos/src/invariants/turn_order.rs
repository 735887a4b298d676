//! Turn order invariant: Blue opens, players alternate unless a scoring
//! General-mode move earns an extra turn.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{GameMode, GameStatus, Player};

/// Invariant: Movers follow the turn rules.
///
/// The mover after a record is the same player if that record completed an
/// SOS in General mode, and the opponent otherwise.
pub struct TurnOrderInvariant;

impl TurnOrderInvariant {
    fn next_after(mode: GameMode, player: Player, completed: u32) -> Player {
        if mode == GameMode::General && completed > 0 {
            player
        } else {
            player.opponent()
        }
    }
}

impl Invariant<GameEngine> for TurnOrderInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mode = engine.mode();
        let mut expected = Player::Blue;

        for record in engine.history() {
            if record.mov().player != expected {
                return false;
            }
            expected = Self::next_after(mode, record.mov().player, *record.completed());
        }

        // Once finished the current player is no longer meaningful.
        engine.status() == GameStatus::Finished || engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Blue opens and turns alternate except after a General-mode SOS"
    }
}
