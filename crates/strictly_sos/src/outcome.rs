//! Structured results handed back to the presentation layer.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Decision of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Verdict {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Winner(player) => Some(*player),
            Verdict::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Verdict::Draw)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Winner(player) => write!(f, "{} wins", player),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}

/// Per-player count of completed SOS sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SosTally {
    blue: u32,
    red: u32,
}

impl SosTally {
    /// Returns the player's count.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Blue => self.blue,
            Player::Red => self.red,
        }
    }

    /// Sum of both players' counts.
    pub fn total(&self) -> u32 {
        self.blue + self.red
    }

    /// Credits `count` sequences to the player and returns the new value.
    pub(crate) fn add(&mut self, player: Player, count: u32) -> u32 {
        let slot = match player {
            Player::Blue => &mut self.blue,
            Player::Red => &mut self.red,
        };
        *slot += count;
        *slot
    }
}

/// Final result of a game, natural or forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndOutcome {
    /// `None` only for a forced end that could not be decided.
    pub verdict: Option<Verdict>,
    /// Blue's final tally.
    pub blue_score: u32,
    /// Red's final tally.
    pub red_score: u32,
}

impl EndOutcome {
    /// Builds an end outcome carrying both tallies.
    pub fn new(verdict: Option<Verdict>, tally: SosTally) -> Self {
        Self {
            verdict,
            blue_score: tally.get(Player::Blue),
            red_score: tally.get(Player::Red),
        }
    }
}

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Simple mode: the mover completed the first SOS.
    Win {
        /// The mover.
        winner: Player,
    },
    /// General mode: the mover scored and moves again.
    ExtraTurn {
        /// The mover, who stays current.
        player: Player,
        /// The mover's tally after this move.
        tally: u32,
    },
    /// The board filled up.
    End(EndOutcome),
    /// Play passes to the given player.
    NextTurn {
        /// The new current player.
        player: Player,
    },
}

impl MoveOutcome {
    /// Returns true if the game is over after this outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Win { .. } | MoveOutcome::End(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_add() {
        let mut tally = SosTally::default();
        assert_eq!(tally.add(Player::Red, 2), 2);
        assert_eq!(tally.add(Player::Red, 1), 3);
        assert_eq!(tally.get(Player::Blue), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_end_outcome_scores() {
        let mut tally = SosTally::default();
        tally.add(Player::Blue, 4);
        tally.add(Player::Red, 1);
        let end = EndOutcome::new(Some(Verdict::Winner(Player::Blue)), tally);
        assert_eq!(end.blue_score, 4);
        assert_eq!(end.red_score, 1);
        assert_eq!(end.verdict.and_then(|v| v.winner()), Some(Player::Blue));
    }

    #[test]
    fn test_terminal_outcomes() {
        assert!(MoveOutcome::Win { winner: Player::Red }.is_terminal());
        assert!(!MoveOutcome::NextTurn { player: Player::Red }.is_terminal());
        assert!(
            !MoveOutcome::ExtraTurn {
                player: Player::Blue,
                tally: 1
            }
            .is_terminal()
        );
        assert!(Verdict::Draw.is_draw());
    }
}
