//! General-mode scoring.

use crate::outcome::{SosTally, Verdict};
use crate::types::Player;
use tracing::instrument;

/// Decides a scored game: the strictly higher tally wins, equal tallies draw.
#[instrument]
pub fn verdict(tally: &SosTally) -> Verdict {
    let blue = tally.get(Player::Blue);
    let red = tally.get(Player::Red);
    match blue.cmp(&red) {
        std::cmp::Ordering::Greater => Verdict::Winner(Player::Blue),
        std::cmp::Ordering::Less => Verdict::Winner(Player::Red),
        std::cmp::Ordering::Equal => Verdict::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_tally_wins() {
        let mut tally = SosTally::default();
        tally.add(Player::Red, 2);
        tally.add(Player::Blue, 1);
        assert_eq!(verdict(&tally), Verdict::Winner(Player::Red));
    }

    #[test]
    fn test_equal_tallies_draw() {
        let mut tally = SosTally::default();
        assert_eq!(verdict(&tally), Verdict::Draw);
        tally.add(Player::Red, 3);
        tally.add(Player::Blue, 3);
        assert_eq!(verdict(&tally), Verdict::Draw);
    }
}
