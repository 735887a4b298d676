//! Board-full detection.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells hold a letter).
///
/// A full board ends the game in either mode.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
