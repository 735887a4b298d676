//! SOS detection around a freshly placed letter.

use crate::types::{Board, Letter, Position};
use tracing::{instrument, trace};

/// Three cells spelling S-O-S, in line order.
pub type SosLine = [Position; 3];

/// Horizontal, vertical, main diagonal, anti-diagonal.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Letters a line must hold, in order.
const PATTERN: [Letter; 3] = [Letter::S, Letter::O, Letter::S];

/// Returns every S-O-S line passing through `pos`.
///
/// Each axis is tried with `pos` as the first, middle and last cell of the
/// triple. Every matching triple is reported; there is no early exit, so a
/// single placement may complete several lines at once.
#[instrument(skip(board), fields(size = board.size()))]
pub fn completed_sequences(board: &Board, pos: Position) -> Vec<SosLine> {
    let mut lines = Vec::new();

    for (d_row, d_col) in AXES {
        for start in -2..=0isize {
            let Some(line) = triple(pos, start, d_row, d_col) else {
                continue;
            };
            let matches = line
                .iter()
                .zip(PATTERN)
                .all(|(cell, want)| board.letter(*cell) == Some(want));
            if matches {
                trace!(?line, "SOS completed");
                lines.push(line);
            }
        }
    }

    lines
}

/// Counts the S-O-S lines passing through `pos`.
pub fn count_sos(board: &Board, pos: Position) -> u32 {
    completed_sequences(board, pos).len() as u32
}

/// Cells `pos + (start + i) * direction` for `i` in `0..3`, if none go negative.
fn triple(pos: Position, start: isize, d_row: isize, d_col: isize) -> Option<SosLine> {
    let cell = |i: isize| pos.offset((start + i) * d_row, (start + i) * d_col);
    Some([cell(0)?, cell(1)?, cell(2)?])
}
