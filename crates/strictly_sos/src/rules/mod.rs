//! Game rules for SOS.
//!
//! Pure functions over the board and tallies. Rules are kept apart from
//! the engine so contracts and tests can reason about them directly.

pub mod draw;
pub mod score;
pub mod sos;

pub use draw::is_full;
pub use score::verdict;
pub use sos::{completed_sequences, count_sos, SosLine};
