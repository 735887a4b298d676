//! Strictly SOS - type-safe game engine for SOS
//!
//! Two players, Blue and Red, take turns placing an `S` or an `O` on a
//! square board, trying to spell S-O-S along a row, column or diagonal.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`], a synchronous state machine with no I/O
//! - **Rules**: pure SOS detection, board-full and scoring functions
//! - **Contracts**: preconditions checked on every move, postconditions and
//!   invariants checked in debug builds
//! - **Outcomes**: structured results for a presentation layer to render
//!
//! # Example
//!
//! ```
//! use strictly_sos::{GameEngine, GameMode, Letter, MoveOutcome, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.reset(3, GameMode::Simple)?;
//!
//! engine.submit_move(0, 0, Letter::S)?;
//! engine.submit_move(0, 1, Letter::O)?;
//! let outcome = engine.submit_move(0, 2, Letter::S)?;
//!
//! assert_eq!(outcome, MoveOutcome::Win { winner: Player::Blue });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
pub mod contracts;
mod engine;
pub mod invariants;
mod outcome;
pub mod rules;
mod types;

// Crate-level exports - Domain types
pub use types::{Board, Cell, GameMode, GameStatus, Letter, Player, Position};

// Crate-level exports - Configuration
pub use config::{parse_mode, BoardSize, ConfigurationError, GameConfig};

// Crate-level exports - Actions
pub use action::{Move, MoveError, MoveRecord};

// Crate-level exports - Outcomes
pub use outcome::{EndOutcome, MoveOutcome, SosTally, Verdict};

// Crate-level exports - Engine
pub use engine::GameEngine;
