//! Game configuration: board size and rule variant.

use crate::types::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board, validated to lie in `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest playable board.
    pub const MIN: usize = 3;
    /// Largest playable board.
    pub const MAX: usize = 20;

    /// Creates a board size, rejecting values outside `MIN..=MAX`.
    #[track_caller]
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigurationError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(ConfigurationError::new(format!(
                "Board size {} is outside {}..={}",
                size,
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigurationError;

    #[track_caller]
    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Settings a game is started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    size: BoardSize,
    /// Rule variant.
    mode: GameMode,
}

impl GameConfig {
    /// Creates a validated configuration.
    #[track_caller]
    #[instrument]
    pub fn new(size: usize, mode: GameMode) -> Result<Self, ConfigurationError> {
        Ok(Self {
            size: BoardSize::new(size)?,
            mode,
        })
    }

    /// Creates a configuration from a mode label such as `"General Game"`.
    #[track_caller]
    #[instrument]
    pub fn from_label(size: usize, mode: &str) -> Result<Self, ConfigurationError> {
        Self::new(size, parse_mode(mode)?)
    }
}

/// Parses a rule variant label, case-insensitively.
#[track_caller]
#[instrument]
pub fn parse_mode(label: &str) -> Result<GameMode, ConfigurationError> {
    GameMode::from_str(label.trim())
        .map_err(|_| ConfigurationError::new(format!("Unrecognized game mode: {:?}", label)))
}

/// Invalid configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid configuration: {} at {}:{}", message, file, line)]
pub struct ConfigurationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
