//! Settings file for the SOS terminal.

use crate::cli::Cli;
use derive_getters::Getters;
use serde::Deserialize;
use std::path::Path;
use strictly_sos::{BoardSize, ConfigurationError, GameConfig, GameMode};
use tracing::{debug, info, instrument};

/// Game settings loaded from TOML and merged with command-line flags.
///
/// ```toml
/// size = 8
/// mode = "general"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Deserialize)]
pub struct Settings {
    /// Board side length.
    #[serde(default)]
    size: Option<usize>,

    /// Rule variant label.
    #[serde(default)]
    mode: Option<String>,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[track_caller]
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigurationError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            ConfigurationError::new(format!("Failed to parse settings: {}", e))
        })?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Applies command-line overrides.
    #[instrument(skip(cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(size) = cli.size {
            self.size = Some(size);
        }
        if let Some(mode) = &cli.mode {
            self.mode = Some(mode.clone());
        }
        self
    }

    /// Validates the settings into a game configuration.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigurationError> {
        let size = self.size.unwrap_or(BoardSize::MIN);
        match &self.mode {
            Some(label) => GameConfig::from_label(size, label),
            None => GameConfig::new(size, GameMode::default()),
        }
    }
}
