//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "minimax.toml";

/// Settings for the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Side the human plays in interactive games.
    human: Player,

    /// Print the engine's ranked scores after each engine move.
    show_scores: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            show_scores: false,
            log_filter: default_log_filter(),
        }
    }
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human = %config.human, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the explicitly named file, or the default file if it exists.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the human's side.
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    /// Overrides score display.
    pub fn with_show_scores(mut self, show_scores: bool) -> Self {
        self.show_scores = show_scores;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(*config.human(), Player::X);
        assert!(!*config.show_scores());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("human = \"o\"").unwrap();
        assert_eq!(*config.human(), Player::O);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_full_toml() {
        let config = AppConfig::from_toml(
            "human = \"O\"\nshow_scores = true\nlog_filter = \"minimax_tictactoe=debug\"\n",
        )
        .unwrap();
        assert_eq!(*config.human(), Player::O);
        assert!(*config.show_scores());
        assert_eq!(config.log_filter(), "minimax_tictactoe=debug");
    }

    #[test]
    fn test_bad_player_rejected() {
        let err = AppConfig::from_toml("human = \"z\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_human(Player::O)
            .with_show_scores(true);
        assert_eq!(*config.human(), Player::O);
        assert!(*config.show_scores());
    }
}
