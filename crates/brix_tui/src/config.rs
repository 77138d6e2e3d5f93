//! Application configuration loaded from TOML and overridden from the CLI.

use std::path::Path;
use std::time::Duration;

use brix_tictactoe::{BoardSize, Mode, OpponentPolicy, PolicyKind, SizeError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::cli::Cli;
use crate::theme::Theme;

/// Settings for the scripted opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct OpponentConfig {
    /// How the opponent picks a cell.
    #[serde(default)]
    policy: PolicyKind,

    /// Seed for the random policy; unseeded games draw from OS entropy.
    #[serde(default)]
    seed: Option<u64>,
}

/// Top-level configuration for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board size preselected in the size menu.
    #[serde(default)]
    board_size: BoardSize,

    /// Starting colour theme.
    #[serde(default)]
    theme: Theme,

    /// When set, skip the menus and start playing in this mode.
    #[serde(default)]
    mode: Option<Mode>,

    /// Pause before the opponent replies.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Opponent policy settings.
    #[serde(default)]
    opponent: OpponentConfig,
}

#[instrument]
fn default_opponent_delay_ms() -> u64 {
    500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            theme: Theme::default(),
            mode: None,
            opponent_delay_ms: default_opponent_delay_ms(),
            opponent: OpponentConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(size = %config.board_size, theme = %config.theme, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    ///
    /// `--seed` implies the random policy.
    #[instrument(skip(self, cli))]
    pub fn override_with(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(side) = cli.size {
            self.board_size = BoardSize::new(side)?;
        }
        if let Some(mode) = cli.mode {
            self.mode = Some(mode);
        }
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
        if let Some(delay) = cli.opponent_delay_ms {
            self.opponent_delay_ms = delay;
        }
        if let Some(seed) = cli.seed {
            self.opponent = OpponentConfig {
                policy: PolicyKind::Random,
                seed: Some(seed),
            };
        }
        debug!(config = ?self, "Applied command-line overrides");
        Ok(self)
    }

    /// Opponent delay as a [`Duration`].
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Builds the configured opponent policy.
    #[instrument(skip(self))]
    pub fn build_policy(&self) -> Box<dyn OpponentPolicy> {
        self.opponent.policy.build(self.opponent.seed)
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
    /// Creates a new config error with caller location tracking.
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

impl From<SizeError> for ConfigError {
    #[track_caller]
    fn from(err: SizeError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.opponent_delay(), Duration::from_millis(500));
        assert_eq!(*config.opponent().policy(), PolicyKind::LowestEmpty);
    }

    #[test]
    fn test_full_file() {
        let config = AppConfig::from_toml(
            r#"
            board_size = 5
            theme = "light"
            mode = "two_player"
            opponent_delay_ms = 250

            [opponent]
            policy = "random"
            seed = 11
            "#,
        )
        .unwrap();
        assert_eq!(config.board_size().side(), 5);
        assert_eq!(*config.theme(), Theme::Light);
        assert_eq!(*config.mode(), Some(Mode::TwoPlayer));
        assert_eq!(config.opponent_delay(), Duration::from_millis(250));
        assert_eq!(*config.opponent().seed(), Some(11));
        assert_eq!(config.build_policy().name(), "random");
    }

    #[test]
    fn test_unsupported_size_rejected() {
        let err = AppConfig::from_toml("board_size = 9").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_file_reads_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 4").unwrap();
        let config = AppConfig::load_or_default(file.path()).unwrap();
        assert_eq!(config.board_size().side(), 4);
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = AppConfig::from_toml("board_size = 4\ntheme = \"light\"").unwrap();
        let cli = Cli::try_parse_from(["brix", "--size", "6", "--seed", "8", "--mode", "single"])
            .unwrap();
        let config = config.override_with(&cli).unwrap();
        assert_eq!(config.board_size().side(), 6);
        assert_eq!(*config.theme(), Theme::Light);
        assert_eq!(*config.mode(), Some(Mode::SingleOpponent));
        assert_eq!(*config.opponent().policy(), PolicyKind::Random);
        assert_eq!(*config.opponent().seed(), Some(8));
    }
}
