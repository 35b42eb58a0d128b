//! Session configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_engine::Diagnostics;
use tracing::{debug, info, instrument};

/// Default configuration file, read when present.
pub const DEFAULT_CONFIG_PATH: &str = "tictac.toml";

/// Who picks the moves for a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// A person at the console.
    #[default]
    Human,
    /// The unfinished automated opponent.
    Stupid,
}

/// Configuration for a play session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Strategy for the `X` seat.
    player_x: PlayerKind,

    /// Strategy for the `O` seat.
    player_o: PlayerKind,

    /// Engine diagnostics.
    diagnostics: Diagnostics,
}

impl SessionConfig {
    /// Creates a session configuration.
    pub fn new(player_x: PlayerKind, player_o: PlayerKind, diagnostics: Diagnostics) -> Self {
        Self {
            player_x,
            player_o,
            diagnostics,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_x = %config.player_x,
            player_o = %config.player_o,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, else the default file if it exists, else
    /// defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces values that were given on the command line.
    pub fn with_overrides(
        mut self,
        player_x: Option<PlayerKind>,
        player_o: Option<PlayerKind>,
        trace_moves: bool,
        trace_board: bool,
    ) -> Self {
        if let Some(kind) = player_x {
            self.player_x = kind;
        }
        if let Some(kind) = player_o {
            self.player_o = kind;
        }
        self.diagnostics = Diagnostics::new(
            *self.diagnostics.moves() || trace_moves,
            *self.diagnostics.board() || trace_board,
        );
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
    use std::io::Write;

    #[test]
    fn test_parse_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "player_x = \"human\"\nplayer_o = \"stupid\"\n\n[diagnostics]\nmoves = true\n"
        )
        .unwrap();

        let config = SessionConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.player_x(), PlayerKind::Human);
        assert_eq!(*config.player_o(), PlayerKind::Stupid);
        assert!(*config.diagnostics().moves());
        assert!(!*config.diagnostics().board());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = SessionConfig::from_file(file.path()).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SessionConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_unknown_player_kind_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_x = \"genius\"").unwrap();
        assert!(SessionConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = SessionConfig::default().with_overrides(
            Some(PlayerKind::Stupid),
            None,
            false,
            true,
        );
        assert_eq!(*config.player_x(), PlayerKind::Stupid);
        assert_eq!(*config.player_o(), PlayerKind::Human);
        assert_eq!(*config.diagnostics(), Diagnostics::new(false, true));
    }

    #[test]
    fn test_player_kind_names() {
        assert_eq!(PlayerKind::Stupid.to_string(), "stupid");
        assert_eq!("human".parse::<PlayerKind>().unwrap(), PlayerKind::Human);
    }
}
