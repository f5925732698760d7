use std::path::Path;

use crate::ai::StrategyConfig;
use crate::error::{BoardError, ConfigError};
use crate::game::Board;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub play: PlayConfig,
    /// Strategy for the token that moves first.
    pub red: StrategyConfig,
    pub yellow: StrategyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            play: PlayConfig::default(),
            red: StrategyConfig::Minimax { depth: 4 },
            yellow: StrategyConfig::Random,
        }
    }
}

/// Board dimensions and win length.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub tokens_to_connect: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 7,
            height: 6,
            tokens_to_connect: 4,
        }
    }
}

impl BoardConfig {
    pub fn build(&self) -> Result<Board, BoardError> {
        Board::new(self.width, self.height, self.tokens_to_connect)
    }
}

/// How many games to play and how to seed random strategies.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub games: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            games: 1,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board
            .build()
            .map_err(|e| ConfigError::Validation(format!("board: {e}")))?;

        if self.play.games == 0 {
            return Err(ConfigError::Validation("play.games must be > 0".into()));
        }

        for (side, strategy) in [("red", &self.red), ("yellow", &self.yellow)] {
            match *strategy {
                StrategyConfig::Minimax { depth: 0 } => {
                    return Err(ConfigError::Validation(format!(
                        "{side}.depth must be >= 1"
                    )));
                }
                StrategyConfig::Greedy { radius: 0 } => {
                    return Err(ConfigError::Validation(format!(
                        "{side}.radius must be >= 1"
                    )));
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
