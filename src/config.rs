use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;

use crate::error::ConfigError;
use crate::game::{PlayerId, PlayerLabels, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Largest board the terminal view can lay out.
pub const MAX_DIMENSION: usize = 16;

/// Board dimensions for new games.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Display metadata for one player. Never consulted by the rules. Both
/// fields are required when a `[playerN]` table is present.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    /// Terminal colour name or `#rrggbb`
    pub color: String,
}

impl PlayerConfig {
    fn with(name: &str, color: &str) -> Self {
        PlayerConfig {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    /// Parsed display colour.
    pub fn color(&self) -> Result<Color, ConfigError> {
        Color::from_str(&self.color).map_err(|_| {
            ConfigError::Validation(format!("unrecognised colour '{}'", self.color))
        })
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub player1: PlayerConfig,
    pub player2: PlayerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameConfig::default(),
            player1: PlayerConfig::with("Player 1", "red"),
            player2: PlayerConfig::with("Player 2", "blue"),
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
        for (key, value) in [("game.height", self.game.height), ("game.width", self.game.width)] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "{key} must be in 1..={MAX_DIMENSION}"
                )));
            }
        }

        if self.player1.name.trim().is_empty() {
            return Err(ConfigError::Validation("player1.name must not be empty".into()));
        }
        if self.player2.name.trim().is_empty() {
            return Err(ConfigError::Validation("player2.name must not be empty".into()));
        }

        if self.player1.color()? == self.player2.color()? {
            return Err(ConfigError::Validation(
                "player1.color and player2.color must differ".into(),
            ));
        }

        Ok(())
    }

    pub fn player(&self, player: PlayerId) -> &PlayerConfig {
        match player {
            PlayerId::Player1 => &self.player1,
            PlayerId::Player2 => &self.player2,
        }
    }

    /// Labels handed to the engine when a game is created.
    pub fn labels(&self) -> PlayerLabels {
        PlayerLabels::new(self.player1.name.clone(), self.player2.name.clone())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
