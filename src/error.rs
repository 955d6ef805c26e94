use std::path::PathBuf;

/// Errors that can occur when constructing a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board dimensions {height}x{width}: both must be positive and the grid must fit in memory")]
    InvalidDimensions { height: usize, width: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::InvalidDimensions { height: 0, width: 6 };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 0x6: both must be positive and the grid must fit in memory"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.height must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.height must be >= 1"
        );
    }
}
