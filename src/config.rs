//! Engine configuration, loadable from TOML

use std::path::Path;

use log::warn;

use crate::board::Board;
use crate::error::ConfigError;
use crate::search::DEFAULT_DEPTH_LIMIT;

/// Boards with more cells than this are unlikely to finish an exhaustive
/// search at a large depth limit.
pub const EXHAUSTIVE_CELL_LIMIT: usize = 16;

/// Board dimensions and win length.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Stones in a row needed to win (`k`)
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 15,
            cols: 15,
            win_length: 5,
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum plies explored below the current position
    pub depth_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        if self.board.win_length == 0 {
            return Err(ConfigError::Validation(
                "board.win_length must be > 0".into(),
            ));
        }
        if self.search.depth_limit == 0 {
            return Err(ConfigError::Validation(
                "search.depth_limit must be > 0".into(),
            ));
        }
        if !self.fits_exhaustive_search() && self.search.depth_limit > 4 {
            warn!(
                "{}x{} board with depth limit {}: the computer's search may not finish",
                self.board.rows, self.board.cols, self.search.depth_limit
            );
        }
        Ok(())
    }

    /// Check if the board is small enough to search to the end of the game
    pub fn fits_exhaustive_search(&self) -> bool {
        self.board.rows * self.board.cols <= EXHAUSTIVE_CELL_LIMIT
    }

    /// Fresh board with the configured dimensions.
    pub fn new_board(&self) -> Board {
        Board::new(self.board.rows, self.board.cols, self.board.win_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_standard_game() {
        let config = EngineConfig::default();
        assert_eq!(config.board.rows, 15);
        assert_eq!(config.board.cols, 15);
        assert_eq!(config.board.win_length, 5);
        assert_eq!(config.search.depth_limit, DEFAULT_DEPTH_LIMIT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [board]
            rows = 3
            cols = 3
            win_length = 3
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            EngineConfig {
                board: BoardConfig {
                    rows: 3,
                    cols: 3,
                    win_length: 3,
                },
                search: SearchConfig::default(),
            }
        );

        let board = config.new_board();
        assert_eq!((board.rows(), board.cols(), board.win_length()), (3, 3, 3));
    }

    #[test]
    fn test_validation_rejects_zero_values() {
        let err = EngineConfig::from_toml_str("[board]\nrows = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = EngineConfig::from_toml_str("[search]\ndepth_limit = 0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth_limit must be > 0"
        );
    }

    #[test]
    fn test_fits_exhaustive_search() {
        assert!(!EngineConfig::default().fits_exhaustive_search());
        let small = EngineConfig::from_toml_str("[board]\nrows = 4\ncols = 4\nwin_length = 3\n")
            .unwrap();
        assert!(small.fits_exhaustive_search());
    }

    #[test]
    fn test_invalid_toml() {
        let err = EngineConfig::from_toml_str("[board\nrows = 3").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = Path::new("this/config/does/not/exist.toml");
        let config = EngineConfig::load_or_default(path).unwrap();
        assert_eq!(config, EngineConfig::default());

        assert!(matches!(
            EngineConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
