//! Error types for move validation and configuration loading

use std::path::PathBuf;

/// Reasons a stone cannot be placed.
///
/// None of these are fatal: the board is left untouched (apart from
/// re-asserting the decided flag) and the caller may retry elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfRange {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },

    #[error("the game is already decided")]
    GameDecided,
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
    fn test_out_of_range_display() {
        let err = MoveError::OutOfRange {
            row: -1,
            col: 3,
            rows: 15,
            cols: 15,
        };
        assert_eq!(
            err.to_string(),
            "position (-1, 3) is outside the 15x15 board"
        );
    }

    #[test]
    fn test_occupied_display() {
        let err = MoveError::Occupied { row: 7, col: 7 };
        assert_eq!(err.to_string(), "position (7, 7) is already occupied");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be > 0"
        );
    }
}
