use std::path::PathBuf;

/// Board dimension limits accepted by [`crate::game::GameState::new`].
pub const MIN_SIZE: usize = 4;
pub const MAX_SIZE: usize = 20;

/// Errors raised when constructing a board with invalid dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board too small: {rows}x{cols} (minimum {MIN_SIZE}x{MIN_SIZE})")]
    BoardTooSmall { rows: usize, cols: usize },

    #[error("board too large: {rows}x{cols} (maximum {MAX_SIZE}x{MAX_SIZE})")]
    BoardTooLarge { rows: usize, cols: usize },

    #[error("win sequence of {win_length} does not fit a {rows}x{cols} board")]
    WinSequenceTooLong {
        win_length: usize,
        rows: usize,
        cols: usize,
    },

    #[error("win sequence must be at least 2, got {0}")]
    WinSequenceTooShort(usize),
}

/// Errors raised when a move is rejected. The game state is unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} out of range (board has {cols} columns)")]
    ColumnOutOfRange { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    MoveAfterGameOver,
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
    fn test_board_error_display() {
        let err = BoardError::BoardTooSmall { rows: 2, cols: 7 };
        assert_eq!(err.to_string(), "board too small: 2x7 (minimum 4x4)");

        let err = BoardError::WinSequenceTooShort(1);
        assert_eq!(err.to_string(), "win sequence must be at least 2, got 1");
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::ColumnOutOfRange { column: 9, cols: 7 };
        assert_eq!(
            err.to_string(),
            "column 9 out of range (board has 7 columns)"
        );
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("advisor.skill must be in [0, 1]".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: advisor.skill must be in [0, 1]"
        );
    }
}
