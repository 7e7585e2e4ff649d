use std::path::Path;

use crate::error::{ConfigError, MAX_SIZE, MIN_SIZE};

/// Board shape configuration. Defaults to the classic 6x7 game with a
/// four-piece winning run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 6,
            cols: 7,
            win_length: 4,
        }
    }
}

/// Advisor tuning: the position budget the search is allowed to explore and
/// the play-strength dial passed to recommendations.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub max_positions: usize,
    pub skill: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            max_positions: 12_000,
            skill: 1.0,
        }
    }
}

impl AdvisorConfig {
    /// Look-ahead depth that keeps the explored tree near `max_positions`
    /// for a board with this many cells, never below one ply.
    pub fn ply_for(&self, rows: usize, cols: usize) -> usize {
        let cells = (rows * cols) as f64;
        let ply = (2.0 * (self.max_positions as f64).ln() / cells.ln()).floor();
        (ply as usize).max(1)
    }
}

/// Top-level engine configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board: BoardConfig,
    pub advisor: AdvisorConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < MIN_SIZE || self.board.cols < MIN_SIZE {
            return Err(ConfigError::Validation(format!(
                "board dimensions must be at least {MIN_SIZE}x{MIN_SIZE}"
            )));
        }
        if self.board.rows > MAX_SIZE || self.board.cols > MAX_SIZE {
            return Err(ConfigError::Validation(format!(
                "board dimensions must be at most {MAX_SIZE}x{MAX_SIZE}"
            )));
        }
        if self.board.win_length < 2 {
            return Err(ConfigError::Validation(
                "board.win_length must be at least 2".into(),
            ));
        }
        if self.board.win_length > self.board.rows || self.board.win_length > self.board.cols {
            return Err(ConfigError::Validation(
                "board.win_length must fit both board dimensions".into(),
            ));
        }
        if self.advisor.max_positions == 0 {
            return Err(ConfigError::Validation(
                "advisor.max_positions must be > 0".into(),
            ));
        }
        if self.advisor.skill < 0.0 || self.advisor.skill > 1.0 {
            return Err(ConfigError::Validation(
                "advisor.skill must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.board.win_length, 4);
        assert_eq!(config.advisor.max_positions, 12_000);
        assert_eq!(config.advisor.skill, 1.0);
    }

    #[test]
    fn test_ply_budget_formula() {
        let advisor = AdvisorConfig::default();
        // ln(12000) ~ 9.39; 2 * 9.39 / ln(42) ~ 5.02 -> 5 plies.
        assert_eq!(advisor.ply_for(6, 7), 5);
        // Bigger boards get fewer plies for the same budget.
        assert!(advisor.ply_for(20, 20) < advisor.ply_for(6, 7));
        // Never below one ply, even with a tiny budget.
        let tiny = AdvisorConfig {
            max_positions: 2,
            skill: 1.0,
        };
        assert_eq!(tiny.ply_for(20, 20), 1);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: EngineConfig = toml::from_str(
            r#"
            [board]
            rows = 8

            [advisor]
            skill = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.board.rows, 8);
        assert_eq!(config.board.cols, 7); // default preserved
        assert_eq!(config.advisor.skill, 0.5);
        assert_eq!(config.advisor.max_positions, 12_000);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = EngineConfig::default();
        config.advisor.skill = 1.5;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.board.win_length = 9;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.advisor.max_positions = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load_or_default(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.board.rows, 6);
    }
}
