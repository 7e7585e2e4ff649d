//! # connectk
//!
//! A generalized Connect Four engine: an N-by-M gravity-drop board where a
//! side wins by lining up K pieces in a row, column, or diagonal. The crate
//! tracks board state with move/undo and outcome detection, and provides an
//! artificial opponent built on a positional heuristic and depth-limited
//! minimax search with an adjustable play strength.
//!
//! Presentation (rendering, input) is deliberately out of scope; callers
//! drive the engine through [`game::GameState`] and [`advisor::Advisor`].
//!
//! ## Modules
//!
//! - [`game`] — Board, players, and the game state machine
//! - [`advisor`] — Heuristic evaluation and minimax move recommendations
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod advisor;
pub mod config;
pub mod error;
pub mod game;

pub use advisor::{evaluate, Advisor, Recommendation};
pub use config::{AdvisorConfig, BoardConfig, EngineConfig};
pub use error::{BoardError, ConfigError, MoveError};
pub use game::{Board, Cell, GameOutcome, GameState, MoveRecord, Player};
