//! Core game logic: gravity-drop board, player types, and the game state
//! machine with move/undo and outcome tracking.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, NeighborCounts};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveRecord};
