//! Move-selection AI: the positional heuristic and the depth-limited minimax
//! search with a play-strength dial.

mod heuristic;
mod search;

pub use heuristic::{evaluate, WIN_SCORE};
pub use search::{Advisor, Recommendation};
