use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{GameOutcome, GameState, Player};

use super::heuristic::{evaluate, WIN_SCORE};

/// A move suggestion with the score the search assigned to it. `column` is
/// `None` when no move applies (zero look-ahead or a finished game).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub column: Option<usize>,
    pub score: f64,
}

/// Depth-limited minimax advisor. White maximizes, Black minimizes.
///
/// The advisor owns its random source so that skill degradation and random
/// fallbacks are reproducible from a seed.
pub struct Advisor {
    rng: StdRng,
}

impl Advisor {
    pub fn new() -> Self {
        Advisor {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded constructor for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Advisor {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Recommend a move for the side to move, searching `ply` half-moves
    /// ahead.
    ///
    /// `skill` in [0, 1] dials the play strength: before searching, the
    /// advisor may randomly shrink the look-ahead or answer with a uniformly
    /// random legal move. At `skill = 1` the full-depth search always runs;
    /// at `skill = 0` the answer is effectively random.
    pub fn recommend(&mut self, state: &GameState, ply: usize, skill: f64) -> Recommendation {
        let mut ply = ply;

        if !state.is_terminal() && skill < self.rng.random::<f64>().sqrt() {
            let quality = self.rng.random::<f64>().sqrt();
            if skill >= quality {
                // Weaken by searching shallower.
                ply = (ply as f64 * quality).ceil() as usize;
            } else {
                // Weaken by moving at random.
                return Recommendation {
                    column: self.random_move(state),
                    score: 0.0,
                };
            }
        }

        self.search(state, ply)
    }

    fn random_move(&mut self, state: &GameState) -> Option<usize> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.rng.random_range(0..moves.len())])
        }
    }

    fn search(&mut self, state: &GameState, ply: usize) -> Recommendation {
        // Opening book of one entry: always start in the middle.
        if state.moves_played() == 0 {
            return Recommendation {
                column: Some(state.cols() >> 1),
                score: 0.0,
            };
        }

        if ply == 0 {
            return Recommendation {
                column: None,
                score: evaluate(state),
            };
        }

        if let Some(outcome) = state.outcome() {
            // Deeper remaining ply means an earlier finish: reward faster
            // wins and punish faster losses so they order correctly upstream.
            let score = match outcome {
                GameOutcome::Winner(Player::White) => WIN_SCORE + ply as f64,
                GameOutcome::Winner(Player::Black) => -WIN_SCORE - ply as f64,
                GameOutcome::Draw => 0.0,
            };
            return Recommendation {
                column: None,
                score,
            };
        }

        let maximizing = state.side_to_move() == Player::White;
        let mut best_column = None;
        let mut best_score = if maximizing {
            -WIN_SCORE - ply as f64
        } else {
            WIN_SCORE + ply as f64
        };

        for column in state.legal_moves() {
            let mut child = state.clone();
            child.apply_move(column).unwrap();
            let reply = self.search(&child, ply - 1);

            // Strict comparison keeps the lowest column on ties.
            let improves = if maximizing {
                reply.score > best_score
            } else {
                reply.score < best_score
            };
            if improves {
                best_column = Some(column);
                best_score = reply.score;
            }
        }

        if best_column.is_none() {
            best_column = self.random_move(state);
        }

        Recommendation {
            column: best_column,
            score: best_score,
        }
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}
