use crate::game::{Cell, GameOutcome, GameState, Player};

/// Sentinel score for a decided game. Heuristic scores of ongoing positions
/// stay well inside this bound.
pub const WIN_SCORE: f64 = 10_000.0;

/// Score the current position. Positive favors White, negative favors Black.
///
/// Decided games return the `WIN_SCORE` sentinel (or 0 for a draw). Ongoing
/// positions combine, per side: centrality of each occupied cell, pressure
/// from its 8-neighborhood, a tempo multiplier for whichever side has more
/// turns left, and a cubic bonus for partial runs that can still be
/// completed.
pub fn evaluate(state: &GameState) -> f64 {
    match state.outcome() {
        Some(GameOutcome::Winner(Player::White)) => return WIN_SCORE,
        Some(GameOutcome::Winner(Player::Black)) => return -WIN_SCORE,
        Some(GameOutcome::Draw) => return 0.0,
        None => {}
    }

    let board = state.board();
    let rows = state.rows();
    let cols = state.cols();

    let mut white_points = 0.0;
    let mut black_points = 0.0;

    for r in 0..rows {
        for c in 0..cols {
            let cell = board.get(r, c);
            if cell == Cell::Empty {
                continue;
            }

            // Centrality: distance from the nearer edge on each axis. The
            // boundary is inclusive so the exact center of an odd axis
            // scores its own index, not the mirrored distance.
            let mut points = if r <= rows / 2 { r } else { rows - r } as f64;
            points += if c <= cols / 2 { c } else { cols - c } as f64;

            let neighbors = board.neighbor_counts(r, c);
            match cell {
                Cell::White => {
                    white_points +=
                        points + neighbors.whites as f64 - neighbors.blacks as f64;
                }
                Cell::Black => {
                    black_points +=
                        points + neighbors.blacks as f64 - neighbors.whites as f64;
                }
                Cell::Empty => unreachable!(),
            }
        }
    }

    // Tempo: the side with more turns left gets a boost that grows as the
    // board fills up. At parity the side to move gets a third of it.
    let remaining_white = state.turns_remaining_for(Player::White);
    let remaining_black = state.turns_remaining_for(Player::Black);
    let advantage = 1.0 / state.turns_remaining() as f64;

    if remaining_black > remaining_white {
        black_points *= 1.0 + advantage;
    } else if remaining_white > remaining_black {
        white_points *= 1.0 + advantage;
    } else if state.side_to_move() == Player::White {
        white_points *= 1.0 + advantage / 3.0;
    } else {
        black_points *= 1.0 + advantage / 3.0;
    }

    // Longer completable partial runs dominate through the cubic weighting.
    for seq_len in (2..state.win_length()).rev() {
        white_points += (state.count_sequences(Player::White, seq_len) as f64).powi(3);
        black_points += (state.count_sequences(Player::Black, seq_len) as f64).powi(3);
    }

    white_points - black_points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_balanced() {
        let state = GameState::new(6, 7, 4).unwrap();
        assert_eq!(evaluate(&state), 0.0);
    }

    #[test]
    fn center_beats_edge() {
        let mut center = GameState::new(6, 7, 4).unwrap();
        center.apply_move(3).unwrap();

        let mut edge = GameState::new(6, 7, 4).unwrap();
        edge.apply_move(0).unwrap();

        let center_score = evaluate(&center);
        let edge_score = evaluate(&edge);
        assert!(
            center_score > edge_score,
            "center ({center_score}) should beat edge ({edge_score})"
        );
    }

    #[test]
    fn hand_computed_center_piece_on_odd_axis() {
        // 6x7: a lone White piece at (0, 3). The center of the seven-wide
        // axis scores its own index 3, not the mirrored 7 - 3 = 4; no
        // neighbors, no completable pairs, and the tempo boost goes to
        // Black's zero points.
        let mut state = GameState::new(6, 7, 4).unwrap();
        state.apply_move(3).unwrap();
        assert_eq!(evaluate(&state), 3.0);
    }

    #[test]
    fn hand_computed_position_without_runs() {
        // 4x4: White (0,1), Black (0,2). White gets centrality 1 minus one
        // opposing neighbor = 0; Black gets centrality 2 minus one = 1. The
        // shared row window is blocked for both sides, so no run bonus.
        let mut state = GameState::new(4, 4, 4).unwrap();
        state.apply_move(1).unwrap();
        state.apply_move(2).unwrap();
        assert_eq!(evaluate(&state), -1.0);
    }

    #[test]
    fn hand_computed_position_with_partial_run() {
        // 4x4: White (0,1) and (1,1), Black (0,2). White base points are 3,
        // plus one completable column pair (count 1 cubed = 1). Black's lone
        // piece nets 0 after its two White neighbors, so the tempo boost for
        // Black's extra turn multiplies zero.
        let mut state = GameState::new(4, 4, 4).unwrap();
        state.apply_move(1).unwrap();
        state.apply_move(2).unwrap();
        state.apply_move(1).unwrap();
        assert_eq!(evaluate(&state), 4.0);
    }

    #[test]
    fn terminal_positions_return_sentinels() {
        let mut state = GameState::new(4, 4, 4).unwrap();
        for _ in 0..3 {
            state.apply_move(0).unwrap();
            state.apply_move(1).unwrap();
        }
        state.apply_move(0).unwrap(); // White wins
        assert_eq!(evaluate(&state), WIN_SCORE);

        let mut state = GameState::new(4, 4, 4).unwrap();
        let fill = [0, 1, 2, 3, 0, 1, 2, 3, 1, 0, 3, 2, 1, 0, 3, 2];
        for col in fill {
            state.apply_move(col).unwrap();
        }
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert_eq!(evaluate(&state), 0.0);
    }

    #[test]
    fn black_win_is_negative_sentinel() {
        let mut state = GameState::new(4, 4, 4).unwrap();
        state.apply_move(3).unwrap(); // White
        for _ in 0..3 {
            state.apply_move(0).unwrap(); // Black
            state.apply_move(1).unwrap(); // White
        }
        state.apply_move(0).unwrap(); // Black's fourth in column 0
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Black)));
        assert_eq!(evaluate(&state), -WIN_SCORE);
    }

    #[test]
    fn heuristic_stays_inside_win_sentinel() {
        // A busy midgame position should never reach the sentinel magnitude.
        let mut state = GameState::new(6, 7, 4).unwrap();
        for col in [3, 3, 2, 4, 2, 2, 4, 4, 5, 1] {
            state.apply_move(col).unwrap();
        }
        assert!(!state.is_terminal());
        let score = evaluate(&state);
        assert!(
            score.abs() < WIN_SCORE,
            "heuristic score {score} escaped the sentinel bound"
        );
    }
}
