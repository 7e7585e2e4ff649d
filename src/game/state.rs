use crate::error::{BoardError, MoveError};

use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// One accepted move. The log is append-only except for [`GameState::undo`],
/// which pops the tail; restoring moves in any other order would corrupt the
/// grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Player,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    side_to_move: Player,
    moves_played: usize,
    move_log: Vec<MoveRecord>,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a fresh game with the given dimensions and winning run length.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, BoardError> {
        Ok(GameState {
            board: Board::new(rows, cols, win_length)?,
            side_to_move: Player::White, // White starts
            moves_played: 0,
            move_log: Vec::new(),
            outcome: None,
        })
    }

    /// Reset to an empty board without changing the dimensions.
    pub fn reset(&mut self) {
        self.board.clear();
        self.side_to_move = Player::White;
        self.moves_played = 0;
        self.move_log.clear();
        self.outcome = None;
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn win_length(&self) -> usize {
        self.board.win_length()
    }

    /// Get the side to move next
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// All accepted moves, oldest first.
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Total moves left on the board, both sides combined.
    pub fn turns_remaining(&self) -> usize {
        self.rows() * self.cols() - self.moves_played
    }

    /// Turns remaining for one side: the side to move gets the ceiling half,
    /// the other side the floor half.
    pub fn turns_remaining_for(&self, side: Player) -> usize {
        let total = self.turns_remaining();
        if side == self.side_to_move {
            total.div_ceil(2)
        } else {
            total / 2
        }
    }

    /// Get list of legal columns, ascending. Empty exactly when the game is
    /// over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.cols())
            .filter(|&col| self.board.is_column_open(col))
            .collect()
    }

    /// Count completable `seq_len`-piece windows for a side, capped by how
    /// many turns that side has left to fill the gaps.
    pub fn count_sequences(&self, side: Player, seq_len: usize) -> usize {
        self.board
            .count_sequences(side, seq_len, self.turns_remaining_for(side))
    }

    /// Drop the current side's piece into a column. Returns the row where it
    /// landed. On failure the state is unchanged.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if column >= self.cols() {
            return Err(MoveError::ColumnOutOfRange {
                column,
                cols: self.cols(),
            });
        }

        if self.is_terminal() {
            return Err(MoveError::MoveAfterGameOver);
        }

        let side = self.side_to_move;
        let row = self.board.drop_piece(column, side.to_cell())?;

        self.move_log.push(MoveRecord {
            side,
            row,
            col: column,
        });
        self.moves_played += 1;
        self.side_to_move = side.other();
        self.outcome = self.compute_outcome(side);

        Ok(row)
    }

    /// Take back the last move played. Returns false when there is nothing
    /// to take back.
    pub fn undo(&mut self) -> bool {
        let Some(last) = self.move_log.pop() else {
            return false;
        };

        self.board.lift_piece(last.row, last.col);
        self.side_to_move = last.side;
        self.moves_played -= 1;
        // The position one ply back cannot be terminal: the undone move was
        // the one that ended the game, if any.
        self.outcome = None;

        true
    }

    /// Outcome after `side` just moved: a win if that side completed a full
    /// run, a draw once the board is full, ongoing otherwise.
    fn compute_outcome(&self, side: Player) -> Option<GameOutcome> {
        if self.count_sequences(side, self.win_length()) > 0 {
            Some(GameOutcome::Winner(side))
        } else if self.turns_remaining() == 0 {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}
