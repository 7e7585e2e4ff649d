use crate::error::{BoardError, MoveError, MAX_SIZE, MIN_SIZE};

use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    White,
    Black,
}

/// Counts of the 8-neighborhood around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborCounts {
    pub whites: usize,
    pub blacks: usize,
    pub empties: usize,
}

/// The playing grid. Row 0 is the bottom; pieces dropped into a column
/// settle at the lowest empty row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board, validating the dimensions.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, BoardError> {
        if rows < MIN_SIZE || cols < MIN_SIZE {
            return Err(BoardError::BoardTooSmall { rows, cols });
        }
        if rows > MAX_SIZE || cols > MAX_SIZE {
            return Err(BoardError::BoardTooLarge { rows, cols });
        }
        if win_length > rows || win_length > cols {
            return Err(BoardError::WinSequenceTooLong {
                win_length,
                rows,
                cols,
            });
        }
        if win_length < 2 {
            return Err(BoardError::WinSequenceTooShort(win_length));
        }

        Ok(Board {
            rows,
            cols,
            win_length,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Get the cell at a specific position. Row 0 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Clear every cell, keeping the dimensions.
    pub(super) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if a column can still accept a piece.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < self.cols && self.get(self.rows - 1, col) == Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::ColumnOutOfRange {
                column: col,
                cols: self.cols,
            });
        }

        for row in 0..self.rows {
            if self.get(row, col) == Cell::Empty {
                self.set(row, col, cell);
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Remove the piece at (row, col). Used when a move is taken back.
    pub(super) fn lift_piece(&mut self, row: usize, col: usize) {
        debug_assert_ne!(self.get(row, col), Cell::Empty);
        self.set(row, col, Cell::Empty);
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_column_open(col))
    }

    /// Count the occupied neighbors around a cell, clipped at the edges.
    pub fn neighbor_counts(&self, row: usize, col: usize) -> NeighborCounts {
        let mut counts = NeighborCounts::default();

        for r in row.saturating_sub(1)..=(row + 1).min(self.rows - 1) {
            for c in col.saturating_sub(1)..=(col + 1).min(self.cols - 1) {
                if r == row && c == col {
                    continue;
                }
                match self.get(r, c) {
                    Cell::White => counts.whites += 1,
                    Cell::Black => counts.blacks += 1,
                    Cell::Empty => counts.empties += 1,
                }
            }
        }

        counts
    }

    /// Test one window of `win_length` cells starting at (row, col) and
    /// extending along (dr, dc): it matches when `side` occupies exactly
    /// `seq_len` cells, the opponent occupies none, and the side has enough
    /// turns left (`budget`) to fill the remaining empties.
    fn window_matches(
        &self,
        side: Player,
        seq_len: usize,
        budget: usize,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> bool {
        let own_cell = side.to_cell();
        let mut own = 0;
        let mut empty = 0;

        for i in 0..self.win_length as isize {
            let r = (row as isize + dr * i) as usize;
            let c = (col as isize + dc * i) as usize;
            match self.get(r, c) {
                cell if cell == own_cell => own += 1,
                Cell::Empty => empty += 1,
                // An opposing piece makes the window impossible to complete.
                _ => return false,
            }
        }

        own == seq_len && empty <= budget
    }

    /// Count windows along every row where `side` holds exactly `seq_len`
    /// cells of a completable `win_length` run. Overlapping windows count
    /// separately.
    pub fn count_in_rows(&self, side: Player, seq_len: usize, budget: usize) -> usize {
        debug_assert!(seq_len > 0 && seq_len <= self.win_length);
        let mut count = 0;

        for row in 0..self.rows {
            for col in 0..=self.cols - self.win_length {
                if self.window_matches(side, seq_len, budget, row, col, 0, 1) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Count completable windows along every column.
    pub fn count_in_cols(&self, side: Player, seq_len: usize, budget: usize) -> usize {
        debug_assert!(seq_len > 0 && seq_len <= self.win_length);
        let mut count = 0;

        for col in 0..self.cols {
            for row in 0..=self.rows - self.win_length {
                if self.window_matches(side, seq_len, budget, row, col, 1, 0) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Count completable windows along both diagonal families.
    pub fn count_in_diagonals(&self, side: Player, seq_len: usize, budget: usize) -> usize {
        debug_assert!(seq_len > 0 && seq_len <= self.win_length);
        let mut count = 0;

        // Rising diagonals: row increases with column.
        for row in 0..=self.rows - self.win_length {
            for col in 0..=self.cols - self.win_length {
                if self.window_matches(side, seq_len, budget, row, col, 1, 1) {
                    count += 1;
                }
            }
        }

        // Falling diagonals: row decreases as column increases.
        for row in self.win_length - 1..self.rows {
            for col in 0..=self.cols - self.win_length {
                if self.window_matches(side, seq_len, budget, row, col, -1, 1) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Count completable windows in every direction.
    pub fn count_sequences(&self, side: Player, seq_len: usize, budget: usize) -> usize {
        self.count_in_rows(side, seq_len, budget)
            + self.count_in_cols(side, seq_len, budget)
            + self.count_in_diagonals(side, seq_len, budget)
    }
}
