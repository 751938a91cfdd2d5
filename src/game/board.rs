use crate::error::{BoardError, MoveError};
use crate::ui::board_view::BoardView;

/// Smallest dimension that can still hold a line of four.
pub const MIN_DIMENSION: usize = 4;
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;

/// Length of a winning line.
const LINE: usize = 4;

/// Row/column steps for the four line directions: horizontal, vertical,
/// down-right diagonal, down-left diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

/// A `rows x columns` grid stored column-major: the cell at `(row, column)`
/// lives at `column * rows + row`. Row 0 is the top of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Both dimensions must be at least 4.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows < MIN_DIMENSION || columns < MIN_DIMENSION {
            return Err(BoardError::TooSmall { rows, columns });
        }
        Ok(Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.rows && col < self.columns,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.columns
        );
        col * self.rows + row
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Cells of one row, left to right.
    pub fn cells_in_row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.columns).map(move |col| self.get(row, col))
    }

    /// Check if a column is full. Gravity keeps columns contiguous, so the
    /// top cell decides.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column (0-based, already range-checked by the
    /// caller), returns the row where it landed.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col + 1));
        }

        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col + 1))?;
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Check whether `cell` has four or more in a line anywhere on the board.
    pub fn check_win(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(d_row, d_col)| self.has_line(cell, d_row, d_col))
    }

    /// Scan every start cell whose run of four in direction `(d_row, d_col)`
    /// stays on the board.
    fn has_line(&self, cell: Cell, d_row: isize, d_col: isize) -> bool {
        let col_starts = Self::start_range(self.columns, d_col);

        Self::start_range(self.rows, d_row).any(|row| {
            col_starts.clone().any(|col| {
                (0..LINE as isize).all(|step| {
                    let r = (row as isize + step * d_row) as usize;
                    let c = (col as isize + step * d_col) as usize;
                    self.get(r, c) == cell
                })
            })
        })
    }

    fn start_range(len: usize, step: isize) -> std::ops::Range<usize> {
        match step {
            0 => 0..len,
            s if s > 0 => 0..len + 1 - LINE,
            _ => LINE - 1..len,
        }
    }

    /// Clear every cell, keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// A lazy text view of the current grid. Nothing is formatted until the
    /// view is displayed, and it can be displayed any number of times.
    pub fn render(&self) -> BoardView<'_> {
        BoardView::new(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLUMNS],
        }
    }
}
