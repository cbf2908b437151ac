use super::gravity;

pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_COLS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Display symbol used in text boards and prompts
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'X',
            Cell::Yellow => 'O',
        }
    }
}

/// A `rows x cols` grid of cells. Row 0 is the floor that pieces fall toward;
/// row `rows - 1` is the top of every column.
///
/// The shape is not fixed: a clockwise rotation swaps the dimensions, so every
/// query derives its bounds from the current shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Build a board from rows listed floor first. Values are player ids:
    /// 0 = empty, 1 = red, 2 = yellow. All rows must share one length.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut board = Board::new(rows.len(), cols);
        for (row, values) in rows.iter().enumerate() {
            assert_eq!(values.len(), cols, "row {row} has the wrong length");
            for (col, &value) in values.iter().enumerate() {
                board.cells[row * cols + col] = match value {
                    0 => Cell::Empty,
                    1 => Cell::Red,
                    2 => Cell::Yellow,
                    other => panic!("invalid cell value {other}"),
                };
            }
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Current shape as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Bounds-tolerant lookup used by scanners working with signed offsets
    pub fn try_get(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Set a cell. The caller has already validated the column and resolved
    /// the landing row; an out-of-range position is a bug and panics.
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            row < self.rows && col < self.cols,
            "place at ({row}, {col}) out of bounds for {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = cell;
    }

    /// A column accepts a piece iff it exists and its top cell is empty
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < self.cols && self.rows > 0 && self.get(self.rows - 1, col).is_empty()
    }

    /// All columns that accept a piece, ascending
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_valid_column(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_valid_column(col))
    }

    /// Number of non-empty cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Cells of one column, floor first
    pub fn column(&self, col: usize) -> Vec<Cell> {
        (0..self.rows).map(|row| self.get(row, col)).collect()
    }

    /// Overwrite one column, floor first
    pub fn set_column(&mut self, col: usize, values: &[Cell]) {
        assert_eq!(values.len(), self.rows, "column length must equal row count");
        for (row, &cell) in values.iter().enumerate() {
            self.place(row, col, cell);
        }
    }

    /// Resolve the landing row for `col` and place the piece there.
    /// Returns `None` when the column is out of range or full.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        let row = gravity::landing_row(self, col)?;
        self.place(row, col, cell);
        Some(row)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
