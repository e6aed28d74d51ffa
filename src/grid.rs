//! Grid storage for one transposition block

/// Row-major character matrix reused as scratch space for every block
/// of a message.
///
/// Cells are stored flat: the cell at `(row, col)` lives at index
/// `row * cols + col`. Every mutating operation assigns all
/// `rows * cols` cells, so no state from a previous block survives into
/// the next one.
pub(crate) struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Creates a blank grid. Callers validate that both dimensions are
    /// non-zero before constructing one.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![' '; rows * cols],
        }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    /// Number of characters one block holds (`rows * cols`).
    pub(crate) fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Flat row-major view of the cells.
    pub(crate) fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Fills the grid in row-major order from `block`, padding with
    /// `filler`.
    ///
    /// Two phases: the first `min(block.len(), capacity)` cells take
    /// the block's characters in row-major order, then every remaining
    /// cell takes `filler`. Characters beyond the capacity are ignored.
    /// Both phases together assign every cell exactly once.
    pub(crate) fn fill_row_major(&mut self, block: &[char], filler: char) {
        let count = block.len().min(self.cells.len());
        self.cells[..count].copy_from_slice(&block[..count]);
        self.cells[count..].fill(filler);
    }

    /// Appends the cells to `out` in column-major order (column 0
    /// top-to-bottom, then column 1, and so on).
    pub(crate) fn append_columns_to(&self, out: &mut String) {
        for col in 0..self.cols {
            for row in 0..self.rows {
                out.push(self.cells[row * self.cols + col]);
            }
        }
    }

    /// Writes `chunk` into the cells in column-major order.
    ///
    /// `chunk` must hold exactly `capacity` characters (callers check
    /// this before the call); every cell is assigned.
    pub(crate) fn write_by_columns(&mut self, chunk: &[char]) {
        let mut pos = 0;
        for col in 0..self.cols {
            for row in 0..self.rows {
                self.cells[row * self.cols + col] = chunk[pos];
                pos += 1;
            }
        }
    }

    /// Appends the cells to `out` in row-major order. The cells are
    /// stored row-major, so this is a sequential pass.
    pub(crate) fn append_rows_to(&self, out: &mut String) {
        out.extend(self.cells.iter());
    }
}
