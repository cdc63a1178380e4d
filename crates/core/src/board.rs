//! Board module - manages the game grid
//!
//! The board is a 7x7 grid where each cell can be empty or filled with a color.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where both range 0..7, row 0 at the top.
//! Anchors are signed so callers can pass out-of-range candidates straight
//! from cursor math; those are rejected, never wrapped.

use arrayvec::ArrayVec;

use crate::pieces::{get_shape, Piece, Shape};
use crate::types::{BlockColor, Cell, ShapeKind, BOARD_SIZE};

/// Total number of cells on the board
const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Indices of completed rows and columns, each ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullLines {
    pub rows: ArrayVec<usize, BOARD_SIZE>,
    pub cols: ArrayVec<usize, BOARD_SIZE>,
}

impl FullLines {
    /// Rows plus columns. A row and column that intersect count separately.
    pub fn count(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The game board - 7 x 7 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return None;
        }
        Some(row as usize * BOARD_SIZE + col as usize)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill a cell with a color (convenience for tests and setup code)
    pub fn fill(&mut self, row: i8, col: i8, color: BlockColor) -> bool {
        self.set(row, col, Cell::filled(color))
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(cell) if !cell.occupied())
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(cell) if cell.occupied())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_SIZE {
            return false;
        }
        let start = row * BOARD_SIZE;
        self.cells[start..start + BOARD_SIZE]
            .iter()
            .all(|cell| cell.occupied())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= BOARD_SIZE {
            return false;
        }
        (0..BOARD_SIZE).all(|row| self.cells[row * BOARD_SIZE + col].occupied())
    }

    /// Check whether `shape` fits with its top-left corner at (row, col)
    ///
    /// Fails if the bounding box leaves the board or any filled cell of the
    /// shape lands on an occupied cell. Empty template cells may overlap
    /// occupied board cells.
    pub fn can_place(&self, shape: &Shape, row: i8, col: i8) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        if row as usize + shape.rows as usize > BOARD_SIZE
            || col as usize + shape.cols as usize > BOARD_SIZE
        {
            return false;
        }
        shape
            .cells
            .iter()
            .all(|&(dr, dc)| self.is_free(row + dr as i8, col + dc as i8))
    }

    /// Write a shape onto the board with the given color
    /// Returns true if successful, false (and no change) if the placement is invalid
    pub fn write_shape(&mut self, shape: &Shape, row: i8, col: i8, color: BlockColor) -> bool {
        if !self.can_place(shape, row, col) {
            return false;
        }
        for &(dr, dc) in shape.cells {
            self.set(row + dr as i8, col + dc as i8, Cell::filled(color));
        }
        true
    }

    /// Scan every row and column for completed lines
    pub fn full_lines(&self) -> FullLines {
        let mut lines = FullLines::default();
        for i in 0..BOARD_SIZE {
            if self.is_row_full(i) {
                lines.rows.push(i);
            }
            if self.is_col_full(i) {
                lines.cols.push(i);
            }
        }
        lines
    }

    /// Flag every cell of the given rows and columns as exploding
    /// Returns the number of distinct cells flagged
    pub fn mark_exploding(&mut self, lines: &FullLines) -> usize {
        let mut marked = 0;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            let (row, col) = (idx / BOARD_SIZE, idx % BOARD_SIZE);
            if lines.rows.contains(&row) || lines.cols.contains(&col) {
                if !cell.exploding {
                    cell.exploding = true;
                    marked += 1;
                }
            }
        }
        marked
    }

    /// Whether any cell is waiting to be cleared
    pub fn has_exploding(&self) -> bool {
        self.cells.iter().any(|cell| cell.exploding)
    }

    /// Empty every exploding cell
    /// Returns the number of cells cleared
    pub fn clear_exploding(&mut self) -> usize {
        let mut cleared = 0;
        for cell in &mut self.cells {
            if cell.exploding {
                *cell = Cell::EMPTY;
                cleared += 1;
            }
        }
        cleared
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.occupied()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a row-major 2D grid
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_SIZE]; BOARD_SIZE]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * BOARD_SIZE;
            out_row.copy_from_slice(&self.cells[start..start + BOARD_SIZE]);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Check whether a catalog shape fits on `board` anchored at (row, col)
///
/// Pure and cheap enough to call on every cursor move.
pub fn is_valid_placement(board: &Board, kind: ShapeKind, row: i8, col: i8) -> bool {
    board.can_place(&get_shape(kind), row, col)
}

/// Check whether no piece in `pieces` fits anywhere on `board`
///
/// Exhaustive over every piece and every anchor in [0, SIZE) x [0, SIZE).
pub fn is_stuck(board: &Board, pieces: &[Piece]) -> bool {
    !pieces.iter().any(|piece| {
        let shape = piece.shape();
        (0..BOARD_SIZE as i8)
            .any(|row| (0..BOARD_SIZE as i8).any(|col| board.can_place(&shape, row, col)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceId;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 6), Some(6));
        assert_eq!(Board::index(1, 0), Some(7));
        assert_eq!(Board::index(6, 6), Some(48));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, 7), None);
        assert_eq!(Board::index(7, 0), None);
    }

    #[test]
    fn test_can_place_bounds() {
        let board = Board::new();
        let tromino = get_shape(ShapeKind::TrominoH);
        assert!(board.can_place(&tromino, 0, 0));
        assert!(board.can_place(&tromino, 6, 4));
        assert!(!board.can_place(&tromino, 6, 5));
        assert!(!board.can_place(&tromino, -1, 0));
        assert!(!board.can_place(&tromino, 0, -1));
    }

    #[test]
    fn test_can_place_ignores_template_holes() {
        let mut board = Board::new();
        // T-shape leaves (1,0) and (1,2) empty.
        board.fill(1, 0, BlockColor::Pink);
        board.fill(1, 2, BlockColor::Pink);
        assert!(board.can_place(&get_shape(ShapeKind::T), 0, 0));

        board.fill(1, 1, BlockColor::Pink);
        assert!(!board.can_place(&get_shape(ShapeKind::T), 0, 0));
    }

    #[test]
    fn test_write_shape_rejects_without_mutation() {
        let mut board = Board::new();
        board.fill(0, 1, BlockColor::Lime);
        let before = board.clone();
        assert!(!board.write_shape(&get_shape(ShapeKind::DominoH), 0, 0, BlockColor::Cyan));
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_lines_intersection_counts_twice() {
        let mut board = Board::new();
        for i in 0..BOARD_SIZE as i8 {
            board.fill(3, i, BlockColor::Orange);
            board.fill(i, 4, BlockColor::Orange);
        }
        let lines = board.full_lines();
        assert_eq!(lines.rows.as_slice(), &[3]);
        assert_eq!(lines.cols.as_slice(), &[4]);
        assert_eq!(lines.count(), 2);

        // The shared cell is flagged once.
        assert_eq!(board.mark_exploding(&lines), 13);
        assert_eq!(board.clear_exploding(), 13);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_exploding_cells_stay_occupied_until_cleared() {
        let mut board = Board::new();
        for c in 0..BOARD_SIZE as i8 {
            board.fill(0, c, BlockColor::Purple);
        }
        let lines = board.full_lines();
        board.mark_exploding(&lines);
        assert!(board.has_exploding());
        assert!(board.is_occupied(0, 0));
        assert!(!board.can_place(&get_shape(ShapeKind::Dot), 0, 0));

        board.clear_exploding();
        assert!(!board.has_exploding());
        assert!(board.is_free(0, 0));
    }

    #[test]
    fn test_is_stuck_with_single_hole() {
        let mut board = Board::new();
        for r in 0..BOARD_SIZE as i8 {
            for c in 0..BOARD_SIZE as i8 {
                if (r, c) != (3, 3) {
                    board.fill(r, c, BlockColor::Yellow);
                }
            }
        }
        let domino = Piece::new(PieceId(1), ShapeKind::DominoH, BlockColor::Pink);
        let dot = Piece::new(PieceId(2), ShapeKind::Dot, BlockColor::Pink);
        assert!(is_stuck(&board, &[domino]));
        assert!(!is_stuck(&board, &[domino, dot]));
    }
}
