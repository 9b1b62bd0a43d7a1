//! Board module - manages the game grid
//!
//! The board is a 12x20 grid where each cell is empty or holds a locked piece kind.
//! Uses a flat array for cache locality and zero-allocation row compaction.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..19 (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// A single lock can complete at most this many rows (a piece spans 4 rows).
pub const MAX_CLEARED_ROWS: usize = 4;

/// The game board - 12 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows, shifting the remaining rows down and inserting empty
    /// rows at the top. Relative order of surviving rows is preserved, and the
    /// row count is conserved. Returns the cleared row indices, bottom to top.
    ///
    /// Two-pointer compaction: handles multiple non-adjacent full rows in one
    /// pass without re-scanning shifted content.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                // Not full: move it down to the write position
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Empty rows enter at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        // Reverse to get bottom-to-top order
        cleared_rows.reverse();
        cleared_rows
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a 2D array (for render snapshots)
    pub fn write_cells(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(11, 0), Some(11));
        assert_eq!(Board::index(0, 1), Some(12));
        assert_eq!(Board::index(11, 19), Some(239));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(12, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

        // Verify internal layout
        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 12 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_write_cells_roundtrip() {
        let mut board = Board::new();
        board.set(3, 5, Some(PieceKind::O));
        board.set(7, 10, Some(PieceKind::L));

        let mut out = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_cells(&mut out);

        assert_eq!(out[5][3], Some(PieceKind::O));
        assert_eq!(out[10][7], Some(PieceKind::L));
        assert_eq!(out[0][0], None);
    }
}
