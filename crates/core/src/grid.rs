//! Grid module - the locked-cell occupancy matrix
//!
//! The grid is 10x20 where each cell is either empty or filled.
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). The top boundary is permissive: rows above the grid
//! (y < 0) count as open space in collision queries.

use arrayvec::ArrayVec;

use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH};

use crate::piece::Piece;

/// Total number of cells on the grid
const GRID_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Number of rows, as usize for index work
const GRID_ROWS: usize = BOARD_HEIGHT as usize;

/// The game grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [false; GRID_SIZE],
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

    /// Get width of the grid
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the grid
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Collision query for a single cell.
    ///
    /// Occupied means: past the left/right walls, at or below the floor, or a
    /// filled in-bounds cell. Cells above the top edge (y < 0) report open, so
    /// the top boundary is permissive.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.cells[(y as usize) * (BOARD_WIDTH as usize) + (x as usize)]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_ROWS {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Lock a piece's filled cells into the grid.
    ///
    /// Callers must have verified the piece does not collide; cells that fall
    /// outside the grid (e.g. rows above the top edge) are skipped.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, true);
        }
    }

    /// Clear all full rows, inserting an empty row at the top for each.
    ///
    /// Net height is preserved. Returns the indices of the rows that were
    /// cleared, ordered bottom to top. Uses a two-pointer compaction with
    /// zero allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, GRID_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = GRID_ROWS;

        // Scan from bottom to top, compacting surviving rows downward.
        for read_y in (0..GRID_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Empty rows replace the cleared ones at the top.
        self.cells[..write_y * width].fill(false);

        cleared_rows
    }

    /// Count of filled cells on the grid
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        assert_eq!(rows.len(), GRID_ROWS);
        assert!(rows.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut cells = [false; GRID_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                cells[y * BOARD_WIDTH as usize + x] = cell;
            }
        }
        Self { cells }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
