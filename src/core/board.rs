//! Board module - manages the grid of locked cells
//!
//! The board is a `height x width` grid where each cell is empty or holds the
//! kind of the piece that locked there. Uses flat row-major storage.
//! Coordinates: (x, y) with x growing right and y growing down. Rows above
//! the top (`y < 0`) are treated as permanently unoccupied so pieces may
//! spawn partially off-screen.

use crate::core::config::{validate_dimensions, ConfigError};
use crate::types::{Cell, ShapeKind};

/// The game board - fixed dimensions, flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Dimensions are immutable afterwards; out-of-range dimensions are the
    /// one construction-time hard failure.
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// The sole collision predicate.
    ///
    /// True when (x, y) is out of horizontal bounds, at or below the bottom,
    /// or holds a locked cell. False for any in-range x above the top
    /// (`y < 0`), so freshly spawned pieces may overhang the visible grid.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Mark the given cells as locked with `kind`.
    ///
    /// Cells outside the grid are skipped; the caller decides what an
    /// off-top cell means (see `Engine::lock_active`).
    pub fn lock(&mut self, cells: &[(i8, i8)], kind: ShapeKind) {
        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let start = y * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, inserting fresh empty rows at the top.
    ///
    /// All simultaneously-full rows are processed in one call; the relative
    /// order of surviving rows is preserved. Uses a two-pointer compaction
    /// with `copy_within`, no allocation. Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height as usize;

        // Scan from bottom to top, sliding kept rows down over cleared ones.
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
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

        // Blank the rows that opened up at the top.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
