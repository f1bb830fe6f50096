//! Read-only snapshot of engine state for the render boundary.
//!
//! The host renders from a `GameSnapshot` and never mutates engine state.

use crate::core::shape::ShapeOffsets;
use crate::types::{Cell, ShapeKind};

/// The active piece as absolute grid cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    /// Occupied cells in board coordinates; may include `y < 0` cells.
    pub cells: ShapeOffsets,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Locked cells, row-major (y * width + x).
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn empty(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            active: None,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }

    /// Locked cell at (x, y); empty for out-of-range coordinates.
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }
}
