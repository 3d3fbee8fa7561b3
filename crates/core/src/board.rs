//! Board module - manages the game grid
//!
//! The board is a fixed-size grid where each cell is either empty or holds the
//! color of the piece that was locked there. Storage is a flat row-major
//! vector; the dimensions never change after construction.
//!
//! Coordinates: (x, y) where x grows to the right and y grows downwards, row 0
//! being the top visible row. Rows above the board (y < 0) are always free,
//! which lets pieces spawn partially off the top.

use log::debug;

use crate::piece::Tetromino;
use crate::types::{Cell, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a single cell can hold part of a piece.
    ///
    /// Columns must be inside the board. Rows above the board are free, rows
    /// below it are not.
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        if x < 0 || x as usize >= self.width {
            return false;
        }
        if y < 0 {
            return true;
        }
        matches!(self.get(x, y), Some(None))
    }

    /// Whether every cell of the piece is free.
    pub fn can_place(&self, piece: &Tetromino) -> bool {
        piece.cells().all(|(x, y)| self.is_free(x, y))
    }

    /// Write the piece into the grid and clear completed rows.
    ///
    /// Cells above the board are dropped. Returns the number of rows cleared.
    pub fn lock(&mut self, piece: &Tetromino) -> usize {
        let color = piece.color();
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(color));
            }
        }
        let cleared = self.clear_lines();
        debug!(
            "locked {} at ({}, {}), cleared {} line(s)",
            piece.kind.as_str(),
            piece.x,
            piece.y,
            cleared
        );
        cleared
    }

    /// Check if a row is completely filled.
    ///
    /// A zero-width row holds nothing and is never full.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height || self.width == 0 {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, shifting the rows above down.
    ///
    /// Scans bottom to top. After removing a row the same index is examined
    /// again, since it now holds the row that used to be above it.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.width;
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                // Shift rows [0, row) down by one, then blank the top row.
                self.cells.copy_within(0..row * width, width);
                self.cells[..width].fill(None);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// One row of cells, left to right.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Rows from top to bottom; always `height` of them.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Fill a whole row, handy for setting up test positions.
    pub fn fill_row(&mut self, y: usize, color: Rgb) {
        if y < self.height {
            let start = y * self.width;
            self.cells[start..start + self.width].fill(Some(color));
        }
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
