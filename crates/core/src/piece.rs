//! Piece module - tetromino shapes and matrix rotation
//!
//! Every kind is defined inside a square bounding box (I 4x4, O 2x2, the rest
//! 3x3) so that rotating the matrix about its own origin is lossless. There
//! are no per-rotation tables: rotation is an index transform on the matrix.

use crate::types::{PieceKind, Rgb, SPAWN_X, SPAWN_Y};

/// Largest template side length (the I piece).
pub const MAX_SIZE: usize = 4;

/// Square occupancy grid of side `size`; cells outside `size` stay empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    size: usize,
    cells: [[bool; MAX_SIZE]; MAX_SIZE],
}

impl Matrix {
    /// Build a matrix from rows of 0/1.
    ///
    /// Rows longer than [`MAX_SIZE`] are truncated, non-square input is padded
    /// with empty cells up to the number of rows.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len().min(MAX_SIZE);
        let mut cells = [[false; MAX_SIZE]; MAX_SIZE];
        for (y, row) in rows.iter().take(size).enumerate() {
            for (x, &v) in row.iter().take(size).enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self { size, cells }
    }

    /// Spawn template of a kind.
    pub fn template(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[
                &[0, 0, 0, 0],
                &[1, 1, 1, 1],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
            ]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell at column `x`, row `y` of the matrix is filled.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[y][x]
    }

    /// Rotated copy: `1` is clockwise, anything else counter-clockwise.
    pub fn rotated(&self, direction: i32) -> Self {
        let n = self.size;
        let mut cells = [[false; MAX_SIZE]; MAX_SIZE];
        for y in 0..n {
            for x in 0..n {
                let (nx, ny) = if direction == 1 {
                    (n - 1 - y, x)
                } else {
                    (y, n - 1 - x)
                };
                cells[ny][nx] = self.cells[y][x];
            }
        }
        Self { size: n, cells }
    }

    /// Filled cells as matrix-local (column, row), row-major.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size)
            .flat_map(move |y| (0..self.size).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.cells[y][x])
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub matrix: Matrix,
    /// Board column of the matrix origin.
    pub x: i32,
    /// Board row of the matrix origin.
    pub y: i32,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            matrix: Matrix::template(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Rotate in place: `1` clockwise, `-1` counter-clockwise.
    pub fn rotate(&mut self, direction: i32) {
        self.matrix = self.matrix.rotated(direction);
    }

    /// Absolute board coordinates of every filled cell, row-major.
    ///
    /// The iterator borrows the piece; call again to restart.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            piece: self,
            next: 0,
        }
    }
}

/// Iterator over the board cells covered by a [`Tetromino`].
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    piece: &'a Tetromino,
    /// Row-major index into the matrix of the next cell to inspect.
    next: usize,
}

impl Iterator for Cells<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.piece.matrix.size();
        while self.next < n * n {
            let (mx, my) = (self.next % n, self.next / n);
            self.next += 1;
            if self.piece.matrix.is_filled(mx, my) {
                return Some((self.piece.x + mx as i32, self.piece.y + my as i32));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tetromino_new() {
        let piece = Tetromino::new(PieceKind::T);
        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.size(), 3);
    }

    #[test]
    fn test_template_sizes() {
        assert_eq!(Matrix::template(PieceKind::I).size(), 4);
        assert_eq!(Matrix::template(PieceKind::O).size(), 2);
        for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
            assert_eq!(Matrix::template(kind).size(), 3);
        }
    }

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Matrix::template(kind).filled().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_cells_are_absolute_and_row_major() {
        let piece = Tetromino::new(PieceKind::T);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(4, 0), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_cells_restartable() {
        let piece = Tetromino::new(PieceKind::L);
        let first: Vec<_> = piece.cells().collect();
        let second: Vec<_> = piece.cells().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let mut piece = Tetromino::new(PieceKind::T);
        piece.rotate(1);
        let expected = Matrix::from_rows(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]]);
        assert_eq!(piece.matrix, expected);
    }

    #[test]
    fn test_rotate_t_counter_clockwise() {
        let mut piece = Tetromino::new(PieceKind::T);
        piece.rotate(-1);
        let expected = Matrix::from_rows(&[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]]);
        assert_eq!(piece.matrix, expected);
    }

    #[test]
    fn test_rotate_i_is_vertical() {
        let mut piece = Tetromino::new(PieceKind::I);
        piece.rotate(1);
        let cols: Vec<_> = piece.matrix.filled().map(|(x, _)| x).collect();
        assert_eq!(cols, vec![2, 2, 2, 2]);
    }

    #[test]
    fn test_rotate_o_is_identity() {
        let mut piece = Tetromino::new(PieceKind::O);
        let before = piece.matrix;
        piece.rotate(1);
        assert_eq!(piece.matrix, before);
    }

    #[test]
    fn test_rotate_back_and_forth_restores() {
        for kind in PieceKind::ALL {
            let mut piece = Tetromino::new(kind);
            let before = piece.matrix;
            piece.rotate(1);
            piece.rotate(-1);
            assert_eq!(piece.matrix, before, "{:?}", kind);
        }
    }
}
