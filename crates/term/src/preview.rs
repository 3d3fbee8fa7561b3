//! Next-piece preview.

use crate::core::Matrix;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

/// Preview region width in terminal columns.
pub const PREVIEW_WIDTH: u16 = 12;
/// Preview region height in terminal rows.
pub const PREVIEW_HEIGHT: u16 = 6;

const PREVIEW_BG: Rgb = Rgb::new(20, 20, 28);

/// Draw `kind`'s spawn template centered in a [`PREVIEW_WIDTH`] x
/// [`PREVIEW_HEIGHT`] region at `(x, y)`.
///
/// Each piece cell is two columns wide, like the board.
pub fn draw_preview(fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
    let bg = CellStyle::new(PREVIEW_BG, PREVIEW_BG);
    fb.fill_rect(x, y, PREVIEW_WIDTH, PREVIEW_HEIGHT, ' ', bg);

    let matrix = Matrix::template(kind);
    let Some((min_x, min_y, max_x, max_y)) = bounds(&matrix) else {
        return;
    };
    let w = (max_x - min_x + 1) * 2;
    let h = max_y - min_y + 1;
    let ox = x + PREVIEW_WIDTH.saturating_sub(w) / 2;
    let oy = y + PREVIEW_HEIGHT.saturating_sub(h) / 2;

    let style = CellStyle::new(kind.color(), PREVIEW_BG).bold();
    for (cx, cy) in matrix.filled() {
        let px = ox + (cx as u16 - min_x) * 2;
        let py = oy + (cy as u16 - min_y);
        fb.fill_rect(px, py, 2, 1, '█', style);
    }
}

/// Bounding box of the filled cells: `(min_x, min_y, max_x, max_y)`.
fn bounds(matrix: &Matrix) -> Option<(u16, u16, u16, u16)> {
    matrix.filled().fold(None, |acc, (x, y)| {
        let (x, y) = (x as u16, y as u16);
        Some(match acc {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_cells(fb: &FrameBuffer) -> Vec<(u16, u16)> {
        let mut out = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.ch) == Some('█') {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn i_piece_is_centered_on_one_row() {
        let mut fb = FrameBuffer::new(PREVIEW_WIDTH, PREVIEW_HEIGHT);
        draw_preview(&mut fb, 0, 0, PieceKind::I);
        let cells = filled_cells(&fb);
        assert_eq!(cells.len(), 8);
        // 8 columns wide in a 12 column region, row (6 - 1) / 2.
        assert!(cells.iter().all(|&(_, y)| y == 2));
        assert_eq!(cells.first(), Some(&(2, 2)));
        assert_eq!(cells.last(), Some(&(9, 2)));
    }

    #[test]
    fn o_piece_is_centered() {
        let mut fb = FrameBuffer::new(PREVIEW_WIDTH, PREVIEW_HEIGHT);
        draw_preview(&mut fb, 0, 0, PieceKind::O);
        let cells = filled_cells(&fb);
        assert_eq!(cells, vec![(4, 2), (5, 2), (6, 2), (7, 2), (4, 3), (5, 3), (6, 3), (7, 3)]);
    }

    #[test]
    fn uses_piece_color() {
        let mut fb = FrameBuffer::new(20, 10);
        draw_preview(&mut fb, 3, 2, PieceKind::Z);
        let (x, y) = filled_cells(&fb)[0];
        assert_eq!(fb.get(x, y).unwrap().style.fg, PieceKind::Z.color());
        assert!(x >= 3 && y >= 2);
    }
}
