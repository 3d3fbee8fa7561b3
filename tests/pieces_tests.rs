//! Piece and bag tests - templates, rotation and the 7-bag

use std::collections::HashSet;

use term_tetris::core::{Bag, Matrix, Tetromino};
use term_tetris::types::{PieceKind, Rgb, SPAWN_X, SPAWN_Y};

#[test]
fn test_every_template_has_four_cells() {
    for kind in PieceKind::ALL {
        let matrix = Matrix::template(kind);
        assert_eq!(matrix.filled().count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_template_sizes() {
    assert_eq!(Matrix::template(PieceKind::I).size(), 4);
    assert_eq!(Matrix::template(PieceKind::O).size(), 2);
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(Matrix::template(kind).size(), 3, "{:?}", kind);
    }
}

#[test]
fn test_four_rotations_restore_matrix() {
    for kind in PieceKind::ALL {
        for direction in [1, -1] {
            let original = Matrix::template(kind);
            let mut m = original;
            for _ in 0..4 {
                m = m.rotated(direction);
            }
            assert_eq!(m, original, "{:?} direction {}", kind, direction);
        }
    }
}

#[test]
fn test_cw_then_ccw_is_identity() {
    for kind in PieceKind::ALL {
        let original = Matrix::template(kind);
        assert_eq!(original.rotated(1).rotated(-1), original, "{:?}", kind);
    }
}

#[test]
fn test_t_rotates_clockwise_to_point_right() {
    let m = Matrix::template(PieceKind::T).rotated(1);
    let cells: Vec<_> = m.filled().collect();
    assert_eq!(cells, vec![(1, 0), (1, 1), (2, 1), (1, 2)]);
}

#[test]
fn test_o_is_rotation_invariant() {
    let o = Matrix::template(PieceKind::O);
    assert_eq!(o.rotated(1), o);
    assert_eq!(o.rotated(-1), o);
}

#[test]
fn test_new_piece_spawns_at_origin() {
    let piece = Tetromino::new(PieceKind::L);
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(piece.matrix, Matrix::template(PieceKind::L));
}

#[test]
fn test_piece_cells_are_absolute() {
    let mut piece = Tetromino::new(PieceKind::I);
    piece.x = 2;
    piece.y = 5;
    let cells: Vec<_> = piece.cells().collect();
    assert_eq!(cells, vec![(2, 6), (3, 6), (4, 6), (5, 6)]);
}

#[test]
fn test_piece_colors() {
    let expected = [
        (PieceKind::I, "#60d7fb"),
        (PieceKind::O, "#f9df6d"),
        (PieceKind::T, "#c77dff"),
        (PieceKind::S, "#55efc4"),
        (PieceKind::Z, "#ff7675"),
        (PieceKind::J, "#74b9ff"),
        (PieceKind::L, "#fdcb6e"),
    ];
    for (kind, hex) in expected {
        assert_eq!(Some(kind.color()), Rgb::from_hex(hex), "{:?}", kind);
        assert_eq!(Tetromino::new(kind).color(), kind.color());
    }
}

#[test]
fn test_bag_yields_each_kind_once_per_seven() {
    for seed in 0..50 {
        let mut bag = Bag::new(seed);
        for round in 0..4 {
            let drawn: HashSet<_> = (0..7).map(|_| bag.next()).collect();
            assert_eq!(drawn.len(), 7, "seed {} round {}", seed, round);
        }
    }
}

#[test]
fn test_bag_is_deterministic_per_seed() {
    let mut a = Bag::new(99);
    let mut b = Bag::new(99);
    for _ in 0..21 {
        assert_eq!(a.next(), b.next());
    }
}

#[test]
fn test_bag_order_varies_with_seed() {
    let sequence = |seed| {
        let mut bag = Bag::new(seed);
        (0..14).map(|_| bag.next()).collect::<Vec<_>>()
    };
    let first = sequence(0);
    assert!((1..20).any(|seed| sequence(seed) != first));
}
