//! Shape catalog and generator tests

use tui_blocks::core::{get_shape, GameState, PieceGenerator, PieceId};
use tui_blocks::types::{BlockColor, ShapeKind, BOARD_SIZE};

/// Catalog as 0/1 matrices, row by row.
fn matrix(kind: ShapeKind) -> Vec<Vec<u8>> {
    let shape = get_shape(kind);
    (0..shape.rows)
        .map(|r| {
            (0..shape.cols)
                .map(|c| shape.is_filled(r, c) as u8)
                .collect()
        })
        .collect()
}

#[test]
fn test_catalog_matrices() {
    assert_eq!(matrix(ShapeKind::Dot), vec![vec![1]]);
    assert_eq!(matrix(ShapeKind::DominoH), vec![vec![1, 1]]);
    assert_eq!(matrix(ShapeKind::DominoV), vec![vec![1], vec![1]]);
    assert_eq!(matrix(ShapeKind::TrominoH), vec![vec![1, 1, 1]]);
    assert_eq!(matrix(ShapeKind::TrominoV), vec![vec![1], vec![1], vec![1]]);
    assert_eq!(matrix(ShapeKind::Square), vec![vec![1, 1], vec![1, 1]]);
    assert_eq!(matrix(ShapeKind::T), vec![vec![1, 1, 1], vec![0, 1, 0]]);
    assert_eq!(matrix(ShapeKind::L), vec![vec![1, 0], vec![1, 0], vec![1, 1]]);
    assert_eq!(matrix(ShapeKind::Block), vec![vec![1, 1, 1]; 3]);
    assert_eq!(matrix(ShapeKind::Z), vec![vec![1, 1, 0], vec![0, 1, 1]]);
}

#[test]
fn test_every_shape_fits_the_board() {
    for kind in ShapeKind::ALL {
        let shape = get_shape(kind);
        assert!(shape.rows as usize <= BOARD_SIZE);
        assert!(shape.cols as usize <= BOARD_SIZE);
        assert!(shape.area() >= 1);
        for &(r, c) in shape.cells {
            assert!(r < shape.rows && c < shape.cols, "{:?}", kind);
        }
    }
}

#[test]
fn test_generator_ids_strictly_increase() {
    let mut gen = PieceGenerator::new(5);
    let mut last = PieceId(0);
    for _ in 0..100 {
        for piece in gen.triplet() {
            assert!(piece.id > last);
            last = piece.id;
            assert!(BlockColor::ALL.contains(&piece.color));
        }
    }
}

#[test]
fn test_generator_is_reproducible() {
    let mut a = PieceGenerator::new(4242);
    let mut b = PieceGenerator::new(4242);
    for _ in 0..20 {
        assert_eq!(a.triplet(), b.triplet());
    }
}

#[test]
fn test_refill_only_when_set_is_empty() {
    let mut state = GameState::new(11, 0);
    let ids: Vec<PieceId> = state.pieces().iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 3);

    // Three single placements in separate corners of an empty board never clear a line.
    let anchors = [(0, 0), (0, 4), (4, 0)];
    for (i, (&id, &(r, c))) in ids.iter().zip(anchors.iter()).enumerate() {
        let ev = state.place(id, r, c).unwrap();
        assert_eq!(ev.lines_cleared(), 0);
        if i < 2 {
            assert!(!ev.refilled);
            assert_eq!(state.pieces().len(), 2 - i);
        } else {
            assert!(ev.refilled);
            assert_eq!(state.pieces().len(), 3);
            assert!(state.pieces().iter().all(|p| p.id > id));
        }
    }
}
