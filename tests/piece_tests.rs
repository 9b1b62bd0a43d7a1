//! Piece tests - shapes, rotation, spawning, collision

use blockfall::core::{canonical_shape, Board, Piece};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_canonical_dimensions() {
    let dims: Vec<(PieceKind, u8, u8)> = PieceKind::ALL
        .iter()
        .map(|&k| {
            let s = canonical_shape(k);
            (k, s.width(), s.height())
        })
        .collect();

    assert!(dims.contains(&(PieceKind::I, 4, 1)));
    assert!(dims.contains(&(PieceKind::O, 2, 2)));
    for &(kind, w, h) in &dims {
        match kind {
            PieceKind::I | PieceKind::O => {}
            _ => assert_eq!((w, h), (3, 2), "{:?}", kind),
        }
    }
}

#[test]
fn test_double_rotation_identity_for_symmetric_pieces() {
    for kind in [PieceKind::I, PieceKind::O] {
        let shape = canonical_shape(kind);
        assert_eq!(shape.rotated().rotated(), shape, "{:?}", kind);
    }
}

#[test]
fn test_double_rotation_differs_for_asymmetric_pieces() {
    // T, L, J have distinct 180-degree variants; four turns restore them.
    for kind in [PieceKind::T, PieceKind::L, PieceKind::J] {
        let shape = canonical_shape(kind);
        let twice = shape.rotated().rotated();
        assert_ne!(twice, shape, "{:?}", kind);
        assert_eq!(twice.rotated().rotated(), shape, "{:?}", kind);
    }
}

#[test]
fn test_four_rotations_identity_all_kinds() {
    for kind in PieceKind::ALL {
        let shape = canonical_shape(kind);
        assert_eq!(shape.rotated().rotated().rotated().rotated(), shape);
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in PieceKind::ALL {
        let mut shape = canonical_shape(kind);
        for _ in 0..4 {
            shape = shape.rotated();
            assert_eq!(shape.cells().count(), 4, "{:?}", kind);
        }
    }
}

#[test]
fn test_spawn_is_centered_on_top_row() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!(piece.y, 0);
        assert_eq!(
            piece.x,
            (BOARD_WIDTH as i8 - piece.shape.width() as i8) / 2,
            "{:?}",
            kind
        );
    }
}

#[test]
fn test_fresh_spawn_never_collides_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        assert!(!Piece::spawn(kind).collides(&board), "{:?}", kind);
    }
}

#[test]
fn test_collision_with_walls_and_floor() {
    let board = Board::new();
    let o = Piece::spawn(PieceKind::O);

    // Left wall
    assert!(Piece { x: -1, ..o }.collides(&board));
    // Right wall (O is 2 wide)
    assert!(Piece {
        x: BOARD_WIDTH as i8 - 1,
        ..o
    }
    .collides(&board));
    // Floor (O is 2 tall)
    assert!(Piece {
        y: BOARD_HEIGHT as i8 - 1,
        ..o
    }
    .collides(&board));
    // Flush against the bottom is fine
    assert!(!Piece {
        y: BOARD_HEIGHT as i8 - 2,
        ..o
    }
    .collides(&board));
}

#[test]
fn test_collision_with_locked_cells() {
    let mut board = Board::new();
    board.set(5, 1, Some(PieceKind::T));

    let o = Piece::spawn(PieceKind::O); // covers x 5..6, y 0..1
    assert!(o.collides(&board));
    assert!(!Piece { x: 7, ..o }.collides(&board));
}

#[test]
fn test_cells_above_board_do_not_collide_with_content() {
    let mut board = Board::new();
    board.set(5, 5, Some(PieceKind::T));

    // Straddling the top edge: the off-board half is ignored by content
    // checks as long as side bounds hold.
    let o = Piece {
        y: -1,
        ..Piece::spawn(PieceKind::O)
    };
    assert!(!o.collides(&board));

    // But walls still apply above the board.
    assert!(Piece { x: -1, y: -1, ..o }.collides(&board));
}

#[test]
fn test_translated_and_rotated_are_pure() {
    let piece = Piece::spawn(PieceKind::T);

    let moved = piece.translated(2, 3);
    assert_eq!((moved.x, moved.y), (piece.x + 2, piece.y + 3));
    assert_eq!(moved.shape, piece.shape);

    let turned = piece.rotated();
    assert_eq!((turned.x, turned.y), (piece.x, piece.y));
    assert_ne!(turned.shape, piece.shape);

    // Original untouched.
    assert_eq!(piece, Piece::spawn(PieceKind::T));
}
