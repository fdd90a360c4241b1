//! Piece tests - spawning, rotation and kicks against a board

use cyber_tetris::core::{BagRandomizer, Board, Piece, PieceController, PieceMatrix};
use cyber_tetris::types::{PieceKind, RotateDir, BOARD_WIDTH};

#[test]
fn test_every_spawn_fits_an_empty_board() {
    for cols in [4u8, 7, 10, 13, 40] {
        let board = Board::new(cols, 20);
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind, cols);
            assert!(
                !board.collides(&piece, 0, 0),
                "{:?} collides at spawn on a {}-wide board",
                kind,
                cols
            );
        }
    }
}

#[test]
fn test_spawn_centres_bounding_square() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, BOARD_WIDTH);
        let size = piece.matrix.size() as i8;
        assert_eq!(piece.x, (BOARD_WIDTH as i8 - size) / 2);
        assert_eq!(piece.y, 1 - size);
    }
}

#[test]
fn test_every_orientation_has_four_cells() {
    for kind in PieceKind::ALL {
        let mut m = PieceMatrix::from_kind(kind);
        for _ in 0..4 {
            assert_eq!(m.occupied().count(), 4);
            m = m.rotated(RotateDir::Cw);
        }
    }
}

#[test]
fn test_i_rotation_is_vertical_bar() {
    let i = PieceMatrix::from_kind(PieceKind::I).rotated(RotateDir::Cw);
    let cells: Vec<_> = i.occupied().collect();
    assert_eq!(cells, vec![(0, 3), (1, 3), (2, 3), (3, 3)]);

    let i = PieceMatrix::from_kind(PieceKind::I).rotated(RotateDir::Ccw);
    let cells: Vec<_> = i.occupied().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_rotation_next_to_stack_kicks_left() {
    let mut board = Board::default();
    // .T.
    // TTT  at x=3, rows 8..=9
    let piece = Piece::spawn(PieceKind::T, BOARD_WIDTH).shifted(0, 10);
    assert_eq!((piece.x, piece.y), (3, 8));

    // Rotated CW in place the stem lands on (4, 10); block it.
    board.set(4, 10, Some(PieceKind::O));
    let in_place = piece.with_matrix(piece.matrix.rotated(RotateDir::Cw), piece.x);
    assert!(board.collides(&in_place, 0, 0));
    assert!(!board.collides(&piece, 0, 0));

    let mut controller = PieceController::new();
    controller.install(piece);
    assert!(controller.try_rotate(&board, RotateDir::Cw));
    assert_eq!(controller.active().unwrap().x, piece.x - 1);
}

#[test]
fn test_bag_windows_are_permutations() {
    let mut bag = BagRandomizer::seeded(2024);
    for _ in 0..50 {
        let mut window: Vec<_> = (&mut bag).take(7).collect();
        window.sort_by_key(|k| k.as_str());
        assert_eq!(window, PieceKind::ALL.to_vec());
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let a: Vec<_> = BagRandomizer::seeded(7).take(70).collect();
    let b: Vec<_> = BagRandomizer::seeded(7).take(70).collect();
    let c: Vec<_> = BagRandomizer::seeded(8).take(70).collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
