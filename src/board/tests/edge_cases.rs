//! Edge case tests: passes, finished games, coordinates and construction.

use crate::board::{
    Bitboard, Board, BoardBuilder, BoardError, Cell, CellError, Color, Symmetry,
};

#[test]
fn test_forced_pass_detection() {
    let board = BoardBuilder::new()
        .stone(Cell(0, 0), Color::Black)
        .stone(Cell(0, 1), Color::White)
        .build()
        .unwrap();
    assert!(board.must_pass(Color::White));
    assert!(!board.must_pass(Color::Black));
    assert!(!board.is_terminal());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_wipeout_is_terminal() {
    let mut board = BoardBuilder::new()
        .stone(Cell(0, 0), Color::Black)
        .stone(Cell(0, 1), Color::White)
        .build()
        .unwrap();
    board.apply_move(Color::Black, Cell(0, 2)).unwrap();
    assert!(board.is_terminal());
    assert_eq!(board.stone_count(Color::White), 0);
    assert_eq!(board.winner(), Some(Color::Black));
    assert!(!board.must_pass(Color::White));
}

#[test]
fn test_full_board_draw() {
    let black: Bitboard = Cell::all().filter(|c| c.rank() < 4).collect();
    let board = Board::from_masks(black, !black).unwrap();
    assert_eq!(board.empty_count(), 0);
    assert_eq!(board.turn_count(), 60);
    assert!(board.is_terminal());
    assert_eq!(board.winner(), None);
    assert_eq!(board.disc_difference(Color::White), 0);
}

#[test]
fn test_empty_board_has_no_moves() {
    let board = Board::empty();
    assert!(board.is_terminal());
    assert_eq!(board.empty_count(), 64);
    assert_eq!(board.turn_count(), 0);
}

#[test]
fn test_from_masks_rejects_overlap() {
    let err = Board::from_masks(Cell(3, 3).bit(), Cell(3, 3).bit()).unwrap_err();
    assert_eq!(
        err,
        BoardError::Overlap {
            mask: Cell(3, 3).bit()
        }
    );
}

#[test]
fn test_builder_overwrites_cell() {
    let board = BoardBuilder::starting_position()
        .stone(Cell(3, 3), Color::Black)
        .clear(Cell(4, 4))
        .build()
        .unwrap();
    assert_eq!(board.color_at(Cell(3, 3)), Some(Color::Black));
    assert_eq!(board.color_at(Cell(4, 4)), None);
    assert_eq!(board.stone_count(Color::Black), 3);
    assert_eq!(board.stone_count(Color::White), 0);
}

#[test]
fn test_cell_notation() {
    assert_eq!("d3".parse::<Cell>(), Ok(Cell(2, 3)));
    assert_eq!("H8".parse::<Cell>(), Ok(Cell(7, 7)));
    assert_eq!(Cell(0, 0).to_string(), "A1");
    assert!(matches!(
        "I1".parse::<Cell>(),
        Err(CellError::InvalidNotation { .. })
    ));
    assert!("A9".parse::<Cell>().is_err());
    assert!("A10".parse::<Cell>().is_err());
    assert_eq!(
        Cell::try_from((8, 0)),
        Err(CellError::RankOutOfBounds { rank: 8 })
    );
    assert_eq!(Cell::new(2, 9), None);
}

#[test]
fn test_cell_index_round_trip() {
    for cell in Cell::all() {
        assert_eq!(Cell::from_index(cell.as_index()), cell);
        assert_eq!(cell.bit().popcount(), 1);
    }
}

#[test]
fn test_symmetries_preserve_initial_layout() {
    let initial = Board::initial();
    for sym in Symmetry::PRESERVING_INITIAL {
        assert_eq!(sym.apply_board(&initial), initial, "{sym:?}");
    }
    for sym in [Symmetry::Rotate90, Symmetry::FlipVertical] {
        assert_ne!(sym.apply_board(&initial), initial, "{sym:?}");
    }
}

#[test]
fn test_symmetry_inverse() {
    for sym in Symmetry::ALL {
        for cell in Cell::all() {
            assert_eq!(sym.inverse().apply(sym.apply(cell)), cell);
        }
    }
}

#[test]
fn test_symmetry_commutes_with_moves() {
    let board = Board::initial();
    for sym in Symmetry::ALL {
        let mapped = sym.apply_board(&board);
        let expected = sym.apply_mask(board.legal_moves(Color::Black));
        assert_eq!(mapped.legal_moves(Color::Black), expected, "{sym:?}");
    }
}
