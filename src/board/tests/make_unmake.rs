//! Apply/undo tests.

use crate::board::{Bitboard, Board, BoardBuilder, Cell, Color, InvalidMoveReason};
use rand::prelude::*;

#[test]
fn test_opening_move_d3() {
    let mut board = Board::initial();
    let flips = board.apply_move(Color::Black, Cell(2, 3)).unwrap();

    assert_eq!(flips, Cell(3, 3).bit());
    assert_eq!(board.stone_count(Color::Black), 4);
    assert_eq!(board.stone_count(Color::White), 1);
    assert_eq!(board.empty_count(), 59);
    assert_eq!(board.turn_count(), 1);
    assert_eq!(board.color_at(Cell(3, 3)), Some(Color::Black));
}

#[test]
fn test_undo_restores_exactly() {
    let mut board = Board::initial();
    let flips = board.apply_move(Color::Black, Cell(4, 5)).unwrap();
    board.undo_move(Color::Black, Cell(4, 5), flips);
    assert_eq!(board, Board::initial());
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut board = Board::initial();
    let err = board.apply_move(Color::Black, Cell(3, 3)).unwrap_err();
    assert_eq!(err.reason, InvalidMoveReason::Occupied);
    assert_eq!(err.cell, Cell(3, 3));
    assert_eq!(board, Board::initial());
}

#[test]
fn test_non_flipping_cell_rejected_without_change() {
    let mut board = Board::initial();
    let err = board.apply_move(Color::Black, Cell(0, 0)).unwrap_err();
    assert_eq!(err.reason, InvalidMoveReason::NoFlips);
    assert_eq!(board, Board::initial());
    assert_eq!(
        err.to_string(),
        "Invalid move A1: no stones would be flipped"
    );
}

#[test]
fn test_multi_direction_flip() {
    // Black on D4 surrounded by white on three sides, closed by black beyond.
    let board = BoardBuilder::new()
        .stone(Cell(3, 1), Color::Black)
        .stone(Cell(3, 2), Color::White)
        .stone(Cell(5, 3), Color::Black)
        .stone(Cell(4, 3), Color::White)
        .stone(Cell(5, 5), Color::Black)
        .stone(Cell(4, 4), Color::White)
        .build()
        .unwrap();

    let flips = board.flip_mask(Color::Black, Cell(3, 3));
    let expected: Bitboard = [Cell(3, 2), Cell(4, 3), Cell(4, 4)].into_iter().collect();
    assert_eq!(flips, expected);

    let after = board.after_move(Color::Black, Cell(3, 3)).unwrap();
    assert_eq!(after.stone_count(Color::Black), 7);
    assert_eq!(after.stone_count(Color::White), 0);
    // `after_move` leaves the source untouched.
    assert_eq!(board.stone_count(Color::White), 3);
}

#[test]
fn test_random_game_undo_chain() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut board = Board::initial();
    let mut color = Color::Black;
    let mut history = Vec::new();
    let mut snapshots = vec![board];

    while !board.is_terminal() {
        let moves: Vec<Cell> = board.legal_moves(color).iter().collect();
        if let Some(&cell) = moves.choose(&mut rng) {
            let flips = board.apply_move(color, cell).unwrap();
            history.push((color, cell, flips));
            snapshots.push(board);
        }
        color = color.opponent();
    }

    while let Some((color, cell, flips)) = history.pop() {
        snapshots.pop();
        board.undo_move(color, cell, flips);
        assert_eq!(Some(&board), snapshots.last());
    }
    assert_eq!(board, Board::initial());
}
