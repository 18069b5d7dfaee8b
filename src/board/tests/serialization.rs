//! Serialization tests, only built with the `serde` feature.

use crate::board::{Board, Cell, Color, Phase, TerminalScoring};

#[test]
fn test_board_json_round_trip() {
    let mut board = Board::initial();
    board.apply_move(Color::Black, Cell(2, 3)).unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_value_types_serialize_by_name() {
    assert_eq!(serde_json::to_string(&Color::White).unwrap(), "\"White\"");
    assert_eq!(serde_json::to_string(&Phase::Endgame).unwrap(), "\"Endgame\"");
    assert_eq!(
        serde_json::to_string(&TerminalScoring::LossSentinel).unwrap(),
        "\"LossSentinel\""
    );
    assert_eq!(serde_json::to_string(&Cell(2, 3)).unwrap(), "[2,3]");
}
