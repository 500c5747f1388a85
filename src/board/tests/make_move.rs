//! Move execution tests.

use super::{kings_only, white_kingside_open};
use crate::board::{Board, BoardBuilder, Color, Move, MoveError, Piece, Square};

#[test]
fn test_double_pawn_push_from_start() {
    let mut board = Board::new();
    assert!(board.apply_move(Square(6, 4), Square(4, 4), Color::White));
    assert_eq!(board.symbol_at(Square(4, 4)), 'P');
    assert_eq!(board.symbol_at(Square(6, 4)), ' ');
    assert_eq!(board.piece_count(), 32);
}

#[test]
fn test_illegal_move_leaves_board_unchanged() {
    let mut board = Board::new();
    let before = board.clone();
    assert!(!board.apply_move(Square(6, 4), Square(3, 4), Color::White));
    assert_eq!(board, before);

    assert_eq!(
        board.try_apply(Square(6, 4), Square(3, 4), Color::White),
        Err(MoveError::IllegalMove {
            mv: Move::new(Square(6, 4), Square(3, 4))
        })
    );
    assert_eq!(board, before);
}

#[test]
fn test_refusals_are_classified() {
    let mut board = Board::new();
    assert_eq!(
        board.try_apply(Square(4, 4), Square(3, 4), Color::White),
        Err(MoveError::EmptySquare {
            square: Square(4, 4)
        })
    );
    assert_eq!(
        board.try_apply(Square(1, 4), Square(2, 4), Color::White),
        Err(MoveError::NotYourPiece {
            square: Square(1, 4)
        })
    );
    assert_eq!(
        board.try_apply(Square(6, 4), Square(8, 4), Color::White),
        Err(MoveError::OutOfBounds {
            square: Square(8, 4)
        })
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_capture_replaces_target() {
    let mut board = kings_only()
        .piece(Square(4, 0), Color::White, Piece::Rook)
        .piece(Square(4, 6), Color::Black, Piece::Queen)
        .build();
    let captured = board.try_apply(Square(4, 0), Square(4, 6), Color::White);
    assert_eq!(captured, Ok(Some((Color::Black, Piece::Queen))));
    assert_eq!(board.piece_at(Square(4, 6)), Some((Color::White, Piece::Rook)));
    assert!(board.is_empty(Square(4, 0)));
    assert_eq!(board.piece_count(), 3);
}

#[test]
fn test_quiet_move_captures_nothing() {
    let mut board = Board::new();
    assert_eq!(
        board.try_apply(Square(7, 1), Square(5, 2), Color::White),
        Ok(None)
    );
    assert_eq!(board.symbol_at(Square(5, 2)), 'N');
}

#[test]
fn test_white_kingside_castling_moves_rook() {
    let mut board = white_kingside_open();
    assert!(board.apply_move(Square(7, 4), Square(7, 6), Color::White));
    assert_eq!(board.piece_at(Square(7, 6)), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(Square(7, 5)), Some((Color::White, Piece::Rook)));
    assert!(board.is_empty(Square(7, 4)));
    assert!(board.is_empty(Square(7, 7)));
    assert_eq!(board.piece_count(), 30);
}

#[test]
fn test_black_kingside_castling_moves_rook() {
    let mut board = BoardBuilder::starting_position()
        .clear(Square(0, 5))
        .clear(Square(0, 6))
        .build();
    assert!(board.apply_move(Square(0, 4), Square(0, 6), Color::Black));
    assert_eq!(board.symbol_at(Square(0, 6)), 'k');
    assert_eq!(board.symbol_at(Square(0, 5)), 'r');
    assert_eq!(board.symbol_at(Square(0, 4)), ' ');
    assert_eq!(board.symbol_at(Square(0, 7)), ' ');
}

#[test]
fn test_castling_allowed_through_attacked_squares() {
    // Black rook bears down on (7,5); castling is still accepted.
    let mut board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(7, 7), Color::White, Piece::Rook)
        .piece(Square(0, 5), Color::Black, Piece::Rook)
        .piece(Square(0, 0), Color::Black, Piece::King)
        .build();
    assert!(board.is_legal(Square(0, 5), Square(7, 5), Color::Black));
    assert!(board.apply_move(Square(7, 4), Square(7, 6), Color::White));
    assert_eq!(board.symbol_at(Square(7, 5)), 'R');
    assert_eq!(board.symbol_at(Square(7, 6)), 'K');
}

#[test]
fn test_castling_while_in_check() {
    let mut board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(7, 7), Color::White, Piece::Rook)
        .piece(Square(0, 4), Color::Black, Piece::Rook)
        .piece(Square(0, 0), Color::Black, Piece::King)
        .build();
    assert!(board.is_in_check(Color::White));
    assert!(board.apply_move(Square(7, 4), Square(7, 6), Color::White));
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn test_apply_never_changes_turn_argument() {
    // The board has no notion of turn: the same side may move twice.
    let mut board = Board::new();
    assert!(board.apply_move(Square(6, 4), Square(4, 4), Color::White));
    assert!(board.apply_move(Square(6, 3), Square(4, 3), Color::White));
    assert_eq!(board.symbol_at(Square(4, 3)), 'P');
}

#[test]
fn test_king_capture_empties_king_square() {
    let mut board = kings_only()
        .piece(Square(1, 4), Color::White, Piece::Rook)
        .build();
    assert_eq!(
        board.try_apply(Square(1, 4), Square(0, 4), Color::White),
        Ok(Some((Color::Black, Piece::King)))
    );
    assert_eq!(board.find_king(Color::Black), None);
}
