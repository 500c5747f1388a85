//! Check, checkmate, stalemate and king-capture tests.

use super::kings_only;
use crate::board::{Board, BoardBuilder, Color, Outcome, Piece, Square};

/// Black king boxed into the corner by its own pawns; Black cannot move.
fn boxed_black_king() -> BoardBuilder {
    BoardBuilder::new()
        .piece(Square(0, 7), Color::White, Piece::King)
        .piece(Square(7, 0), Color::Black, Piece::King)
        .piece(Square(7, 1), Color::Black, Piece::Pawn)
        .piece(Square(6, 0), Color::Black, Piece::Pawn)
        .piece(Square(6, 1), Color::Black, Piece::Pawn)
}

#[test]
fn test_start_position_is_quiet() {
    let board = Board::new();
    for color in Color::BOTH {
        assert!(!board.is_in_check(color));
        assert!(!board.is_checkmate(color));
        assert!(!board.is_stalemate(color));
        assert!(!board.is_king_captured(color));
    }
    assert_eq!(board.terminal_state(Color::White), None);
    assert_eq!(board.terminal_state(Color::Black), None);
}

#[test]
fn test_pawn_gives_check() {
    let board = BoardBuilder::new()
        .piece(Square(6, 4), Color::White, Piece::King)
        .piece(Square(5, 3), Color::Black, Piece::Pawn)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .build();
    assert!(board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn test_pawn_push_does_not_give_check() {
    let board = BoardBuilder::new()
        .piece(Square(6, 4), Color::White, Piece::King)
        .piece(Square(5, 4), Color::Black, Piece::Pawn)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .build();
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn test_blocked_attacker_does_not_give_check() {
    let board = kings_only()
        .piece(Square(3, 4), Color::Black, Piece::Rook)
        .piece(Square(5, 4), Color::Black, Piece::Knight)
        .build();
    assert!(!board.is_in_check(Color::White));

    let board = kings_only()
        .piece(Square(3, 4), Color::Black, Piece::Rook)
        .build();
    assert!(board.is_in_check(Color::White));
}

#[test]
fn test_no_king_is_not_in_check() {
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::Black, Piece::Queen)
        .build();
    assert!(!board.is_in_check(Color::White));
    assert!(board.is_king_captured(Color::White));
}

#[test]
fn test_no_moves_without_check_is_both_mate_and_stalemate() {
    let board = boxed_black_king().build();
    assert!(board.legal_moves(Color::Black).is_empty());
    assert!(!board.is_in_check(Color::Black));
    assert!(board.is_checkmate(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    // checkmate is tested first
    assert_eq!(
        board.terminal_state(Color::White),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn test_no_moves_in_check() {
    let board = boxed_black_king()
        .piece(Square(5, 1), Color::White, Piece::Knight)
        .build();
    assert!(board.is_in_check(Color::Black));
    assert!(board.is_checkmate(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert!(board.is_legal(Square(5, 1), Square(7, 0), Color::White));
}

#[test]
fn test_checkmate_outranks_king_capture() {
    // Black has no king and no move.
    let board = BoardBuilder::new()
        .piece(Square(7, 7), Color::White, Piece::King)
        .piece(Square(4, 0), Color::White, Piece::Pawn)
        .piece(Square(3, 0), Color::Black, Piece::Pawn)
        .piece(Square(2, 0), Color::Black, Piece::Pawn)
        .piece(Square(1, 0), Color::Black, Piece::Pawn)
        .build();
    assert!(board.is_king_captured(Color::Black));
    assert!(board.legal_moves(Color::Black).is_empty());
    assert_eq!(
        board.terminal_state(Color::White),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn test_king_capture_with_moves_left() {
    let mut board = kings_only()
        .piece(Square(1, 4), Color::White, Piece::Rook)
        .piece(Square(0, 1), Color::Black, Piece::Knight)
        .build();
    assert!(board.apply_move(Square(1, 4), Square(0, 4), Color::White));
    assert!(board.has_legal_move(Color::Black));
    assert_eq!(
        board.terminal_state(Color::White),
        Some(Outcome::KingCaptured {
            winner: Color::White
        })
    );
}

#[test]
fn test_fools_mate_is_check_but_not_mate() {
    let mut board = Board::new();
    assert!(board.apply_move(Square(6, 5), Square(5, 5), Color::White));
    assert!(board.apply_move(Square(1, 4), Square(3, 4), Color::Black));
    assert!(board.apply_move(Square(6, 6), Square(4, 6), Color::White));
    assert!(board.apply_move(Square(0, 3), Square(4, 7), Color::Black));

    assert!(board.is_in_check(Color::White));
    // Moves that leave the king attacked still count, so White can move.
    assert!(!board.is_checkmate(Color::White));
    assert_eq!(board.terminal_state(Color::Black), None);
}

#[test]
fn test_outcome_winner_and_display() {
    let mate = Outcome::Checkmate {
        winner: Color::White,
    };
    let capture = Outcome::KingCaptured {
        winner: Color::Black,
    };
    assert_eq!(mate.winner(), Some(Color::White));
    assert_eq!(capture.winner(), Some(Color::Black));
    assert_eq!(Outcome::Stalemate.winner(), None);
    assert_eq!(mate.to_string(), "Checkmate! White wins");
    assert_eq!(Outcome::Stalemate.to_string(), "Stalemate! The game is a draw");
    assert_eq!(capture.to_string(), "King captured! Black wins");
}
