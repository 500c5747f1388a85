//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece legality rules and move generation
//! - `make_move.rs` - Move execution, including the castling rook hop
//! - `status.rs` - Check, checkmate, stalemate and king capture
//! - `edge_cases.rs` - Rule gaps that are kept on purpose
//! - `proptest.rs` - Property-based tests

mod make_move;
mod status;

use crate::board::{Board, BoardBuilder, Color, Piece, Square};

/// Both kings on their home squares and nothing else.
pub(super) fn kings_only() -> BoardBuilder {
    BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 4), Color::Black, Piece::King)
}

/// Starting position with the squares between White's king and kingside rook
/// emptied.
pub(super) fn white_kingside_open() -> Board {
    BoardBuilder::starting_position()
        .clear(Square(7, 5))
        .clear(Square(7, 6))
        .build()
}
