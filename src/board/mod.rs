//! Board representation and rules.
//!
//! An 8x8 mailbox of optional `(Color, Piece)` pairs plus the rule set built
//! on it: a per-piece legality predicate, a brute-force legal move generator,
//! a move executor that knows about kingside castling, and terminal-state
//! queries.
//!
//! The rule set is deliberately partial: no en passant, no promotion, no
//! repetition or fifty-move draws, and castling only checks that the rook is
//! home and the path is empty.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves(Color::White).len(), 20);
//! assert!(board.apply_move(Square(6, 4), Square(4, 4), Color::White));
//! assert_eq!(board.symbol_at(Square(4, 4)), 'P');
//! ```

mod builder;
mod error;
mod eval;
mod fen;
mod make_move;
mod movegen;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use state::Board;
pub use status::Outcome;
pub use types::{Color, Move, Piece, Square};

pub(crate) use fen::parse_side_to_move;
