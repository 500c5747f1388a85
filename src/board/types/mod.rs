//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - (rank, file) board coordinate
//! - `Move` - a (from, to) pair

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
