pub mod board;
pub mod engine;

pub use board::{Board, Color, Move, MoveError, Outcome, Piece, Square};
pub use engine::{Game, MaterialSelector, MoveSelector, RandomSelector};
