//! Move legality and brute-force move generation.
//!
//! Legality is a pure predicate over a board snapshot: [`Board::is_legal`]
//! screens the squares and the mover, then dispatches on the piece kind to
//! exactly one rule. The generator tries every destination for every piece
//! of the side and keeps what the predicate accepts.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Whether the piece on `from` may move to `to` on behalf of `mover`.
    ///
    /// Returns false for off-board squares, an empty start square, a start
    /// square holding the other side's piece, and null moves. Never mutates
    /// the board.
    pub fn is_legal(&self, from: Square, to: Square, mover: Color) -> bool {
        if !from.is_on_board() || !to.is_on_board() || from == to {
            return false;
        }
        let Some((color, piece)) = self.piece_at(from) else {
            return false;
        };
        if color != mover {
            return false;
        }

        match piece {
            Piece::Pawn => self.pawn_move_is_legal(from, to, mover),
            Piece::Knight => self.knight_move_is_legal(from, to, mover),
            Piece::Bishop => self.slider_move_is_legal(from, to, mover, SliderType::Bishop),
            Piece::Rook => self.slider_move_is_legal(from, to, mover, SliderType::Rook),
            Piece::Queen => self.slider_move_is_legal(from, to, mover, SliderType::Queen),
            Piece::King => self.king_move_is_legal(from, to, mover),
        }
    }

    #[inline]
    pub fn is_legal_move(&self, mv: &Move, mover: Color) -> bool {
        self.is_legal(mv.from, mv.to, mover)
    }

    /// Every legal move for `color`, in row-major order of start then end.
    ///
    /// Moves that leave the mover's own king attacked are included; there is
    /// no self-check filtering.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.pieces(color)
            .flat_map(move |(from, _)| {
                Square::all()
                    .filter(move |&to| self.is_legal(from, to, color))
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Legal moves of the single piece on `from`.
    pub fn legal_moves_from(&self, from: Square, color: Color) -> Vec<Move> {
        Square::all()
            .filter(|&to| self.is_legal(from, to, color))
            .map(|to| Move::new(from, to))
            .collect()
    }

    /// Short-circuiting form of `!legal_moves(color).is_empty()`.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|(from, _)| Square::all().any(|to| self.is_legal(from, to, color)))
    }
}
