//! Turn-driving game controller.

use log::{debug, info};

use super::selector::MoveSelector;
use crate::board::{parse_side_to_move, Board, Color, FenError, Move, MoveError, Outcome, Square};

/// A game in progress: the board, whose turn it is, and the result once
/// there is one.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    ply: usize,
    outcome: Option<Outcome>,
    last_move: Option<Move>,
}

impl Game {
    /// Standard initial position, White to move.
    pub fn new() -> Self {
        Game::with_board(Board::new(), Color::White)
    }

    pub fn with_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            ply: 0,
            outcome: None,
            last_move: None,
        }
    }

    /// Load a FEN placement and optional side-to-move field.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let board = Board::from_fen(fen)?;
        let side_to_move = parse_side_to_move(fen)?;
        Ok(Game::with_board(board, side_to_move))
    }

    /// Play a move for the side to move.
    ///
    /// A refused move changes nothing, including whose turn it is. An accepted
    /// move hands the turn to the opponent and returns the outcome if the game
    /// just ended.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Option<Outcome>, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        let mover = self.side_to_move;
        let captured = match self.board.try_apply(from, to, mover) {
            Ok(captured) => captured,
            Err(err) => {
                debug!("rejected {mover} move {from}->{to}: {err}");
                return Err(err);
            }
        };

        self.ply += 1;
        self.last_move = Some(Move::new(from, to));
        match captured {
            Some((_, piece)) => debug!("ply {}: {mover} {from}->{to} takes {piece}", self.ply),
            None => debug!("ply {}: {mover} {from}->{to}", self.ply),
        }

        self.outcome = self.board.terminal_state(mover);
        if let Some(outcome) = self.outcome {
            info!("game over after {} plies: {outcome}", self.ply);
        }
        self.side_to_move = mover.opponent();
        Ok(self.outcome)
    }

    /// Let `selector` choose and play the move for the side to move.
    ///
    /// When the selector finds nothing to play, the side to move has no legal
    /// move and loses as checkmated.
    pub fn play_selected(
        &mut self,
        selector: &mut dyn MoveSelector,
    ) -> Result<Option<Outcome>, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        match selector.select(&self.board, self.side_to_move) {
            Some(mv) => self.play(mv.from, mv.to),
            None => {
                let outcome = Outcome::Checkmate {
                    winner: self.side_to_move.opponent(),
                };
                info!("{} has no legal move: {outcome}", self.side_to_move);
                self.outcome = Some(outcome);
                Ok(self.outcome)
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Number of moves applied so far.
    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
