//! Move-selection policies.
//!
//! A policy only consumes the board's move generator; it never searches.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::config::SelectorConfig;
use crate::board::{Board, Color, Move};

/// Chooses one move for `color` from the board's legal moves.
pub trait MoveSelector {
    /// `None` when `color` has no legal move.
    fn select(&mut self, board: &Board, color: Color) -> Option<Move>;
}

/// Uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    #[must_use]
    pub fn new(config: &SelectorConfig) -> Self {
        RandomSelector { rng: config.rng() }
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, board: &Board, color: Color) -> Option<Move> {
        board.legal_moves(color).choose(&mut self.rng).copied()
    }
}

/// Greedy material policy.
///
/// Legal moves are shuffled, scored by the material balance (from the
/// mover's side) of the position each one leads to, and pushed into a
/// min-priority queue keyed on `-score`. The cheapest entry wins; ties go to
/// the earlier shuffle position, so equally scored moves are picked at random.
#[derive(Clone, Debug)]
pub struct MaterialSelector {
    rng: StdRng,
}

impl MaterialSelector {
    #[must_use]
    pub fn new(config: &SelectorConfig) -> Self {
        MaterialSelector { rng: config.rng() }
    }
}

impl MoveSelector for MaterialSelector {
    fn select(&mut self, board: &Board, color: Color) -> Option<Move> {
        let mut moves = board.legal_moves(color);
        moves.shuffle(&mut self.rng);

        let mut queue = BinaryHeap::with_capacity(moves.len());
        for (order, mv) in moves.iter().enumerate() {
            let mut next = board.clone();
            if !next.apply_move(mv.from, mv.to, color) {
                continue;
            }
            let cost = -next.material_for(color);
            queue.push(Reverse((cost, order)));
        }

        queue.pop().map(|Reverse((_, order))| moves[order])
    }
}
