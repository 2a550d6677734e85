//! Move ordering
//!
//! Each candidate is played on a copy and the resulting position scored from
//! the search's fixed perspective. Minimizing nodes negate the score, so the
//! move best for the side choosing at this node always comes first. Greedy,
//! so it only improves the average cutoff rate.

use crate::board::{Player, Pos, Position};
use crate::eval::evaluate;

/// One-ply scores for `moves`, in input order.
///
/// `moves` must be legal in `position`.
pub fn score_moves(
    position: &Position,
    moves: &[Pos],
    perspective: Player,
    maximizing: bool,
) -> Vec<(Pos, i32)> {
    moves
        .iter()
        .map(|&mov| {
            let child = position.play_legal(mov);
            let score = evaluate(&child, perspective);
            (mov, if maximizing { score } else { -score })
        })
        .collect()
}

/// Sort `moves` best-first for the node type. Ties keep their row-major
/// order; a single candidate is returned untouched without evaluation.
pub fn order_moves(
    position: &Position,
    moves: Vec<Pos>,
    perspective: Player,
    maximizing: bool,
) -> Vec<Pos> {
    if moves.len() <= 1 {
        return moves;
    }
    let mut scored = score_moves(position, &moves, perspective, maximizing);
    // Stable: equal scores stay in generation order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(mov, _)| mov).collect()
}
