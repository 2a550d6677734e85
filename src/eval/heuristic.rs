//! Heuristic evaluation function for Reversi positions
//!
//! This module provides the static evaluation used at the leaves of the
//! alpha-beta search and by move ordering. It evaluates positions based on:
//! - Square weights (corners good, corner-adjacent squares bad)
//! - Mobility, while the board still has room
//! - Pieces held on the edges
//! - Parity of the remaining empty squares in the endgame
//! - Material, weighted more heavily as the board fills

use crate::board::{Board, Cell, Player, Position};
use crate::rules::count_legal_moves;

use super::weights::{EvalWeights, POSITION_WEIGHTS};

/// The individual evaluation terms. `total()` is what the search sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalBreakdown {
    pub positional: i32,
    pub mobility: i32,
    pub edges: i32,
    pub parity: i32,
    pub material: i32,
}

impl EvalBreakdown {
    #[inline]
    pub fn total(&self) -> i32 {
        self.positional + self.mobility + self.edges + self.parity + self.material
    }
}

/// Evaluate the position from the perspective of the given player.
///
/// Returns a score where:
/// - Positive values indicate advantage for `perspective`
/// - Negative values indicate disadvantage for `perspective`
///
/// Pure and deterministic: the same position always gets the same score.
#[must_use]
pub fn evaluate(position: &Position, perspective: Player) -> i32 {
    evaluate_breakdown(position, perspective).total()
}

/// Evaluate and return every term separately.
#[must_use]
pub fn evaluate_breakdown(position: &Position, perspective: Player) -> EvalBreakdown {
    let board = position.board();
    let total = board.piece_count();
    let (positional, edges) = square_scores(board, perspective);

    EvalBreakdown {
        positional,
        mobility: mobility_score(board, perspective, total),
        edges,
        parity: parity_score(position, perspective, total),
        material: material_score(board, perspective, total),
    }
}

/// Square weights and edge occupancy in one pass over the board.
fn square_scores(board: &Board, perspective: Player) -> (i32, i32) {
    let own = Cell::from(perspective);
    let opp = Cell::from(perspective.opponent());
    let mut positional = 0;
    let mut edges = 0;

    for (pos, cell) in board.iter() {
        let sign = if cell == own {
            1
        } else if cell == opp {
            -1
        } else {
            continue;
        };
        positional += sign * POSITION_WEIGHTS[pos.to_index()];
        if pos.is_edge() {
            edges += sign * EvalWeights::EDGE;
        }
    }
    (positional, edges)
}

/// Mobility difference plus the blocked-opponent and dominance bonuses.
/// Zero once the board reaches the endgame.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn mobility_score(board: &Board, perspective: Player, total: u32) -> i32 {
    if total >= EvalWeights::ENDGAME_PIECES {
        return 0;
    }
    let mine = count_legal_moves(board, perspective) as i32;
    let theirs = count_legal_moves(board, perspective.opponent()) as i32;

    let mut score = (mine - theirs) * EvalWeights::MOBILITY;
    if theirs == 0 && mine > 0 {
        score += EvalWeights::OPPONENT_BLOCKED;
    }
    if mine > 2 * theirs {
        score += EvalWeights::MOBILITY_DOMINANCE;
    }
    score
}

/// With an odd number of empties left, whoever is on turn gets the last move.
fn parity_score(position: &Position, perspective: Player, total: u32) -> i32 {
    if total < EvalWeights::ENDGAME_PIECES || position.board().empty_count() % 2 == 0 {
        return 0;
    }
    if position.side_to_move() == perspective {
        EvalWeights::PARITY
    } else {
        -EvalWeights::PARITY
    }
}

#[allow(clippy::cast_possible_wrap)]
fn material_score(board: &Board, perspective: Player, total: u32) -> i32 {
    let diff = board.count(perspective) as i32 - board.count(perspective.opponent()) as i32;
    if total >= EvalWeights::ENDGAME_PIECES {
        diff * EvalWeights::MATERIAL_LATE
    } else if total >= EvalWeights::MID_MATERIAL_PIECES {
        diff * EvalWeights::MATERIAL_MID
    } else {
        diff / EvalWeights::MATERIAL_EARLY_DIVISOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, TOTAL_CELLS};

    /// Row-major fill: `black` X pieces, then `white` O pieces, rest empty.
    fn filled(black: usize, white: usize, side: Player) -> Position {
        assert!(black + white <= TOTAL_CELLS);
        let mut board = Board::new();
        for idx in 0..black {
            board.set(Pos::from_index(idx), Cell::Black);
        }
        for idx in black..black + white {
            board.set(Pos::from_index(idx), Cell::White);
        }
        Position::from_board(board, side)
    }

    #[test]
    fn test_evaluate_initial_is_balanced() {
        let position = Position::new();
        assert_eq!(evaluate(&position, Player::Black), 0);
        assert_eq!(evaluate(&position, Player::White), 0);
    }

    #[test]
    fn test_evaluate_breakdown_exact() {
        let position = Position::from_layout(
            "
            X.......
            .O......
            ........
            ........
            ........
            ........
            ........
            ........
            ",
            Player::Black,
        )
        .unwrap();

        let black = evaluate_breakdown(&position, Player::Black);
        assert_eq!(black.positional, 100 + 50);
        // One move against none: 3 + blocked bonus + dominance bonus
        assert_eq!(black.mobility, 3 + 50 + 20);
        assert_eq!(black.edges, 5);
        assert_eq!(black.parity, 0);
        assert_eq!(black.material, 0);
        assert_eq!(black.total(), 228);

        let white = evaluate_breakdown(&position, Player::White);
        assert_eq!(white.positional, -150);
        assert_eq!(white.mobility, -3);
        assert_eq!(white.edges, -5);
        assert_eq!(white.total(), -158);
    }

    #[test]
    fn test_corner_beats_x_square() {
        let corner = Position::from_layout(
            "
            X.......
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
            Player::White,
        )
        .unwrap();
        let x_square = Position::from_layout(
            "
            ........
            .X......
            ........
            ........
            ........
            ........
            ........
            ........
            ",
            Player::White,
        )
        .unwrap();
        assert!(evaluate(&corner, Player::Black) > evaluate(&x_square, Player::Black));
    }

    #[test]
    fn test_parity_only_in_endgame() {
        // 60 pieces, 4 empties: even
        let even = filled(30, 30, Player::Black);
        assert_eq!(evaluate_breakdown(&even, Player::Black).parity, 0);
        assert_eq!(evaluate_breakdown(&even, Player::White).parity, 0);

        // 61 pieces, 3 empties: odd, Black on turn
        let odd = filled(31, 30, Player::Black);
        assert_eq!(evaluate_breakdown(&odd, Player::Black).parity, 10);
        assert_eq!(evaluate_breakdown(&odd, Player::White).parity, -10);

        // 49 pieces, 15 empties: odd but before the endgame
        let early = filled(25, 24, Player::Black);
        assert_eq!(evaluate_breakdown(&early, Player::Black).parity, 0);
    }

    #[test]
    fn test_mobility_off_in_endgame() {
        let position = filled(30, 30, Player::Black);
        assert_eq!(evaluate_breakdown(&position, Player::Black).mobility, 0);
    }

    #[test]
    fn test_material_scaling_by_phase() {
        // Endgame: x5
        let late = filled(31, 30, Player::Black);
        assert_eq!(evaluate_breakdown(&late, Player::Black).material, 5);

        // 40 pieces: x2
        let mid = filled(25, 15, Player::Black);
        assert_eq!(evaluate_breakdown(&mid, Player::Black).material, 20);
        assert_eq!(evaluate_breakdown(&mid, Player::White).material, -20);

        // Before 40: halved, truncating toward zero
        let early = filled(20, 19, Player::Black);
        assert_eq!(evaluate_breakdown(&early, Player::Black).material, 0);
        let behind = filled(10, 13, Player::Black);
        assert_eq!(evaluate_breakdown(&behind, Player::Black).material, -1);
        assert_eq!(evaluate_breakdown(&behind, Player::White).material, 1);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let position = filled(18, 14, Player::White);
        let first = evaluate(&position, Player::White);
        for _ in 0..5 {
            assert_eq!(evaluate(&position, Player::White), first);
        }
    }
}
