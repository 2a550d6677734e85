//! Evaluation weights for Reversi
//!
//! These are fixed values, not tuning knobs: changing any of them changes
//! which move the engine picks.

use crate::board::{Board, TOTAL_CELLS};

/// Square weights, row-major. Corners are prized, the squares that give a
/// corner away are punished, edges are mildly positive.
#[rustfmt::skip]
pub const POSITION_WEIGHTS: [i32; TOTAL_CELLS] = [
    100, -20, 10,  5,  5, 10, -20, 100,
    -20, -50,  1,  1,  1,  1, -50, -20,
     10,   1,  5,  2,  2,  5,   1,  10,
      5,   1,  2,  1,  1,  2,   1,   5,
      5,   1,  2,  1,  1,  2,   1,   5,
     10,   1,  5,  2,  2,  5,   1,  10,
    -20, -50,  1,  1,  1,  1, -50, -20,
    100, -20, 10,  5,  5, 10, -20, 100,
];

/// Term weights and phase thresholds
pub struct EvalWeights;

impl EvalWeights {
    /// Per-move mobility difference
    pub const MOBILITY: i32 = 3;
    /// Opponent has no move while we do
    pub const OPPONENT_BLOCKED: i32 = 50;
    /// We have more than twice the opponent's moves
    pub const MOBILITY_DOMINANCE: i32 = 20;
    /// Per piece on an edge square
    pub const EDGE: i32 = 5;
    /// Odd empty count in the endgame
    pub const PARITY: i32 = 10;

    /// Material multiplier from this many pieces on
    pub const MATERIAL_LATE: i32 = 5;
    pub const MATERIAL_MID: i32 = 2;
    /// Material divisor before `MID_MATERIAL_PIECES`
    pub const MATERIAL_EARLY_DIVISOR: i32 = 2;

    /// From this many pieces on: mobility off, parity on, material x5
    pub const ENDGAME_PIECES: u32 = 50;
    /// From this many pieces on: material x2
    pub const MID_MATERIAL_PIECES: u32 = 40;
}

/// Game phase by total pieces on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// 20 pieces or fewer
    Early,
    /// 21 to 44 pieces
    Mid,
    /// 45 pieces or more
    Late,
}

impl GamePhase {
    pub const EARLY_MAX_PIECES: u32 = 20;
    pub const LATE_MIN_PIECES: u32 = 45;

    pub fn from_piece_count(pieces: u32) -> Self {
        if pieces <= Self::EARLY_MAX_PIECES {
            GamePhase::Early
        } else if pieces >= Self::LATE_MIN_PIECES {
            GamePhase::Late
        } else {
            GamePhase::Mid
        }
    }

    #[inline]
    pub fn of(board: &Board) -> Self {
        Self::from_piece_count(board.piece_count())
    }
}
