//! Adaptive search depth
//!
//! Few pieces means a wide tree, so the opening searches shallower; the late
//! game has few empties left and can afford to look much further ahead.

use crate::board::Board;
use crate::eval::GamePhase;

/// Plies to search in each game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDepths {
    pub early: i8,
    pub mid: i8,
    pub late: i8,
}

impl PhaseDepths {
    #[inline]
    pub fn for_phase(&self, phase: GamePhase) -> i8 {
        match phase {
            GamePhase::Early => self.early,
            GamePhase::Mid => self.mid,
            GamePhase::Late => self.late,
        }
    }
}

impl Default for PhaseDepths {
    fn default() -> Self {
        Self {
            early: 7,
            mid: 8,
            late: 12,
        }
    }
}

/// Search depth for this board, optionally capped. Never below one ply.
pub fn adaptive_depth(board: &Board, depths: &PhaseDepths, cap: Option<i8>) -> i8 {
    let depth = depths.for_phase(GamePhase::of(board));
    cap.map_or(depth, |c| depth.min(c)).max(1)
}
