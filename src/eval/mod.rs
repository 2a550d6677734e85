//! Evaluation module for Reversi positions
//!
//! The score is the sum of five terms, each from the perspective player's
//! point of view:
//! - Positional square weights
//! - Mobility (before the endgame)
//! - Edge occupancy
//! - Parity (endgame only)
//! - Material, scaled by game phase

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, evaluate_breakdown, EvalBreakdown};
pub use weights::{EvalWeights, GamePhase, POSITION_WEIGHTS};
