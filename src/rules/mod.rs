//! Game rules for Reversi
//!
//! This module implements the rule set:
//! - Flipping (bracketed runs of opponent pieces in any of 8 directions)
//! - Legal move generation
//! - Game over and final score

pub mod flip;
pub mod legal;
pub mod win;

// Re-exports for convenient access
pub use flip::{execute_flips, flips, flips_in_direction};
pub use legal::{count_legal_moves, has_legal_move, is_legal, legal_moves};
pub use win::{final_score, is_game_over, winner};
