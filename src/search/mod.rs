//! Search module for Reversi AI
//!
//! Contains:
//! - Move ordering by one-ply evaluation lookahead
//! - Adaptive search depth keyed to game phase
//! - Alpha-Beta search with a hard node budget

pub mod alphabeta;
pub mod depth;
pub mod ordering;

pub use alphabeta::{
    Cutoff, SearchContext, SearchResult, SearchStats, SearchType, Searcher, DEFAULT_NODE_BUDGET,
};
pub use depth::{adaptive_depth, PhaseDepths};
pub use ordering::{order_moves, score_moves};
