//! Alpha-Beta search with a node budget
//!
//! This module implements the core search algorithm for the Reversi AI.
//! It is plain minimax with alpha-beta pruning: scores are always from one
//! fixed perspective (the player who asked for a move). Root children are
//! minimizing nodes and every ply below flips the node type, passes included.
//!
//! # Features
//!
//! - Move ordering at every node by one-ply evaluation
//! - Fail-soft pruning: returned values are never clamped into the window
//! - Automatic pass when the side to move has no legal move
//! - Hard node budget: once spent, every further node returns its static
//!   evaluation immediately
//!
//! The node counter lives in a [`SearchContext`] passed down the recursion,
//! so a `Searcher` holds no per-search state and can be shared freely.
//!
//! # Example
//!
//! ```
//! use reversi::board::Position;
//! use reversi::search::Searcher;
//!
//! let searcher = Searcher::new(Some(10_000));
//! let position = Position::new();
//!
//! let result = searcher.search(&position, 3);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! ```

use log::trace;

use crate::board::{Player, Pos, Position};
use crate::eval::evaluate;

use super::ordering::order_moves;

/// Node budget used when none is configured
pub const DEFAULT_NODE_BUDGET: u64 = 500_000;

/// Infinity scores for alpha-beta bounds. Plain minimax never negates a
/// score, so the full `i32` range is safe.
const NEG_INF: i32 = i32::MIN;
const POS_INF: i32 = i32::MAX;

/// Why a node stopped expanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cutoff {
    /// Neither side can move
    Terminal,
    /// Remaining depth reached zero
    Depth,
    /// Node budget spent
    NodeBudget,
    /// Remaining siblings skipped by an alpha-beta cutoff
    Pruned,
}

/// How a [`SearchResult`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Side to move had no legal move
    NoMove,
    /// Exactly one legal move, returned without searching
    OnlyMove,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Leaves where the game was over
    pub terminal_leaves: u64,
    /// Leaves at the depth horizon
    pub depth_leaves: u64,
    /// Leaves forced by the node budget
    pub budget_leaves: u64,
    /// Alpha-beta cutoffs
    pub prunes: u64,
    /// Passes synthesized because the side to move had no move
    pub passes: u64,
}

impl SearchStats {
    #[inline]
    fn record(&mut self, cutoff: Cutoff) {
        match cutoff {
            Cutoff::Terminal => self.terminal_leaves += 1,
            Cutoff::Depth => self.depth_leaves += 1,
            Cutoff::NodeBudget => self.budget_leaves += 1,
            Cutoff::Pruned => self.prunes += 1,
        }
    }

    /// Count for one termination reason
    pub fn count(&self, cutoff: Cutoff) -> u64 {
        match cutoff {
            Cutoff::Terminal => self.terminal_leaves,
            Cutoff::Depth => self.depth_leaves,
            Cutoff::NodeBudget => self.budget_leaves,
            Cutoff::Pruned => self.prunes,
        }
    }

    /// Nodes that were scored statically
    pub fn leaves(&self) -> u64 {
        self.terminal_leaves + self.depth_leaves + self.budget_leaves
    }
}

/// Per-search state: the fixed perspective, the node counter and its budget.
///
/// One context belongs to one top-level search.
#[derive(Debug, Clone)]
pub struct SearchContext {
    perspective: Player,
    budget: Option<u64>,
    nodes: u64,
    stats: SearchStats,
}

impl SearchContext {
    /// Fresh context with a zeroed counter. `budget: None` disables the cap.
    pub fn new(perspective: Player, budget: Option<u64>) -> Self {
        Self {
            perspective,
            budget,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn perspective(&self) -> Player {
        self.perspective
    }

    /// Nodes visited so far
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[inline]
    fn budget_spent(&self) -> bool {
        self.budget.is_some_and(|budget| self.nodes >= budget)
    }

    #[inline]
    fn leaf(&mut self, position: &Position, cutoff: Cutoff) -> i32 {
        self.stats.record(cutoff);
        evaluate(position, self.perspective)
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move has no legal move
    pub best_move: Option<Pos>,
    /// Backed-up score of the best move, from the mover's perspective
    pub score: i32,
    /// Depth searched (0 when no search was needed)
    pub depth: i8,
    /// Whether the tree was searched at all
    pub search_type: SearchType,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-Beta search engine with a node budget.
#[derive(Debug, Clone)]
pub struct Searcher {
    node_budget: Option<u64>,
}

impl Searcher {
    /// Create a searcher. `None` searches every node up to the depth limit.
    #[must_use]
    pub fn new(node_budget: Option<u64>) -> Self {
        Self { node_budget }
    }

    #[must_use]
    pub fn node_budget(&self) -> Option<u64> {
        self.node_budget
    }

    /// Pick the best move for the side to move, searching `depth` plies.
    ///
    /// With no legal move the result carries `best_move: None`; with exactly
    /// one it is returned without searching (zero nodes). Otherwise every
    /// root move is searched: the root raises `alpha` as it goes but never
    /// cuts off, since each move needs a value to be compared. The first of
    /// several equally scored moves wins.
    #[must_use]
    pub fn search(&self, position: &Position, depth: i8) -> SearchResult {
        let mover = position.side_to_move();
        let mut ctx = SearchContext::new(mover, self.node_budget);
        let moves = position.legal_moves();

        match moves.as_slice() {
            [] => {
                return SearchResult {
                    best_move: None,
                    score: evaluate(position, mover),
                    depth: 0,
                    search_type: SearchType::NoMove,
                    nodes: 0,
                    stats: SearchStats::default(),
                }
            }
            [only] => {
                return SearchResult {
                    best_move: Some(*only),
                    score: evaluate(&position.play_legal(*only), mover),
                    depth: 0,
                    search_type: SearchType::OnlyMove,
                    nodes: 0,
                    stats: SearchStats::default(),
                }
            }
            _ => {}
        }

        let depth = depth.max(1);
        let moves = order_moves(position, moves, mover, true);

        let mut alpha = NEG_INF;
        let beta = POS_INF;
        let mut best_move = None;
        let mut best_score = NEG_INF;

        for mov in moves {
            let child = position.play_legal(mov);
            let score = self.alpha_beta(&mut ctx, &child, depth - 1, alpha, beta, false);
            trace!("root {} -> {} ({} nodes)", mov, score, ctx.nodes());

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            search_type: SearchType::AlphaBeta,
            nodes: ctx.nodes,
            stats: ctx.stats,
        }
    }

    /// Recursive fail-soft alpha-beta.
    ///
    /// Returns the minimax value of `position` from `ctx.perspective()` when
    /// it lies inside `(alpha, beta)`; otherwise a bound on the far side of
    /// the window, unclamped.
    ///
    /// Every child is searched with the flipped flag. A move that leaves the
    /// opponent stuck hands the turn straight back, so a node's side to move
    /// does not decide its type.
    pub fn alpha_beta(
        &self,
        ctx: &mut SearchContext,
        position: &Position,
        depth: i8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        ctx.nodes += 1;

        // Budget overrides everything, including remaining depth.
        if ctx.budget_spent() {
            return ctx.leaf(position, Cutoff::NodeBudget);
        }
        if position.is_terminal() {
            return ctx.leaf(position, Cutoff::Terminal);
        }
        if depth <= 0 {
            return ctx.leaf(position, Cutoff::Depth);
        }

        let moves = position.legal_moves();
        if moves.is_empty() {
            ctx.stats.passes += 1;
            let passed = position.pass();
            if passed.is_terminal() {
                return ctx.leaf(&passed, Cutoff::Terminal);
            }
            return self.alpha_beta(ctx, &passed, depth - 1, alpha, beta, !maximizing);
        }

        let perspective = ctx.perspective;
        let moves = order_moves(position, moves, perspective, maximizing);

        if maximizing {
            let mut best = NEG_INF;
            for mov in moves {
                let child = position.play_legal(mov);
                let value = self.alpha_beta(ctx, &child, depth - 1, alpha, beta, !maximizing);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    ctx.stats.record(Cutoff::Pruned);
                    break;
                }
            }
            best
        } else {
            let mut best = POS_INF;
            for mov in moves {
                let child = position.play_legal(mov);
                let value = self.alpha_beta(ctx, &child, depth - 1, alpha, beta, !maximizing);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    ctx.stats.record(Cutoff::Pruned);
                    break;
                }
            }
            best
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Some(DEFAULT_NODE_BUDGET))
    }
}
