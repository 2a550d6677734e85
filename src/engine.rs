//! Main AI Engine: the entry point the game loop calls once per AI turn
//!
//! The engine resolves a move in this order:
//!
//! 1. **No move**: the side to move cannot play; `None` is returned
//! 2. **Only move**: exactly one legal move; returned without searching
//! 3. **Alpha-Beta**: adaptive-depth search under the node budget
//!
//! # Example
//!
//! ```
//! use reversi::{AIEngine, EngineConfig, Position};
//!
//! // Shallow search for a fast example
//! let engine = AIEngine::with_config(EngineConfig {
//!     max_depth: Some(3),
//!     ..EngineConfig::default()
//! });
//! let position = Position::new();
//!
//! let result = engine.get_move_with_stats(&position);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Pos, Position};
use crate::search::{
    adaptive_depth, PhaseDepths, SearchResult, SearchStats, Searcher, DEFAULT_NODE_BUDGET,
};

pub use crate::search::SearchType;

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` if the side to move cannot play
    pub best_move: Option<Pos>,
    /// Backed-up evaluation of the best move, from the mover's perspective
    pub score: i32,
    /// How the move was chosen
    pub search_type: SearchType,
    /// Plies searched (0 without a search)
    pub depth: i8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Termination counts from the search
    pub stats: SearchStats,
}

impl MoveResult {
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: result.search_type,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
            stats: result.stats,
        }
    }
}

/// Engine configuration.
///
/// `Default` gives the standard engine: 7/8/12 plies by phase and a
/// 500 000 node budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Hard cap on nodes per search; `None` disables it
    pub node_budget: Option<u64>,
    /// Upper bound applied to the adaptive depth
    pub max_depth: Option<i8>,
    /// Depth for each game phase
    pub depths: PhaseDepths,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            node_budget: Some(DEFAULT_NODE_BUDGET),
            max_depth: None,
            depths: PhaseDepths::default(),
        }
    }
}

/// Main AI Engine for Reversi.
///
/// Stateless between calls: every search starts from a fresh node counter,
/// and the caller's position is only ever read.
///
/// # Example
///
/// ```
/// use reversi::{AIEngine, EngineConfig, Position};
///
/// let engine = AIEngine::with_config(EngineConfig {
///     max_depth: Some(2),
///     ..EngineConfig::default()
/// });
/// let position = Position::new();
/// if let Some(best_move) = engine.get_move(&position) {
///     println!("Play at {}", best_move);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an AI engine with custom configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use reversi::{AIEngine, EngineConfig};
    ///
    /// // Unbounded search, four plies at most
    /// let engine = AIEngine::with_config(EngineConfig {
    ///     node_budget: None,
    ///     max_depth: Some(4),
    ///     ..EngineConfig::default()
    /// });
    /// ```
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(config.node_budget),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the best move for the side to move.
    ///
    /// Returns `None` if the side to move has no legal move; the caller
    /// decides whether that means a pass or the end of the game.
    #[must_use]
    pub fn get_move(&self, position: &Position) -> Option<Pos> {
        self.get_move_with_stats(position).best_move
    }

    /// Get the best move with detailed search statistics.
    #[must_use]
    pub fn get_move_with_stats(&self, position: &Position) -> MoveResult {
        let start = Instant::now();
        let depth = self.search_depth(position);
        let result = self.searcher.search(position, depth);
        let time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            "{} plays {:?} ({:?}, depth {}, score {}, {} nodes, {}ms)",
            position.side_to_move(),
            result.best_move.map(|m| m.to_string()),
            result.search_type,
            result.depth,
            result.score,
            result.nodes,
            time_ms
        );
        MoveResult::from_search(result, time_ms)
    }

    /// Depth the engine would search this position at.
    #[must_use]
    pub fn search_depth(&self, position: &Position) -> i8 {
        adaptive_depth(position.board(), &self.config.depths, self.config.max_depth)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
