//! Reversi AI Engine
//!
//! A move-selection engine for 8x8 Reversi (Othello):
//! - Standard 8x8 board, Black moves first
//! - A move must bracket at least one run of opponent pieces
//! - Every bracketed run in all 8 directions is flipped
//! - A side with no legal move passes; the game ends when neither can move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board and position representation
//! - [`rules`]: Game rules (flipping, legal moves, game over)
//! - [`eval`]: Position evaluation heuristics
//! - [`search`]: Move ordering and alpha-beta search
//! - [`engine`]: Main AI engine integrating all components
//! - [`game`]: Position plus per-player clock, for a game loop
//!
//! # Quick Start
//!
//! ```
//! use reversi::{AIEngine, EngineConfig, GameState};
//!
//! let mut game = GameState::new();
//! let engine = AIEngine::with_config(EngineConfig {
//!     max_depth: Some(3),
//!     ..EngineConfig::default()
//! });
//!
//! // AI plays Black's first move
//! if let Some(pos) = engine.get_move(game.position()) {
//!     game.apply_move(pos).unwrap();
//!     println!("AI plays at {}", pos);
//! }
//! ```
//!
//! # Search
//!
//! 1. No legal move: `None` (pass or game over, caller decides)
//! 2. One legal move: played without searching
//! 3. Otherwise alpha-beta to 7, 8 or 12 plies by game phase, with one-ply
//!    move ordering and a hard node budget

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, Position, BOARD_SIZE};
pub use engine::{AIEngine, EngineConfig, MoveResult, SearchType};
pub use error::GameError;
pub use game::GameState;
