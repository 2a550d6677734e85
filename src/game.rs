//! Game state: a position plus the per-player clock
//!
//! The clock is bookkeeping for whoever displays the game. The engine only
//! ever looks at [`GameState::position`].

use std::time::{Duration, Instant};

use crate::board::{Board, Player, Pos, Position};
use crate::error::GameError;
use crate::rules::{final_score, winner};

/// Accumulated thinking time per player and the start of the current turn
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    elapsed: [Duration; 2],
    turn_start: Instant,
}

impl GameClock {
    fn new() -> Self {
        Self {
            elapsed: [Duration::ZERO; 2],
            turn_start: Instant::now(),
        }
    }

    /// Charge the time since the turn started to `player`, start a new turn.
    fn end_turn(&mut self, player: Player) {
        let now = Instant::now();
        self.elapsed[player.index()] += now.duration_since(self.turn_start);
        self.turn_start = now;
    }

    #[inline]
    pub fn elapsed(&self, player: Player) -> Duration {
        self.elapsed[player.index()]
    }

    #[inline]
    pub fn turn_start(&self) -> Instant {
        self.turn_start
    }
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    position: Position,
    clock: GameClock,
}

impl GameState {
    /// Started game: center seeded, Black to move, clock running
    pub fn new() -> Self {
        Self {
            position: Position::new(),
            clock: GameClock::new(),
        }
    }

    /// Initialised but not started: empty board, no moves accepted
    pub fn idle() -> Self {
        Self {
            position: Position::idle(),
            clock: GameClock::new(),
        }
    }

    /// Resume from an arbitrary position with a fresh clock
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            clock: GameClock::new(),
        }
    }

    /// Throw away the current game and start a new one
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.position.board()
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.position.side_to_move()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.position.is_terminal()
    }

    pub fn legal_moves(&self) -> Vec<Pos> {
        self.position.legal_moves()
    }

    #[inline]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Play a move for the current player and charge them the turn's time.
    ///
    /// Illegal moves are rejected without touching the board or the clock.
    pub fn apply_move(&mut self, pos: Pos) -> Result<u32, GameError> {
        let mover = self.position.side_to_move();
        let flipped = self.position.apply_move(pos)?;
        self.clock.end_turn(mover);
        Ok(flipped)
    }

    /// Total time `player` has used, including the running turn if it is theirs.
    pub fn player_time(&self, player: Player) -> Duration {
        let mut total = self.clock.elapsed(player);
        if !self.is_over() && player == self.current_player() {
            total += self.clock.turn_start.elapsed();
        }
        total
    }

    /// Piece counts as `(black, white)`
    pub fn score(&self) -> (u32, u32) {
        final_score(self.board())
    }

    /// Winner once the game is over; `None` while playing or on a draw
    pub fn winner(&self) -> Option<Player> {
        if self.is_over() {
            winner(self.board())
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
