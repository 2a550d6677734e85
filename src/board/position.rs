//! Position: a board plus the side to move
//!
//! This is the value the search copies into every branch. It is `Copy`, so a
//! child state is just a bitwise copy of its parent followed by one move.

use std::fmt;

use super::{Board, Player, Pos};
use crate::error::GameError;
use crate::rules::{execute_flips, has_legal_move, is_legal, legal_moves};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    side_to_move: Player,
    terminal: bool,
}

impl Position {
    /// Standard start: four center pieces, Black to move
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Player::Black)
    }

    /// Wrap an arbitrary board. The terminal flag is derived from the board so
    /// that it holds iff neither side has a legal move.
    pub fn from_board(board: Board, side_to_move: Player) -> Self {
        let terminal =
            !has_legal_move(&board, side_to_move) && !has_legal_move(&board, side_to_move.opponent());
        Self {
            board,
            side_to_move,
            terminal,
        }
    }

    /// Parse an 8-line layout (see [`Board`]'s `FromStr`) with the given side to move
    pub fn from_layout(layout: &str, side_to_move: Player) -> Result<Self, GameError> {
        Ok(Self::from_board(layout.parse()?, side_to_move))
    }

    /// A board with nothing on it that accepts no moves
    pub(crate) fn idle() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Player::Black,
            terminal: true,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Legal moves for the side to move, row-major
    pub fn legal_moves(&self) -> Vec<Pos> {
        if self.terminal {
            return Vec::new();
        }
        legal_moves(&self.board, self.side_to_move)
    }

    /// Play a move for the side to move.
    ///
    /// Places the piece, flips every bracketed run, then hands the turn over.
    /// If the opponent then has no reply the turn comes straight back; if
    /// neither side can move the position becomes terminal.
    ///
    /// Returns the number of flipped pieces. An illegal move is rejected with
    /// [`GameError::InvalidMove`] and leaves the position untouched.
    pub fn apply_move(&mut self, pos: Pos) -> Result<u32, GameError> {
        if self.terminal || !is_legal(&self.board, pos, self.side_to_move) {
            return Err(GameError::InvalidMove { pos });
        }
        Ok(self.play_unchecked(pos))
    }

    /// Copy of this position with `pos` played
    pub fn after(&self, pos: Pos) -> Result<Position, GameError> {
        let mut child = *self;
        child.apply_move(pos)?;
        Ok(child)
    }

    /// Copy with `pos` played, for moves that came out of `legal_moves`.
    #[inline]
    pub(crate) fn play_legal(&self, pos: Pos) -> Position {
        debug_assert!(!self.terminal && is_legal(&self.board, pos, self.side_to_move));
        let mut child = *self;
        child.play_unchecked(pos);
        child
    }

    fn play_unchecked(&mut self, pos: Pos) -> u32 {
        let mover = self.side_to_move;
        let flipped = execute_flips(&mut self.board, pos, mover);

        let next = mover.opponent();
        if has_legal_move(&self.board, next) {
            self.side_to_move = next;
        } else if !has_legal_move(&self.board, mover) {
            // Neither side can move; the mover stays on turn.
            self.terminal = true;
        }
        flipped
    }

    /// Copy with the turn handed to the opponent without placing a piece.
    /// Marked terminal when the new side cannot move either.
    pub fn pass(&self) -> Position {
        let mut passed = *self;
        passed.side_to_move = self.side_to_move.opponent();
        if !has_legal_move(&passed.board, passed.side_to_move)
            && !has_legal_move(&passed.board, self.side_to_move)
        {
            passed.terminal = true;
        }
        passed
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        if self.terminal {
            writeln!(f, "game over")
        } else {
            writeln!(f, "{} to move", self.side_to_move)
        }
    }
}
