//! Board structure: a flat 64-cell grid

use std::fmt;
use std::str::FromStr;

use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::GameError;

/// Game board, indexed by `row * 8 + col`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    /// Empty board (no pieces placed)
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Standard opening: the four center squares seeded alternately
    pub fn initial() -> Self {
        let mut board = Self::new();
        let lo = (BOARD_SIZE / 2 - 1) as u8;
        let hi = (BOARD_SIZE / 2) as u8;
        board.set(Pos::new(lo, lo), Cell::White);
        board.set(Pos::new(lo, hi), Cell::Black);
        board.set(Pos::new(hi, hi), Cell::White);
        board.set(Pos::new(hi, lo), Cell::Black);
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Overwrite a cell. Raw accessor: does no flipping or legality checks.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Number of pieces a player owns (the raw score)
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        let target = Cell::from(player);
        self.cells.iter().filter(|&&c| c == target).count() as u32
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.cells.iter().filter(|c| !c.is_empty()).count() as u32
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.piece_count()
    }

    /// Iterate over `(pos, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (Pos::from_index(idx), cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Eight lines of eight symbols, top row first
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[row * BOARD_SIZE + col].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse the layout printed by `Display`. Whitespace inside a line is ignored,
/// so `X . O ...` and `X.O...` are both accepted.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidLayout(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(GameError::InvalidLayout(format!(
                    "row {} has {} cells",
                    row + 1,
                    cells.len()
                )));
            }
            for (col, &ch) in cells.iter().enumerate() {
                let cell = Cell::from_symbol(ch).ok_or_else(|| {
                    GameError::InvalidLayout(format!("unknown symbol '{}' in row {}", ch, row + 1))
                })?;
                board.cells[row * BOARD_SIZE + col] = cell;
            }
        }
        Ok(board)
    }
}
