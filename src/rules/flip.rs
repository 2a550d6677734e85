//! Flip rules: a placement captures every run of opponent pieces that is
//! bracketed on the far side by one of the mover's own pieces.
//!
//! Masks are `u64` with bit `row * 8 + col` set for each flipped square.

use crate::board::{Board, Cell, Player, Pos, DIRECTIONS};

/// Pieces that placing at `pos` would flip along one direction.
///
/// Walks from the square next to `pos`; collects opponent pieces until it
/// meets the mover's own piece (run is bracketed) or an empty square / the
/// edge (nothing flips).
#[inline]
pub fn flips_in_direction(board: &Board, pos: Pos, player: Player, dr: i8, dc: i8) -> u64 {
    let own = Cell::from(player);
    let opp = Cell::from(player.opponent());
    let mut mask = 0u64;
    let mut cur = pos.offset(dr, dc);

    while let Some(p) = cur {
        let cell = board.get(p);
        if cell == opp {
            mask |= 1u64 << p.to_index();
            cur = p.offset(dr, dc);
        } else if cell == own {
            return mask;
        } else {
            return 0;
        }
    }
    0
}

/// All pieces flipped by placing `player` at `pos`, over all 8 directions.
/// Zero if the square is occupied.
pub fn flips(board: &Board, pos: Pos, player: Player) -> u64 {
    if !board.is_empty(pos) {
        return 0;
    }
    DIRECTIONS
        .iter()
        .fold(0, |acc, &(dr, dc)| acc | flips_in_direction(board, pos, player, dr, dc))
}

/// Place `player` at `pos` and flip everything it brackets.
///
/// Does not check legality: callers go through `Position::apply_move`.
/// Returns the number of flipped pieces.
pub fn execute_flips(board: &mut Board, pos: Pos, player: Player) -> u32 {
    let mask = flips(board, pos, player);
    board.set(pos, Cell::from(player));

    let mut bits = mask;
    while bits != 0 {
        let idx = bits.trailing_zeros() as usize;
        board.set(Pos::from_index(idx), Cell::from(player));
        bits &= bits - 1;
    }
    mask.count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(layout: &str) -> Board {
        layout.parse().unwrap()
    }

    #[test]
    fn test_flip_single_direction() {
        let board = board_from(
            "
            XOO.....
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
        );
        let mask = flips_in_direction(&board, Pos::new(0, 3), Player::Black, 0, -1);
        assert_eq!(mask.count_ones(), 2);
        assert_ne!(mask & (1 << Pos::new(0, 1).to_index()), 0);
        assert_ne!(mask & (1 << Pos::new(0, 2).to_index()), 0);
    }

    #[test]
    fn test_no_flip_without_bracket() {
        // Run ends at the edge
        let board = board_from(
            "
            OO......
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
        );
        assert_eq!(flips(&board, Pos::new(0, 2), Player::Black), 0);
    }

    #[test]
    fn test_no_flip_across_gap() {
        let board = board_from(
            "
            X.O.....
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
        );
        assert_eq!(flips(&board, Pos::new(0, 3), Player::Black), 0);
    }

    #[test]
    fn test_adjacent_own_piece_flips_nothing() {
        let board = board_from(
            "
            XX......
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
        );
        assert_eq!(flips_in_direction(&board, Pos::new(0, 2), Player::Black, 0, -1), 0);
    }

    #[test]
    fn test_multi_direction_flip() {
        // Black at d4 brackets in three directions: left, up, and up-left diagonal
        let board = board_from(
            "
            X..X....
            .O.O....
            ..OO....
            XOO.....
            ........
            ........
            ........
            ........
            ",
        );
        let mut b = board;
        let flipped = execute_flips(&mut b, Pos::new(3, 3), Player::Black);

        assert_eq!(flipped, 6);
        assert_eq!(b.get(Pos::new(3, 3)), Cell::Black);
        for pos in [
            Pos::new(3, 1),
            Pos::new(3, 2),
            Pos::new(2, 3),
            Pos::new(1, 3),
            Pos::new(2, 2),
            Pos::new(1, 1),
        ] {
            assert_eq!(b.get(pos), Cell::Black, "{} should be flipped", pos);
        }
        assert_eq!(b.count(Player::White), 0);
    }

    #[test]
    fn test_occupied_square_flips_nothing() {
        let board = Board::initial();
        assert_eq!(flips(&board, Pos::new(3, 3), Player::Black), 0);
    }
}
