//! Legal move generation
//!
//! A square is legal for a player when it is empty and at least one of the
//! eight directions holds a run of one or more opponent pieces closed off by
//! one of the player's own pieces.

use crate::board::{Board, Player, Pos, DIRECTIONS};

use super::flip::flips_in_direction;

/// Check if `player` may place at `pos`.
#[inline]
pub fn is_legal(board: &Board, pos: Pos, player: Player) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&(dr, dc)| flips_in_direction(board, pos, player, dr, dc) != 0)
}

/// All legal moves for `player`, scanned in row-major order.
///
/// The order is part of the contract: search tie-breaking relies on it.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    Pos::all().filter(|&pos| is_legal(board, pos, player)).collect()
}

/// Mobility count without allocating
pub fn count_legal_moves(board: &Board, player: Player) -> usize {
    Pos::all().filter(|&pos| is_legal(board, pos, player)).count()
}

#[inline]
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Pos::all().any(|pos| is_legal(board, pos, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves_black() {
        let board = Board::initial();
        let moves = legal_moves(&board, Player::Black);
        assert_eq!(
            moves,
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
    }

    #[test]
    fn test_opening_moves_white() {
        let board = Board::initial();
        let moves = legal_moves(&board, Player::White);
        assert_eq!(
            moves,
            vec![Pos::new(2, 4), Pos::new(3, 5), Pos::new(4, 2), Pos::new(5, 3)]
        );
    }

    #[test]
    fn test_moves_are_row_major_and_unique() {
        let board: Board = "
            ........
            ..XXX...
            ..XOOO..
            ..OOX...
            ...OX...
            ........
            ........
            ........
        "
        .parse()
        .unwrap();

        for player in [Player::Black, Player::White] {
            let moves = legal_moves(&board, player);
            assert!(!moves.is_empty());
            assert!(
                moves.windows(2).all(|w| w[0] < w[1]),
                "Moves must be strictly row-major: {:?}",
                moves
            );
            assert_eq!(moves.len(), count_legal_moves(&board, player));
        }
    }

    #[test]
    fn test_no_moves_on_empty_board() {
        let board = Board::new();
        assert!(legal_moves(&board, Player::Black).is_empty());
        assert!(!has_legal_move(&board, Player::White));
    }

    #[test]
    fn test_occupied_square_never_legal() {
        let board = Board::initial();
        assert!(!is_legal(&board, Pos::new(3, 3), Player::Black));
        assert!(!is_legal(&board, Pos::new(3, 4), Player::White));
    }

    #[test]
    fn test_diagonal_bracket_is_legal() {
        let board: Board = "
            X.......
            .O......
            ........
            ........
            ........
            ........
            ........
            ........
        "
        .parse()
        .unwrap();
        assert_eq!(legal_moves(&board, Player::Black), vec![Pos::new(2, 2)]);
        assert!(legal_moves(&board, Player::White).is_empty());
    }
}
