//! Game over detection and final score

use crate::board::{Board, Player};

use super::legal::has_legal_move;

/// The game ends when neither side has a legal move.
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Player::Black) && !has_legal_move(board, Player::White)
}

/// Piece counts as `(black, white)`
#[inline]
pub fn final_score(board: &Board) -> (u32, u32) {
    (board.count(Player::Black), board.count(Player::White))
}

/// Player with more pieces, `None` on a draw.
///
/// Only meaningful once [`is_game_over`] holds; on a live board this is just
/// the current material leader.
pub fn winner(board: &Board) -> Option<Player> {
    let (black, white) = final_score(board);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Some(Player::Black),
        std::cmp::Ordering::Less => Some(Player::White),
        std::cmp::Ordering::Equal => None,
    }
}
