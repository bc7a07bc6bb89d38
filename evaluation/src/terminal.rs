use chess::{Board, BoardStatus};
use utils::has_insufficient_material;

use crate::scores::{Score, MATE_VALUE};

/// Scores positions where the game is over, from the side to move's view.
///
/// Checkmate is `-(MATE_VALUE - ply)`: the side to move is mated, and a mate
/// further from the root is less severe. Stalemate and dead material are `0`.
/// Returns `None` while the game is still being played.
#[inline(always)]
pub fn terminal_score(board: &Board, ply: usize) -> Option<Score> {
    match board.status() {
        BoardStatus::Checkmate => Some(-(MATE_VALUE - ply as Score)),
        BoardStatus::Stalemate => Some(0),
        BoardStatus::Ongoing if has_insufficient_material(board) => Some(0),
        BoardStatus::Ongoing => None,
    }
}
