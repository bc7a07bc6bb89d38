use chess::{Board, MoveGen};
use utils::is_tactical;

use super::MoveList;

/// Captures, promotions and checks, in generator order.
#[inline(always)]
pub fn tactical_moves(board: &Board) -> MoveList {
    MoveGen::new_legal(board)
        .filter(|mv| is_tactical(board, *mv))
        .collect()
}
