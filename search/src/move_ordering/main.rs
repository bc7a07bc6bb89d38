use chess::{Board, MoveGen};
use utils::is_capture;

use super::MoveList;

/// All legal moves with captures first.
///
/// The sort is stable, so captures and quiet moves each keep the order
/// the move generator produced them in.
#[inline(always)]
pub fn order_moves(board: &Board) -> MoveList {
    let mut moves: MoveList = MoveGen::new_legal(board).collect();
    moves.sort_by_key(|mv| !is_capture(board, *mv));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use utils::legal_moves;

    #[test]
    fn test_captures_come_first_in_generator_order() {
        let board = Board::from_str(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();

        let ordered = order_moves(&board);
        let generated = legal_moves(&board);
        assert_eq!(ordered.len(), generated.len());

        let split = ordered
            .iter()
            .position(|mv| !is_capture(&board, *mv))
            .unwrap();
        assert!(split > 0);
        assert!(ordered[split..].iter().all(|mv| !is_capture(&board, *mv)));

        let captures: Vec<_> = generated.iter().copied().filter(|mv| is_capture(&board, *mv)).collect();
        let quiets: Vec<_> = generated.iter().copied().filter(|mv| !is_capture(&board, *mv)).collect();
        assert_eq!(&ordered[..split], captures.as_slice());
        assert_eq!(&ordered[split..], quiets.as_slice());
    }

    #[test]
    fn test_no_moves_in_checkmate() {
        let board = Board::from_str("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        assert!(order_moves(&board).is_empty());
    }
}
