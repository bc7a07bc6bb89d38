use chess::{Board, ChessMove};

use crate::board::in_check;
use crate::moves::legal_moves;

/// The position on the current search path.
///
/// Wraps a board with an undo stack so the search can make a move, recurse,
/// and restore the exact previous state. Every `make_move` must be paired with
/// an `unmake_move` before the caller returns.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    history: Vec<Board>,
}

impl Position {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            history: Vec::with_capacity(128),
        }
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Zobrist key of the current position.
    #[inline(always)]
    pub fn key(&self) -> u64 {
        self.board.get_hash()
    }

    /// Number of moves made on top of the root.
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.history.len()
    }

    /// Replaces the root, dropping any pending undo history.
    pub fn reset(&mut self, board: Board) {
        self.board = board;
        self.history.clear();
    }

    #[inline(always)]
    pub fn make_move(&mut self, mv: ChessMove) {
        let next = self.board.make_move_new(mv);
        self.history.push(std::mem::replace(&mut self.board, next));
    }

    /// Restores the position from before the last `make_move`.
    /// Returns the board that was undone, or `None` at the root.
    #[inline(always)]
    pub fn unmake_move(&mut self) -> Option<Board> {
        let previous = self.history.pop()?;
        Some(std::mem::replace(&mut self.board, previous))
    }

    #[inline(always)]
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        legal_moves(&self.board)
    }

    #[inline(always)]
    pub fn in_check(&self) -> bool {
        in_check(&self.board)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::str::FromStr;

    #[test]
    fn test_make_unmake_restores_board_and_key() {
        let mut position = Position::default();
        let root = *position.board();
        let key = position.key();

        let mv = position.legal_moves()[0];
        position.make_move(mv);
        assert_ne!(position.key(), key);
        assert_eq!(position.height(), 1);

        position.unmake_move();
        assert_eq!(*position.board(), root);
        assert_eq!(position.key(), key);
        assert_eq!(position.height(), 0);
    }

    #[test]
    fn test_unmake_at_root_is_none() {
        let mut position = Position::default();
        assert!(position.unmake_move().is_none());
        assert_eq!(*position.board(), Board::default());
    }

    #[test]
    fn test_random_nested_make_unmake_has_no_drift() {
        let mut rng = StdRng::seed_from_u64(7);
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ];

        for fen in fens {
            let root = Board::from_str(fen).unwrap();
            let mut position = Position::new(root);

            for _ in 0..50 {
                let mut made = 0;
                for _ in 0..rng.gen_range(1..40) {
                    let moves = position.legal_moves();
                    if moves.is_empty() {
                        break;
                    }
                    position.make_move(moves[rng.gen_range(0..moves.len())]);
                    made += 1;
                }
                for _ in 0..made {
                    position.unmake_move();
                }

                assert_eq!(*position.board(), root);
                assert_eq!(position.key(), root.get_hash());
                assert_eq!(position.height(), 0);
            }
        }
    }
}
