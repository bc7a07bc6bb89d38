use ahash::AHashSet;
use chess::{Board, ChessMove};

use super::Engine;

const MAX_PV_LENGTH: usize = 32;

impl Engine {
    /// Follows best moves stored in the transposition table from `board`.
    /// Stops at a missing or illegal move, or when a position repeats.
    pub fn principal_variation(&self, board: &Board) -> Vec<ChessMove> {
        let mut pv = Vec::new();
        let mut seen = AHashSet::new();
        let mut board = *board;

        while pv.len() < MAX_PV_LENGTH && seen.insert(board.get_hash()) {
            let Some(mv) = self.tt.best_move(board.get_hash()) else {
                break;
            };
            if !board.legal(mv) {
                break;
            }
            pv.push(mv);
            board = board.make_move_new(mv);
        }

        pv
    }
}

pub(super) fn format_pv(pv: &[ChessMove]) -> String {
    pv.iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
