use chess::{Board, Color, Piece, ALL_PIECES};

use crate::scores::Score;

/// Material value of each piece type in centipawns.
/// The king carries no material value; its worth is positional only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValues {
    pub pawn: Score,
    pub knight: Score,
    pub bishop: Score,
    pub rook: Score,
    pub queen: Score,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
        }
    }
}

impl PieceValues {
    #[inline(always)]
    pub fn get(&self, piece: Piece) -> Score {
        match piece {
            Piece::Pawn => self.pawn,
            Piece::Knight => self.knight,
            Piece::Bishop => self.bishop,
            Piece::Rook => self.rook,
            Piece::Queen => self.queen,
            Piece::King => 0,
        }
    }

    /// Sums the material of one side.
    pub fn material(&self, board: &Board, color: Color) -> Score {
        let own = board.color_combined(color);
        ALL_PIECES
            .iter()
            .map(|&piece| self.get(piece) * (board.pieces(piece) & own).popcnt() as Score)
            .sum()
    }
}
