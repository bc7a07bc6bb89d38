use chess::{Board, Color, ALL_PIECES};
use evaluation::{PieceValues, Score};

use crate::pst::square_value;

/// Material plus piece-square bonuses for one side.
#[inline(always)]
pub(super) fn evaluate(board: &Board, color: Color, piece_values: &PieceValues) -> Score {
    let own = board.color_combined(color);

    let mut cp = 0;
    for piece in ALL_PIECES {
        let value = piece_values.get(piece);
        for square in board.pieces(piece) & own {
            cp += value + square_value(piece, color, square);
        }
    }

    cp
}
