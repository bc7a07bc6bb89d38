use chess::{Color, Piece, Square, NUM_PIECES, NUM_SQUARES};
use utils::mirror;

// Feature layout (24576 total), one block per king square:
//
//   [King A1][King B1]...[King H8]
//   └─ 384 ─┘└─ 384 ─┘   └─ 384 ─┘
//
// Inside a block pieces are ordered P N B R Q K, 64 squares each.
// Black pieces and the black king are mirrored vertically so both
// colors index the table from their own first rank.

pub const NUM_PIECE_SQUARES: usize = NUM_PIECES * NUM_SQUARES;
pub const NUM_FEATURES: usize = NUM_SQUARES * NUM_PIECE_SQUARES;

/// Input feature for `piece` of `color` on `square`, seen from that color's king on `king`.
#[inline(always)]
pub fn feature_index(piece: Piece, square: Square, color: Color, king: Square) -> usize {
    let (square, king) = match color {
        Color::White => (square, king),
        Color::Black => (mirror(square), mirror(king)),
    };

    king.to_index() * NUM_PIECE_SQUARES + piece.to_index() * NUM_SQUARES + square.to_index()
}
