use chess::{Color, Piece, Square};
use evaluation::Score;
use utils::mirror;

/// Returns the piece-square bonus for `piece` of `color` on `square`.
/// Tables are indexed a1 = 0 from White's side; Black reads the rank-mirrored square.
#[inline(always)]
pub fn square_value(piece: Piece, color: Color, square: Square) -> Score {
    let square = match color {
        Color::White => square,
        Color::Black => mirror(square),
    };
    table(piece)[square.to_index()]
}

#[inline(always)]
fn table(piece: Piece) -> &'static [Score; 64] {
    match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::Rook => &ROOK_PST,
        Piece::Queen => &QUEEN_PST,
        Piece::King => &KING_PST,
    }
}

// - Rewards central pawns and pawns close to promotion
// - Penalizes leaving d2/e2 unmoved
#[rustfmt::skip]
pub const PAWN_PST: [Score; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0, // RANK 1: a1..h1
      5,  10,  10, -20, -20,  10,  10,   5, // RANK 2
      5,  -5, -10,   0,   0, -10,  -5,   5, // RANK 3
      0,   0,   0,  20,  20,   0,   0,   0, // RANK 4
      5,   5,  10,  25,  25,  10,   5,   5, // RANK 5
     10,  10,  20,  30,  30,  20,  10,  10, // RANK 6
     50,  50,  50,  50,  50,  50,  50,  50, // RANK 7
      0,   0,   0,   0,   0,   0,   0,   0, // RANK 8
];

// - Knights on the rim are dim
#[rustfmt::skip]
pub const KNIGHT_PST: [Score; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 1: a1..h1
    -40, -20,   0,   0,   0,   0, -20, -40, // RANK 2
    -30,   0,  10,  15,  15,  10,   0, -30, // RANK 3
    -30,   5,  15,  20,  20,  15,   5, -30, // RANK 4
    -30,   0,  15,  20,  20,  15,   0, -30, // RANK 5
    -30,   5,  10,  15,  15,  10,   5, -30, // RANK 6
    -40, -20,   0,   5,   5,   0, -20, -40, // RANK 7
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 8
];

// - Central squares, away from corners
#[rustfmt::skip]
pub const BISHOP_PST: [Score; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 1: a1..h1
    -10,   0,   0,   0,   0,   0,   0, -10, // RANK 2
    -10,   0,   5,  10,  10,   5,   0, -10, // RANK 3
    -10,   5,   5,  10,  10,   5,   5, -10, // RANK 4
    -10,   0,  10,  10,  10,  10,   0, -10, // RANK 5
    -10,  10,  10,  10,  10,  10,  10, -10, // RANK 6
    -10,   5,   0,   0,   0,   0,   5, -10, // RANK 7
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 8
];

// - Second rank and central files
#[rustfmt::skip]
pub const ROOK_PST: [Score; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0, // RANK 1: a1..h1
      5,  10,  10,  10,  10,  10,  10,   5, // RANK 2
     -5,   0,   0,   0,   0,   0,   0,  -5, // RANK 3
     -5,   0,   0,   0,   0,   0,   0,  -5, // RANK 4
     -5,   0,   0,   0,   0,   0,   0,  -5, // RANK 5
     -5,   0,   0,   0,   0,   0,   0,  -5, // RANK 6
     -5,   0,   0,   0,   0,   0,   0,  -5, // RANK 7
      0,   0,   0,   5,   5,   0,   0,   0, // RANK 8
];

// - Mild center bonus
#[rustfmt::skip]
pub const QUEEN_PST: [Score; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20, // RANK 1: a1..h1
    -10,   0,   0,   0,   0,   0,   0, -10, // RANK 2
    -10,   0,   5,   5,   5,   5,   0, -10, // RANK 3
     -5,   0,   5,   5,   5,   5,   0,  -5, // RANK 4
      0,   0,   5,   5,   5,   5,   0,  -5, // RANK 5
    -10,   5,   5,   5,   5,   5,   0, -10, // RANK 6
    -10,   0,   5,   0,   0,   0,   0, -10, // RANK 7
    -20, -10, -10,  -5,  -5, -10, -10, -20, // RANK 8
];

// - Penalizes the back ranks, rewards the far ranks
// - This table is the only king safety term
#[rustfmt::skip]
pub const KING_PST: [Score; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 1: a1..h1
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 2
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 3
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 4
    -20, -30, -30, -40, -40, -30, -30, -20, // RANK 5
    -10, -20, -20, -20, -20, -20, -20, -10, // RANK 6
     20,  20,   0,   0,   0,   0,  20,  20, // RANK 7
     20,  30,  10,   0,   0,  10,  30,  20, // RANK 8
];
