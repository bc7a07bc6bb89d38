use chess::{Board, BoardStatus, Color, Piece, Square, ALL_SQUARES, EMPTY};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;

/// Flips a square vertically (a1 <-> a8), keeping the file.
#[inline(always)]
pub fn mirror(square: Square) -> Square {
    ALL_SQUARES[square.to_index() ^ 56]
}

#[inline(always)]
pub fn in_check(board: &Board) -> bool {
    *board.checkers() != EMPTY
}

/// Checkmate, stalemate or a dead position by material.
#[inline(always)]
pub fn is_game_over(board: &Board) -> bool {
    board.status() != BoardStatus::Ongoing || has_insufficient_material(board)
}

/// Checks if the position has insufficient material for either side to force checkmate.
/// Returns true for dead drawn positions like:
/// - K vs K
/// - K+N vs K
/// - K and any number of bishops on one square color vs K and bishops on that same color
#[inline(always)]
pub fn has_insufficient_material(board: &Board) -> bool {
    cannot_mate(board, Color::White) && cannot_mate(board, Color::Black)
}

// A lone knight mates only with the help of an enemy piece that can block,
// and bishops confined to one square color never mate
#[inline(always)]
fn cannot_mate(board: &Board, color: Color) -> bool {
    let own = *board.color_combined(color);
    let pawns = *board.pieces(Piece::Pawn);
    let knights = *board.pieces(Piece::Knight);
    let bishops = *board.pieces(Piece::Bishop);

    if own & (pawns | *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen)) != EMPTY {
        return false;
    }

    if own & knights != EMPTY {
        let kings_and_queens = *board.pieces(Piece::King) | *board.pieces(Piece::Queen);
        let their_helpers = board.color_combined(!color).0 & !kings_and_queens.0;
        return own.popcnt() <= 2 && their_helpers == 0;
    }

    if own & bishops != EMPTY {
        let one_shade = bishops.0 & LIGHT_SQUARES_MASK == 0 || bishops.0 & !LIGHT_SQUARES_MASK == 0;
        return one_shade && pawns == EMPTY && knights == EMPTY;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn board(fen: &str) -> Board {
        Board::from_str(fen).unwrap()
    }

    #[test]
    fn test_mirror_is_vertical_flip() {
        assert_eq!(mirror(Square::A1), Square::A8);
        assert_eq!(mirror(Square::E2), Square::E7);
        assert_eq!(mirror(mirror(Square::G6)), Square::G6);
    }

    #[test]
    fn test_checkmate_detection() {
        // Fool's mate
        let b = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(in_check(&b));
        assert_eq!(b.status(), BoardStatus::Checkmate);
        assert!(is_game_over(&b));
    }

    #[test]
    fn test_stalemate_detection() {
        let b = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(b.status(), BoardStatus::Stalemate);
        assert!(!in_check(&b));
        assert!(is_game_over(&b));
    }

    #[test]
    fn test_insufficient_material() {
        assert!(has_insufficient_material(&board("8/8/4k3/8/8/3K4/8/8 w - - 0 1")));
        assert!(has_insufficient_material(&board("8/8/4k3/8/8/3KN3/8/8 w - - 0 1")));
        assert!(has_insufficient_material(&board("8/8/4k3/8/8/3KB3/8/8 b - - 0 1")));
        // Bishops on same colored squares (c1 and f4 are both dark)
        assert!(has_insufficient_material(&board("8/8/4k3/8/5b2/3K4/8/2B5 w - - 0 1")));
        // Bishops on opposite colors can still mate
        assert!(!has_insufficient_material(&board("8/8/4k3/8/4b3/3K4/8/2B5 w - - 0 1")));
        assert!(!has_insufficient_material(&board("8/8/4k3/8/8/3K4/4P3/8 w - - 0 1")));
        assert!(!has_insufficient_material(&Board::default()));
    }

    #[test]
    fn test_insufficient_material_with_several_minors() {
        // Two light-squared bishops (b1 and d1) against a bare king
        assert!(has_insufficient_material(&board("8/8/4k3/8/8/3K4/8/1B1B4 w - - 0 1")));
        // Two knights, or a knight facing an enemy minor, leave mating chances
        assert!(!has_insufficient_material(&board("8/8/4k3/8/8/3K4/8/1N1N4 w - - 0 1")));
        assert!(!has_insufficient_material(&board("8/8/4k3/8/4n3/3K4/8/1N6 w - - 0 1")));
        assert!(!has_insufficient_material(&board("8/8/4k3/4b3/8/3K4/8/1N6 w - - 0 1")));
        // The knight cannot use the queen to mate, the queen side still can
        assert!(!has_insufficient_material(&board("8/8/4k3/4q3/8/3K4/8/1N6 w - - 0 1")));
    }
}
