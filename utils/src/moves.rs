use std::str::FromStr;

use chess::{Board, ChessMove, MoveGen, Piece, Square};

use crate::board::in_check;

#[inline(always)]
pub fn legal_moves(board: &Board) -> Vec<ChessMove> {
    MoveGen::new_legal(board).collect()
}

/// Returns the captured piece and the square it stood on.
/// En passant captures report the pawn behind the destination square.
#[inline(always)]
pub fn captured_piece(board: &Board, mv: ChessMove) -> Option<(Piece, Square)> {
    let dest = mv.get_dest();
    if let Some(piece) = board.piece_on(dest) {
        return Some((piece, dest));
    }

    let source = mv.get_source();
    if board.piece_on(source) == Some(Piece::Pawn) && source.get_file() != dest.get_file() {
        let square = Square::make_square(source.get_rank(), dest.get_file());
        return Some((Piece::Pawn, square));
    }

    None
}

#[inline(always)]
pub fn is_capture(board: &Board, mv: ChessMove) -> bool {
    captured_piece(board, mv).is_some()
}

#[inline(always)]
pub fn gives_check(board: &Board, mv: ChessMove) -> bool {
    in_check(&board.make_move_new(mv))
}

/// Captures, promotions and checking moves.
#[inline(always)]
pub fn is_tactical(board: &Board, mv: ChessMove) -> bool {
    is_capture(board, mv) || mv.get_promotion().is_some() || gives_check(board, mv)
}

/// Parses a move in UCI coordinate notation (`e2e4`, `e7e8q`) and checks it is legal.
pub fn parse_uci_move(board: &Board, text: &str) -> Option<ChessMove> {
    let text = text.trim();
    if text.len() < 4 || text.len() > 5 || !text.is_ascii() {
        return None;
    }

    let source = Square::from_str(&text[0..2]).ok()?;
    let dest = Square::from_str(&text[2..4]).ok()?;
    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(b'q') => Some(Piece::Queen),
        Some(b'r') => Some(Piece::Rook),
        Some(b'b') => Some(Piece::Bishop),
        Some(b'n') => Some(Piece::Knight),
        Some(_) => return None,
    };

    let mv = ChessMove::new(source, dest, promotion);
    board.legal(mv).then_some(mv)
}
