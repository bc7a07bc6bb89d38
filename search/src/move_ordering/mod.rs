mod main;
mod quiescence;

pub use main::order_moves;
pub use quiescence::tactical_moves;

/// Upper bound on legal moves in any chess position (218) with headroom.
pub const MAX_MOVES: usize = 256;

pub type MoveList = arrayvec::ArrayVec<chess::ChessMove, MAX_MOVES>;
