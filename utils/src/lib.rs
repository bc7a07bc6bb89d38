mod board;
mod moves;
mod position;

pub use board::{has_insufficient_material, in_check, is_game_over, mirror};
pub use moves::{captured_piece, is_capture, is_tactical, legal_moves, parse_uci_move};
pub use position::Position;
