// Evaluation capability shared by every backend.
//
// The search depends only on this trait. Concrete implementations live in
// their own crates:
// - `hce` crate: material and piece-square tables
// - `nnue` crate: incrementally updated neural network

use chess::{Board, ChessMove};
use utils::Position;

use crate::scores::Score;

pub trait Evaluator: Send {
    fn name(&self) -> String;

    /// Scores the position from the side to move's perspective.
    /// `ply` is the distance from the search root, used to scale mate scores.
    fn evaluate(&mut self, position: &Position, ply: usize) -> Score;

    /// Rebuilds any incremental state for a new root position.
    fn refresh(&mut self, _board: &Board) {}

    /// Called right after the search plays `mv`, taking `before` to `after`.
    fn on_make(&mut self, _before: &Board, _mv: ChessMove, _after: &Board) {}

    /// Called right after the search takes back its last move.
    fn on_unmake(&mut self) {}
}
