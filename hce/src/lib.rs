mod eval_material;
mod pst;

use chess::Color;
use evaluation::{terminal_score, PieceValues, Score};
use utils::Position;

pub use pst::square_value;

/// Static evaluation: material plus piece-square tables.
///
/// King safety comes only from the king's table; there are no separate
/// mobility, pawn-structure or king-attack terms.
///
/// <https://www.chessprogramming.org/Simplified_Evaluation_Function>
pub struct Evaluator {
    piece_values: PieceValues,
}

impl Evaluator {
    pub fn new(piece_values: PieceValues) -> Self {
        Self { piece_values }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(PieceValues::default())
    }
}

impl evaluation::Evaluator for Evaluator {
    fn name(&self) -> String {
        "HCE".to_string()
    }

    fn evaluate(&mut self, position: &Position, ply: usize) -> Score {
        let board = position.board();
        if let Some(score) = terminal_score(board, ply) {
            return score;
        }

        let mut cp = 0;
        cp += eval_material::evaluate(board, Color::White, &self.piece_values);
        cp -= eval_material::evaluate(board, Color::Black, &self.piece_values);

        match board.side_to_move() {
            Color::White => cp,
            Color::Black => -cp,
        }
    }
}
