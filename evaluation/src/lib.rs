pub mod piece_values;
pub mod scores;
mod terminal;
mod traits;

pub use piece_values::PieceValues;
pub use scores::Score;
pub use terminal::terminal_score;
pub use traits::Evaluator;
