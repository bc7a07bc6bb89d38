mod book;
mod config;
pub mod engine;
mod move_ordering;
mod transposition;

/// Hard cap on distance from the root. The main search drops into
/// quiescence here and quiescence returns its stand-pat score.
pub const MAX_PLY: usize = 128;

pub use book::{select_book_move, BookEntry, BookError, MemoryBook, OpeningBook};
pub use config::{ConfigParam, EngineConfig};
pub use engine::{Engine, MoveSource, SearchLimits, SearchOutcome};
pub use transposition::{Bound, TTEntry, TranspositionTable};
