mod table;

pub use table::{Bound, TTEntry, TranspositionTable};
