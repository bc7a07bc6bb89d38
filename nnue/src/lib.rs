pub mod encoding;
pub mod error;
pub mod evaluator;
pub mod network;

pub use error::NnueError;
pub use evaluator::Evaluator;
pub use network::{Accumulator, Network};

#[cfg(test)]
mod tests;
