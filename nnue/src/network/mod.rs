pub mod accumulator;
pub mod inference;
pub mod model;

pub use accumulator::{Accumulator, AccumulatorState};
pub use model::Network;

pub use crate::encoding::NUM_FEATURES as INPUT_SIZE;

/// Width of the accumulator (first hidden layer).
pub const H1: usize = 256;

/// Width of the second hidden layer.
pub const H2: usize = 32;

/// The raw network output is divided by this to get centipawns.
pub const SCALE: i64 = 64;

/// Accepted file magics. The header is padded to `HEADER_SIZE` bytes.
pub const MAGICS: [&[u8; 6]; 2] = [b"NNUEF\n", b"NNUE\0\n"];
pub const HEADER_SIZE: usize = 128;
