use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NnueError {
    #[error("failed to read network file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid network magic: {found:?}")]
    InvalidMagic { found: [u8; 6] },

    #[error("network file ended inside {section}")]
    Truncated { section: &'static str },

    #[error("{section} has {actual} values, expected {expected}")]
    DimensionMismatch {
        section: &'static str,
        expected: usize,
        actual: usize,
    },
}
