//! Error types for pixelpipe-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Coordinate violations and contract failures are raised synchronously
//! at the offending call; nothing is retried or recovered internally.

use thiserror::Error;

/// Pixelpipe core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel access outside the buffer extent
    #[error("pixel access out of bounds: ({x}, {y}) in {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
