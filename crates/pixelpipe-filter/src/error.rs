//! Error types for pixelpipe-filter

use pixelpipe_core::ChannelModel;
use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixelpipe_core::Error),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Unsupported channel model for this operation
    #[error("unsupported channel model: expected {expected}, got {actual}")]
    UnsupportedChannels {
        /// Expected channel model description
        expected: &'static str,
        /// Actual channel model
        actual: ChannelModel,
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
