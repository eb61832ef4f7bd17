//! Pixelpipe - pixel-level image transformation pipeline
//!
//! A small image processing library built around an immutable
//! [`PixelBuffer`], with grayscale conversion, brightness adjustment,
//! buffer arithmetic, convolution-based smoothing and blurring,
//! geometric transforms, edge detection, and a staged analysis
//! pipeline that chains them.
//!
//! # Example
//!
//! ```
//! use pixelpipe::{ChannelModel, PixelBuffer};
//! use pixelpipe::pipeline::{run, PipelineConfig};
//!
//! let input = PixelBuffer::new(64, 64, ChannelModel::Rgb);
//! let edges = run(&input, &PipelineConfig::default()).unwrap();
//! assert_eq!(edges.channels(), ChannelModel::Gray);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixelpipe_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixelpipe_filter as filter;
pub use pixelpipe_transform as transform;

pub mod pipeline;
