//! pixelpipe-filter - Convolution and edge detection
//!
//! Kernel construction ([`OffsetKernel`], [`Kernel`]), the convolution
//! engine that applies them, smoothing presets, Gaussian blur, and
//! gradient-magnitude edge detection.
//!
//! # Examples
//!
//! ```
//! use pixelpipe_core::{ChannelModel, PixelBuffer};
//! use pixelpipe_filter::{gaussian_blur_auto, smooth};
//!
//! let src = PixelBuffer::new(32, 32, ChannelModel::Gray);
//! let soft = smooth(&src).unwrap();
//! let soft = gaussian_blur_auto(&soft, 2).unwrap();
//! assert_eq!(soft.width(), 32);
//! ```

pub mod convolve;
pub mod edge;
pub mod error;
pub mod kernel;

pub use convolve::{convolve_matrix, convolve_offsets, gaussian_blur, gaussian_blur_auto, smooth, smooth_wide};
pub use edge::detect_edges;
pub use error::{FilterError, FilterResult};
pub use kernel::{Kernel, Offset, OffsetKernel};
