//! pixelpipe-transform - Geometric transforms
//!
//! Bilinear [`resize`] and block-mean [`pixelate`]. Both allocate a
//! fresh output buffer and leave the source untouched.

pub mod error;
pub mod pixelate;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use pixelate::pixelate;
pub use scale::resize;
