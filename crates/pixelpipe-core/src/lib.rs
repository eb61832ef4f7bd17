//! pixelpipe-core - Pixel buffer data structures for the pixelpipe
//! image transformation pipeline
//!
//! This crate provides the foundation used by every pipeline stage:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - the image container
//!   (immutable snapshot / under-construction buffer)
//! - [`ChannelModel`] - 8-bit gray, RGB, and RGBA channel layouts
//! - Grayscale conversion, brightness adjustment, and absolute
//!   difference of two buffers
//!
//! All operations are pure functions of their inputs: a transform reads
//! immutable buffers and allocates a brand-new output, so independent
//! operations never contend and per-pixel work is trivially
//! parallelizable downstream.

pub mod buffer;
pub mod error;

pub use buffer::{ChannelModel, GrayConversion, PixelBuffer, PixelBufferMut};
pub use error::{Error, Result};
