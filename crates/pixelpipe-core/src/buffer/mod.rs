//! PixelBuffer - the image container used by every pipeline stage
//!
//! # Sample layout
//!
//! - Samples are stored row-major, interleaved, one `u8` per sample
//! - A pixel at (x, y) starts at `(y * width + x) * channels.samples()`
//! - For RGBA, sample order is R, G, B, A
//!
//! Storing plain bytes (rather than packing channels into words) keeps
//! per-channel access explicit; packing is a property of a particular
//! backing store, not of the buffer contract.
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for cheap cloning (shared ownership) and is
//! immutable once constructed. To populate pixel data, build a
//! [`PixelBufferMut`] (or convert via [`PixelBuffer::try_into_mut`] /
//! [`PixelBuffer::to_mut`]), then freeze it with `Into<PixelBuffer>`.
//! Every transform allocates a fresh output buffer; no operation
//! mutates a buffer that has already been handed to a caller.

mod access;
pub mod arith;
pub mod convert;

pub use convert::GrayConversion;

use std::fmt;
use std::sync::Arc;

/// Channel model of a buffer
///
/// Every sample is an 8-bit value in [0, 255]. Alpha, where present,
/// is opaque (255) in every buffer the pipeline produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelModel {
    /// Single-channel grayscale
    Gray,
    /// Three-channel color
    Rgb,
    /// Four-channel color with alpha
    Rgba,
}

impl ChannelModel {
    /// Number of samples per pixel.
    #[inline]
    pub fn samples(self) -> usize {
        match self {
            ChannelModel::Gray => 1,
            ChannelModel::Rgb => 3,
            ChannelModel::Rgba => 4,
        }
    }

    /// Number of color samples per pixel (alpha excluded).
    #[inline]
    pub fn color_samples(self) -> usize {
        match self {
            ChannelModel::Gray => 1,
            ChannelModel::Rgb | ChannelModel::Rgba => 3,
        }
    }

    /// Whether the model carries an alpha sample.
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, ChannelModel::Rgba)
    }
}

impl fmt::Display for ChannelModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChannelModel::Gray => "gray",
            ChannelModel::Rgb => "rgb",
            ChannelModel::Rgba => "rgba",
        };
        write!(f, "{name}")
    }
}

/// Internal buffer data
#[derive(Debug)]
struct BufferData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Channel model
    channels: ChannelModel,
    /// Interleaved sample data, row-major
    data: Vec<u8>,
}

impl BufferData {
    fn new(width: u32, height: u32, channels: ChannelModel) -> Self {
        let len = width as usize * height as usize * channels.samples();
        BufferData {
            width,
            height,
            channels,
            data: vec![0u8; len],
        }
    }
}

/// Immutable pixel buffer
///
/// Cloning is cheap (shared `Arc`). Use [`PixelBuffer::deep_clone`] for
/// an independent copy.
///
/// A buffer with zero width or height is a legal degenerate value; it
/// can come out of an extreme downscale and every operation treats it
/// as an empty pixel set rather than an error.
///
/// # Examples
///
/// ```
/// use pixelpipe_core::{ChannelModel, PixelBuffer};
///
/// let buf = PixelBuffer::new(640, 480, ChannelModel::Gray);
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.height(), 480);
/// assert_eq!(buf.gray(0, 0), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PixelBuffer {
    /// Create a new zero-initialized buffer.
    ///
    /// Every pixel is fully populated (with zeros) before the buffer is
    /// observable; a partially written buffer can never escape.
    pub fn new(width: u32, height: u32, channels: ChannelModel) -> Self {
        PixelBuffer {
            inner: Arc::new(BufferData::new(width, height, channels)),
        }
    }

    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel model.
    #[inline]
    pub fn channels(&self) -> ChannelModel {
        self.inner.channels
    }

    /// Whether the buffer contains no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.width == 0 || self.inner.height == 0
    }

    /// Number of bytes per row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.inner.width as usize * self.inner.channels.samples()
    }

    /// Get raw access to the interleaved sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the samples of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.row_stride();
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two buffers have the same width, height, and channel model.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.channels == other.inner.channels
    }

    /// Create a zeroed mutable buffer with the same dimensions and
    /// channel model as this one.
    pub fn create_template(&self) -> PixelBufferMut {
        PixelBufferMut::new(self.inner.width, self.inner.height, self.inner.channels)
    }

    /// Create a deep copy of this buffer.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        PixelBuffer {
            inner: Arc::new(BufferData {
                width: self.inner.width,
                height: self.inner.height,
                channels: self.inner.channels,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the buffer data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a mutable copy of this buffer.
    ///
    /// Always allocates a new copy that can be modified.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: BufferData {
                width: self.inner.width,
                height: self.inner.height,
                channels: self.inner.channels,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable pixel buffer
///
/// Exists only while a new buffer is being populated; freeze it with
/// `Into<PixelBuffer>` before handing it to a caller. Exclusive access
/// is enforced at compile time, so no already-returned buffer can ever
/// be mutated.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Create a new zero-initialized mutable buffer.
    pub fn new(width: u32, height: u32, channels: ChannelModel) -> Self {
        PixelBufferMut {
            inner: BufferData::new(width, height, channels),
        }
    }

    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel model.
    #[inline]
    pub fn channels(&self) -> ChannelModel {
        self.inner.channels
    }

    /// Number of bytes per row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.inner.width as usize * self.inner.channels.samples()
    }

    /// Get raw access to the interleaved sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable raw access to the interleaved sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.row_stride();
        let start = y as usize * stride;
        &mut self.inner.data[start..start + stride]
    }

    /// Fill every sample with a single value.
    pub fn fill(&mut self, value: u8) {
        self.inner.data.fill(value);
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buf: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buf.inner),
        }
    }
}
