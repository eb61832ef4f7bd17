//! Per-channel pixel access
//!
//! Checked getters return `Option` (None when (x, y) falls outside the
//! buffer), checked setters return `Result` with [`Error::OutOfBounds`],
//! and the `*_unchecked` variants panic on bad coordinates. Loop bounds
//! in the transform code are derived from the buffer extent, so the
//! unchecked forms carry the hot paths.

use super::{ChannelModel, PixelBuffer, PixelBufferMut};
use crate::error::{Error, Result};

#[inline]
fn sample_index(width: u32, channels: ChannelModel, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * channels.samples()
}

impl PixelBuffer {
    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }

    /// Get the grayscale value at (x, y).
    ///
    /// Only valid for [`ChannelModel::Gray`] buffers; returns `None`
    /// for color buffers or out-of-bounds coordinates.
    pub fn gray(&self, x: u32, y: u32) -> Option<u8> {
        if self.channels() != ChannelModel::Gray || !self.in_bounds(x, y) {
            return None;
        }
        Some(self.gray_unchecked(x, y))
    }

    /// Get the grayscale value at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is not grayscale or the coordinates are out
    /// of bounds.
    #[inline]
    pub fn gray_unchecked(&self, x: u32, y: u32) -> u8 {
        debug_assert_eq!(self.channels(), ChannelModel::Gray);
        self.data()[sample_index(self.width(), self.channels(), x, y)]
    }

    /// Get the RGB values at (x, y).
    ///
    /// Grayscale buffers expand to `r = g = b`. Returns `None` for
    /// out-of-bounds coordinates.
    pub fn rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let (r, g, b, _) = self.rgba_unchecked(x, y);
        Some((r, g, b))
    }

    /// Get the RGBA values at (x, y).
    ///
    /// Grayscale buffers expand to `r = g = b`; buffers without an
    /// alpha sample read as opaque (255).
    pub fn rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.rgba_unchecked(x, y))
    }

    /// Get the RGBA values at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn rgba_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let i = sample_index(self.width(), self.channels(), x, y);
        let data = self.data();
        match self.channels() {
            ChannelModel::Gray => {
                let v = data[i];
                (v, v, v, 255)
            }
            ChannelModel::Rgb => (data[i], data[i + 1], data[i + 2], 255),
            ChannelModel::Rgba => (data[i], data[i + 1], data[i + 2], data[i + 3]),
        }
    }

    /// Get a single sample at (x, y).
    ///
    /// `channel` indexes into the buffer's own model (0 for gray, 0-2
    /// for RGB, 0-3 for RGBA).
    pub fn sample(&self, x: u32, y: u32, channel: usize) -> Option<u8> {
        if !self.in_bounds(x, y) || channel >= self.channels().samples() {
            return None;
        }
        Some(self.sample_unchecked(x, y, channel))
    }

    /// Get a single sample at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel index are out of bounds.
    #[inline]
    pub fn sample_unchecked(&self, x: u32, y: u32, channel: usize) -> u8 {
        self.data()[sample_index(self.width(), self.channels(), x, y) + channel]
    }
}

impl PixelBufferMut {
    #[inline]
    fn bounds_check(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    /// Get the grayscale value at (x, y).
    pub fn gray(&self, x: u32, y: u32) -> Option<u8> {
        if self.channels() != ChannelModel::Gray || x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.data()[sample_index(self.width(), self.channels(), x, y)])
    }

    /// Set a grayscale value at (x, y).
    ///
    /// On color buffers the value is written to every color channel
    /// (alpha forced opaque).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside
    /// the buffer extent.
    pub fn set_gray(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        self.bounds_check(x, y)?;
        self.set_gray_unchecked(x, y, value);
        Ok(())
    }

    /// Set a grayscale value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_gray_unchecked(&mut self, x: u32, y: u32, value: u8) {
        let i = sample_index(self.width(), self.channels(), x, y);
        match self.channels() {
            ChannelModel::Gray => self.data_mut()[i] = value,
            ChannelModel::Rgb => self.data_mut()[i..i + 3].fill(value),
            ChannelModel::Rgba => {
                let data = self.data_mut();
                data[i..i + 3].fill(value);
                data[i + 3] = 255;
            }
        }
    }

    /// Set an RGB value at (x, y), alpha forced opaque.
    ///
    /// On grayscale buffers the truncating mean of the three components
    /// is stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside
    /// the buffer extent.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.bounds_check(x, y)?;
        self.set_rgb_unchecked(x, y, r, g, b);
        Ok(())
    }

    /// Set an RGB value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let i = sample_index(self.width(), self.channels(), x, y);
        match self.channels() {
            ChannelModel::Gray => {
                self.data_mut()[i] = ((r as u32 + g as u32 + b as u32) / 3) as u8;
            }
            ChannelModel::Rgb => {
                let data = self.data_mut();
                data[i] = r;
                data[i + 1] = g;
                data[i + 2] = b;
            }
            ChannelModel::Rgba => {
                let data = self.data_mut();
                data[i] = r;
                data[i + 1] = g;
                data[i + 2] = b;
                data[i + 3] = 255;
            }
        }
    }

    /// Set a single sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for bad coordinates, or
    /// [`Error::InvalidParameter`] for a channel index outside the
    /// buffer's model.
    pub fn set_sample(&mut self, x: u32, y: u32, channel: usize, value: u8) -> Result<()> {
        self.bounds_check(x, y)?;
        if channel >= self.channels().samples() {
            return Err(Error::InvalidParameter(format!(
                "channel {channel} out of range for {} buffer",
                self.channels()
            )));
        }
        self.set_sample_unchecked(x, y, channel, value);
        Ok(())
    }

    /// Set a single sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel index are out of bounds.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, channel: usize, value: u8) {
        let i = sample_index(self.width(), self.channels(), x, y) + channel;
        self.data_mut()[i] = value;
    }
}
