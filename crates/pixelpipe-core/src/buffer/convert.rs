//! Grayscale conversion
//!
//! Collapses a color buffer to a single 8-bit channel. Two projections
//! are offered: a plain channel mean and a Rec. 601 luma weighting.

use super::{ChannelModel, PixelBuffer, PixelBufferMut};

/// Projection used to collapse RGB to a single gray value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayConversion {
    /// Arithmetic mean of the color channels (truncating)
    Average,
    /// Luma-preserving projection with Rec. 601 weights
    /// (0.299 R + 0.587 G + 0.114 B, rounded)
    #[default]
    Luma,
}

impl GrayConversion {
    #[inline]
    fn project(self, r: u8, g: u8, b: u8) -> u8 {
        match self {
            GrayConversion::Average => ((r as u32 + g as u32 + b as u32) / 3) as u8,
            GrayConversion::Luma => {
                (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32 + 0.5) as u8
            }
        }
    }
}

impl PixelBuffer {
    /// Convert this buffer to single-channel grayscale.
    ///
    /// Grayscale input is returned as a cheap shared clone; color input
    /// produces a new `Gray` buffer with one value per pixel.
    pub fn to_gray(&self, conversion: GrayConversion) -> PixelBuffer {
        if self.channels() == ChannelModel::Gray {
            return self.clone();
        }

        let mut out = PixelBufferMut::new(self.width(), self.height(), ChannelModel::Gray);
        for y in 0..self.height() {
            for x in 0..self.width() {
                let (r, g, b, _) = self.rgba_unchecked(x, y);
                out.set_gray_unchecked(x, y, conversion.project(r, g, b));
            }
        }
        out.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_gray_output_is_single_channel() {
        let mut m = PixelBufferMut::new(3, 3, ChannelModel::Rgb);
        for y in 0..3 {
            for x in 0..3 {
                m.set_rgb_unchecked(x, y, (x * 40) as u8, (y * 40) as u8, 128);
            }
        }
        let buf: PixelBuffer = m.into();

        let gray = buf.to_gray(GrayConversion::Average);
        assert_eq!(gray.channels(), ChannelModel::Gray);
        assert!(gray.sizes_equal(&PixelBuffer::new(3, 3, ChannelModel::Gray)));
    }

    #[test]
    fn test_average_projection() {
        let mut m = PixelBufferMut::new(1, 1, ChannelModel::Rgb);
        m.set_rgb_unchecked(0, 0, 10, 20, 31);
        let buf: PixelBuffer = m.into();
        let gray = buf.to_gray(GrayConversion::Average);
        assert_eq!(gray.gray(0, 0), Some(20));
    }

    #[test]
    fn test_luma_projection_neutral_gray_fixed_point() {
        let mut m = PixelBufferMut::new(1, 1, ChannelModel::Rgba);
        m.set_rgb_unchecked(0, 0, 128, 128, 128);
        let buf: PixelBuffer = m.into();
        let gray = buf.to_gray(GrayConversion::Luma);
        assert_eq!(gray.gray(0, 0), Some(128));
    }

    #[test]
    fn test_gray_input_is_shared_clone() {
        let buf = PixelBuffer::new(5, 5, ChannelModel::Gray);
        let gray = buf.to_gray(GrayConversion::Luma);
        assert_eq!(gray.data().as_ptr(), buf.data().as_ptr());
    }
}
