//! Pixel-wise arithmetic
//!
//! Brightness adjustment and absolute difference of two buffers. Both
//! allocate a new output; inputs are never modified.

use super::{ChannelModel, PixelBuffer, PixelBufferMut};

impl PixelBuffer {
    /// Brighten (or darken) the buffer by a percentage.
    ///
    /// Adds `round(percentage * 255 / 100)` to every color channel,
    /// clamped to [0, 255]. Negative percentages darken. Alpha, where
    /// present, stays opaque.
    pub fn brighten(&self, percentage: i32) -> PixelBuffer {
        let amount = (percentage as f32 * 255.0 / 100.0).round() as i32;

        let mut out = self.create_template();
        let color_samples = self.channels().color_samples();
        for y in 0..self.height() {
            for x in 0..self.width() {
                for c in 0..color_samples {
                    let v = self.sample_unchecked(x, y, c) as i32 + amount;
                    out.set_sample_unchecked(x, y, c, v.clamp(0, 255) as u8);
                }
                if self.channels().has_alpha() {
                    out.set_sample_unchecked(x, y, 3, 255);
                }
            }
        }
        out.into()
    }

    /// Absolute per-channel difference of two buffers.
    ///
    /// The output is cropped to the overlap of the two inputs, anchored
    /// at the top-left corner; no scaling or alignment is attempted.
    /// Each output channel is `|a - b|`, alpha forced opaque. The
    /// result is grayscale iff both inputs are grayscale, RGB
    /// otherwise. A zero-sized overlap yields a degenerate buffer.
    pub fn abs_difference(&self, other: &PixelBuffer) -> PixelBuffer {
        let width = self.width().min(other.width());
        let height = self.height().min(other.height());
        let channels =
            if self.channels() == ChannelModel::Gray && other.channels() == ChannelModel::Gray {
                ChannelModel::Gray
            } else {
                ChannelModel::Rgb
            };

        let mut out = PixelBufferMut::new(width, height, channels);
        for y in 0..height {
            for x in 0..width {
                match channels {
                    ChannelModel::Gray => {
                        let a = self.gray_unchecked(x, y) as i32;
                        let b = other.gray_unchecked(x, y) as i32;
                        out.set_gray_unchecked(x, y, (a - b).unsigned_abs() as u8);
                    }
                    _ => {
                        let (ra, ga, ba, _) = self.rgba_unchecked(x, y);
                        let (rb, gb, bb, _) = other.rgba_unchecked(x, y);
                        out.set_rgb_unchecked(
                            x,
                            y,
                            (ra as i32 - rb as i32).unsigned_abs() as u8,
                            (ga as i32 - gb as i32).unsigned_abs() as u8,
                            (ba as i32 - bb as i32).unsigned_abs() as u8,
                        );
                    }
                }
            }
        }
        out.into()
    }
}
