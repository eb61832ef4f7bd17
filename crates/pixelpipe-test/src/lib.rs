//! pixelpipe-test - Synthetic image builders and comparison helpers
//!
//! The pipeline's boundary artifact is a raw [`PixelBuffer`], so every
//! test works on synthetic buffers built here rather than on decoded
//! image files. Patterns are chosen to exercise specific behaviors:
//! uniform fields for no-op checks, ramps for smoothing, bars and
//! impulses for edge and kernel-support checks.

use pixelpipe_core::{ChannelModel, PixelBuffer, PixelBufferMut};

/// A grayscale buffer with every pixel set to `value`.
pub fn uniform_gray(width: u32, height: u32, value: u8) -> PixelBuffer {
    let mut m = PixelBufferMut::new(width, height, ChannelModel::Gray);
    m.fill(value);
    m.into()
}

/// A grayscale ramp: pixel (x, y) has value `(x * 50 + y * 10) % 256`.
pub fn gradient_gray(width: u32, height: u32) -> PixelBuffer {
    let mut m = PixelBufferMut::new(width, height, ChannelModel::Gray);
    for y in 0..height {
        for x in 0..width {
            m.set_gray_unchecked(x, y, ((x * 50 + y * 10) % 256) as u8);
        }
    }
    m.into()
}

/// An RGB ramp: red follows x, green follows y, blue is constant.
pub fn gradient_rgb(width: u32, height: u32) -> PixelBuffer {
    let mut m = PixelBufferMut::new(width, height, ChannelModel::Rgb);
    for y in 0..height {
        for x in 0..width {
            m.set_rgb_unchecked(x, y, ((x * 50) % 256) as u8, ((y * 50) % 256) as u8, 128);
        }
    }
    m.into()
}

/// A black grayscale buffer with a single white column at `bar_x`.
pub fn vertical_bar_gray(width: u32, height: u32, bar_x: u32) -> PixelBuffer {
    let mut m = PixelBufferMut::new(width, height, ChannelModel::Gray);
    for y in 0..height {
        m.set_gray_unchecked(bar_x, y, 255);
    }
    m.into()
}

/// A black grayscale buffer with a single bright pixel.
pub fn impulse_gray(width: u32, height: u32, x: u32, y: u32, value: u8) -> PixelBuffer {
    let mut m = PixelBufferMut::new(width, height, ChannelModel::Gray);
    m.set_gray_unchecked(x, y, value);
    m.into()
}

/// Largest per-sample absolute difference between two buffers of equal
/// size and channel model.
///
/// # Panics
///
/// Panics if the buffers differ in dimensions or channel model.
pub fn max_sample_diff(a: &PixelBuffer, b: &PixelBuffer) -> u8 {
    assert!(a.sizes_equal(b), "buffers differ in size or channel model");
    a.data()
        .iter()
        .zip(b.data().iter())
        .map(|(&x, &y)| x.abs_diff(y))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_gray() {
        let buf = uniform_gray(4, 3, 99);
        assert!(buf.data().iter().all(|&s| s == 99));
    }

    #[test]
    fn test_vertical_bar() {
        let buf = vertical_bar_gray(4, 4, 2);
        assert_eq!(buf.gray(2, 3), Some(255));
        assert_eq!(buf.gray(1, 3), Some(0));
    }

    #[test]
    fn test_max_sample_diff() {
        let a = uniform_gray(2, 2, 10);
        let b = uniform_gray(2, 2, 14);
        assert_eq!(max_sample_diff(&a, &b), 4);
        assert_eq!(max_sample_diff(&a, &a), 0);
    }
}
