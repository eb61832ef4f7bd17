//! Gradient-magnitude edge detection
//!
//! Two signed offset kernels estimate the horizontal and vertical
//! intensity gradients; a pixel is an edge when the Euclidean magnitude
//! of the two exceeds the caller's threshold. Operates on grayscale
//! only, so callers convert first.

use pixelpipe_core::{ChannelModel, PixelBuffer};
use rayon::prelude::*;
use tracing::debug;

use crate::kernel::Offset;
use crate::{FilterError, FilterResult};

/// Responds to intensity change along x (left column positive, right
/// column negative).
const VERT_OFFSETS: [Offset; 6] = [
    (-1, -1, 1),
    (-1, 0, 2),
    (-1, 1, 1),
    (1, -1, -1),
    (1, 0, -2),
    (1, 1, -1),
];

/// Responds to intensity change along y (top row positive, bottom row
/// negative).
const HORIZ_OFFSETS: [Offset; 6] = [
    (-1, -1, 1),
    (0, -1, 2),
    (1, -1, 1),
    (-1, 1, -1),
    (0, 1, -2),
    (1, 1, -1),
];

/// Detect edges in a grayscale buffer.
///
/// Produces a binary grayscale buffer of the same dimensions: 255 where
/// the gradient magnitude strictly exceeds `threshold`, 0 elsewhere.
/// Both kernels need a full 3x3 neighborhood, so the one-pixel border
/// is always 0; buffers narrower than 3 pixels in either dimension come
/// back entirely black.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedChannels`] for color input.
pub fn detect_edges(src: &PixelBuffer, threshold: u32) -> FilterResult<PixelBuffer> {
    if src.channels() != ChannelModel::Gray {
        return Err(FilterError::UnsupportedChannels {
            expected: "gray",
            actual: src.channels(),
        });
    }

    debug!(
        width = src.width(),
        height = src.height(),
        threshold,
        "edge detection"
    );

    let width = src.width();
    let height = src.height();
    let mut out = src.create_template();

    if width < 3 || height < 3 {
        return Ok(out.into());
    }

    let stride = out.row_stride();
    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            if y == 0 || y == height - 1 {
                return;
            }
            for x in 1..width - 1 {
                let vert = accumulate(src, x, y, &VERT_OFFSETS);
                let horiz = accumulate(src, x, y, &HORIZ_OFFSETS);
                let magnitude = ((vert * vert + horiz * horiz) as f64).sqrt() as u32;
                if magnitude > threshold {
                    row[x as usize] = 255;
                }
            }
        });

    Ok(out.into())
}

#[inline]
fn accumulate(src: &PixelBuffer, x: u32, y: u32, offsets: &[Offset]) -> i64 {
    let mut sum = 0i64;
    for &(dx, dy, w) in offsets {
        let sx = (x as i64 + dx as i64) as u32;
        let sy = (y as i64 + dy as i64) as u32;
        sum += w as i64 * src.gray_unchecked(sx, sy) as i64;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelpipe_test::{gradient_rgb, uniform_gray, vertical_bar_gray};

    #[test]
    fn test_rejects_color_input() {
        let src = gradient_rgb(4, 4);
        assert!(matches!(
            detect_edges(&src, 70),
            Err(FilterError::UnsupportedChannels { .. })
        ));
    }

    #[test]
    fn test_uniform_field_has_no_edges() {
        let src = uniform_gray(8, 8, 130);
        let out = detect_edges(&src, 0).unwrap();
        assert!(out.data().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_vertical_bar_marks_flanks() {
        // white column at x = 2 in a 4x4 black field: the gradient is
        // strong one pixel to its left; x = 2 itself is symmetric (both
        // kernels cancel) and x = 3 is border
        let src = vertical_bar_gray(4, 4, 2);
        let out = detect_edges(&src, 10).unwrap();
        for y in 1..3 {
            assert_eq!(out.gray(1, y), Some(255));
            assert_eq!(out.gray(2, y), Some(0));
        }
        // border stays black
        for x in 0..4 {
            assert_eq!(out.gray(x, 0), Some(0));
            assert_eq!(out.gray(x, 3), Some(0));
        }
        for y in 0..4 {
            assert_eq!(out.gray(0, y), Some(0));
            assert_eq!(out.gray(3, y), Some(0));
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        // bar flank magnitude in a tall field is sqrt(1020²) = 1020
        let src = vertical_bar_gray(5, 5, 2);
        let below = detect_edges(&src, 1019).unwrap();
        let at = detect_edges(&src, 1020).unwrap();
        assert_eq!(below.gray(1, 2), Some(255));
        assert_eq!(at.gray(1, 2), Some(0));
    }

    #[test]
    fn test_tiny_buffers_come_back_black() {
        let src = vertical_bar_gray(2, 4, 1);
        let out = detect_edges(&src, 0).unwrap();
        assert!(out.data().iter().all(|&s| s == 0));
        let empty = PixelBuffer::new(0, 0, ChannelModel::Gray);
        assert!(detect_edges(&empty, 0).unwrap().is_empty());
    }
}
