//! Bilinear resize

use pixelpipe_core::PixelBuffer;
use tracing::debug;

use crate::{TransformError, TransformResult};

/// Resize a buffer by a uniform scale factor using bilinear sampling.
///
/// Output dimensions are `floor(width * scale)` by
/// `floor(height * scale)`; a factor small enough to floor a dimension
/// to zero yields a legal degenerate buffer. Each output pixel maps
/// back to fractional source coordinates, samples the four surrounding
/// source pixels (clamped at the right and bottom extents), and blends
/// per channel with rounding to nearest.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `scale` is not a
/// positive finite number.
pub fn resize(src: &PixelBuffer, scale: f32) -> TransformResult<PixelBuffer> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(TransformError::InvalidParameters(format!(
            "scale must be positive and finite, got {scale}"
        )));
    }

    let new_width = (src.width() as f32 * scale) as u32;
    let new_height = (src.height() as f32 * scale) as u32;
    debug!(
        width = src.width(),
        height = src.height(),
        new_width,
        new_height,
        scale,
        "bilinear resize"
    );

    let mut out = pixelpipe_core::PixelBufferMut::new(new_width, new_height, src.channels());
    if new_width == 0 || new_height == 0 || src.is_empty() {
        return Ok(out.into());
    }

    let samples = src.channels().samples();
    let max_x = src.width() - 1;
    let max_y = src.height() - 1;

    for y in 0..new_height {
        let gy = y as f32 / scale;
        let y0 = (gy as u32).min(max_y);
        let y1 = (y0 + 1).min(max_y);
        let fy = gy - y0 as f32;
        for x in 0..new_width {
            let gx = x as f32 / scale;
            let x0 = (gx as u32).min(max_x);
            let x1 = (x0 + 1).min(max_x);
            let fx = gx - x0 as f32;
            for c in 0..samples {
                let v00 = src.sample_unchecked(x0, y0, c) as f32;
                let v10 = src.sample_unchecked(x1, y0, c) as f32;
                let v01 = src.sample_unchecked(x0, y1, c) as f32;
                let v11 = src.sample_unchecked(x1, y1, c) as f32;
                let top = v00 + (v10 - v00) * fx;
                let bottom = v01 + (v11 - v01) * fx;
                let v = top + (bottom - top) * fy;
                out.set_sample_unchecked(x, y, c, (v + 0.5) as u8);
            }
        }
    }

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelpipe_core::{ChannelModel, PixelBufferMut};
    use pixelpipe_test::{gradient_gray, max_sample_diff, uniform_gray};

    #[test]
    fn test_rejects_bad_scale() {
        let src = uniform_gray(4, 4, 10);
        assert!(resize(&src, 0.0).is_err());
        assert!(resize(&src, -1.0).is_err());
        assert!(resize(&src, f32::NAN).is_err());
        assert!(resize(&src, f32::INFINITY).is_err());
    }

    #[test]
    fn test_scale_one_is_identity() {
        let src = gradient_gray(7, 5);
        let out = resize(&src, 1.0).unwrap();
        assert!(out.sizes_equal(&src));
        assert_eq!(max_sample_diff(&src, &out), 0);
    }

    #[test]
    fn test_dimensions_floor() {
        let src = uniform_gray(5, 5, 9);
        let out = resize(&src, 0.5).unwrap();
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 2);
        let out = resize(&src, 1.5).unwrap();
        assert_eq!(out.width(), 7);
        assert_eq!(out.height(), 7);
    }

    #[test]
    fn test_degenerate_output_is_legal() {
        let src = uniform_gray(3, 3, 9);
        let out = resize(&src, 0.1).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.channels(), ChannelModel::Gray);
    }

    #[test]
    fn test_uniform_field_survives_scaling() {
        let src = uniform_gray(8, 8, 201);
        let down = resize(&src, 0.5).unwrap();
        assert!(down.data().iter().all(|&s| s == 201));
        let up = resize(&src, 2.0).unwrap();
        assert!(up.data().iter().all(|&s| s == 201));
    }

    #[test]
    fn test_upscale_interpolates_between_neighbors() {
        let mut m = PixelBufferMut::new(2, 1, ChannelModel::Gray);
        m.set_gray_unchecked(0, 0, 0);
        m.set_gray_unchecked(1, 0, 100);
        let src: PixelBuffer = m.into();
        let out = resize(&src, 2.0).unwrap();
        assert_eq!(out.width(), 4);
        // gx for x = 1 is 0.5, halfway between 0 and 100
        assert_eq!(out.gray(0, 0), Some(0));
        assert_eq!(out.gray(1, 0), Some(50));
        assert_eq!(out.gray(2, 0), Some(100));
        // gx for x = 3 is 1.5, clamped to the last source column
        assert_eq!(out.gray(3, 0), Some(100));
    }

    #[test]
    fn test_channel_model_preserved() {
        let src = pixelpipe_test::gradient_rgb(6, 6);
        let out = resize(&src, 0.5).unwrap();
        assert_eq!(out.channels(), ChannelModel::Rgb);
        assert_eq!(out.width(), 3);
    }
}
