//! Convolution engine
//!
//! Applies [`OffsetKernel`] and [`Kernel`] weights to a buffer, one
//! output pixel per input pixel. Color channels are filtered
//! independently; alpha is never filtered and is written opaque. Rows
//! are processed in parallel since each output row depends only on the
//! immutable source.

use pixelpipe_core::PixelBuffer;
use rayon::prelude::*;
use tracing::debug;

use crate::kernel::{Kernel, OffsetKernel};
use crate::FilterResult;

/// Convolve with a sparse offset kernel.
///
/// At each pixel, taps falling outside the buffer are skipped and the
/// accumulated sum is divided by the weight of the taps actually used
/// (truncating integer division). The kernel therefore renormalizes
/// itself at the borders. A pixel where no tap lands at all produces 0.
pub fn convolve_offsets(src: &PixelBuffer, kernel: &OffsetKernel) -> FilterResult<PixelBuffer> {
    debug!(
        width = src.width(),
        height = src.height(),
        taps = kernel.offsets().len(),
        "offset convolution"
    );

    if src.is_empty() {
        return Ok(src.create_template().into());
    }

    let width = src.width();
    let height = src.height();
    let channels = src.channels();
    let samples = channels.samples();
    let color = channels.color_samples();

    let mut out = src.create_template();
    let stride = out.row_stride();
    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            for x in 0..width {
                let base = x as usize * samples;
                for c in 0..color {
                    let mut sum: i64 = 0;
                    let mut used: i64 = 0;
                    for &(dx, dy, w) in kernel.offsets() {
                        let sx = x as i64 + dx as i64;
                        let sy = y as i64 + dy as i64;
                        if sx >= 0 && sx < width as i64 && sy >= 0 && sy < height as i64 {
                            let s = src.sample_unchecked(sx as u32, sy as u32, c);
                            sum += w as i64 * s as i64;
                            used += w as i64;
                        }
                    }
                    let v = if used == 0 { 0 } else { (sum / used).clamp(0, 255) };
                    row[base + c] = v as u8;
                }
                if channels.has_alpha() {
                    row[base + 3] = 255;
                }
            }
        });

    Ok(out.into())
}

/// Convolve with a dense matrix kernel.
///
/// Accumulation is in `f64`. Taps falling outside the buffer are
/// dropped and the remaining sum is *not* renormalized, so border
/// pixels darken in proportion to the lost support. The result is
/// clamped to [0, 255] and truncated toward zero.
pub fn convolve_matrix(src: &PixelBuffer, kernel: &Kernel) -> FilterResult<PixelBuffer> {
    debug!(
        width = src.width(),
        height = src.height(),
        radius = kernel.radius(),
        "matrix convolution"
    );

    if src.is_empty() {
        return Ok(src.create_template().into());
    }

    let width = src.width();
    let height = src.height();
    let channels = src.channels();
    let samples = channels.samples();
    let color = channels.color_samples();
    let radius = kernel.radius() as i64;
    let size = kernel.size();

    let mut out = src.create_template();
    let stride = out.row_stride();
    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            for x in 0..width {
                let base = x as usize * samples;
                for c in 0..color {
                    let mut sum = 0.0f64;
                    for ky in 0..size {
                        let sy = y as i64 + ky as i64 - radius;
                        if sy < 0 || sy >= height as i64 {
                            continue;
                        }
                        for kx in 0..size {
                            let sx = x as i64 + kx as i64 - radius;
                            if sx < 0 || sx >= width as i64 {
                                continue;
                            }
                            let s = src.sample_unchecked(sx as u32, sy as u32, c);
                            sum += kernel.get(kx, ky) * s as f64;
                        }
                    }
                    row[base + c] = sum.clamp(0.0, 255.0) as u8;
                }
                if channels.has_alpha() {
                    row[base + 3] = 255;
                }
            }
        });

    Ok(out.into())
}

/// Smooth with the 3x3 approximate-Gaussian offset kernel.
pub fn smooth(src: &PixelBuffer) -> FilterResult<PixelBuffer> {
    convolve_offsets(src, &OffsetKernel::smooth_3x3())
}

/// Smooth with the wider 5x5 approximate-Gaussian offset kernel.
pub fn smooth_wide(src: &PixelBuffer) -> FilterResult<PixelBuffer> {
    convolve_offsets(src, &OffsetKernel::smooth_5x5())
}

/// Gaussian blur with an explicit sigma.
///
/// # Errors
///
/// Returns [`crate::FilterError::InvalidParameters`] if `sigma` is not
/// positive and finite.
pub fn gaussian_blur(src: &PixelBuffer, radius: u32, sigma: f64) -> FilterResult<PixelBuffer> {
    let kernel = Kernel::gaussian(radius, sigma)?;
    convolve_matrix(src, &kernel)
}

/// Gaussian blur with sigma derived from the radius.
pub fn gaussian_blur_auto(src: &PixelBuffer, radius: u32) -> FilterResult<PixelBuffer> {
    convolve_matrix(src, &Kernel::gaussian_auto(radius))
}
