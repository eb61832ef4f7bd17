//! Block-mean pixelation

use pixelpipe_core::{ChannelModel, GrayConversion, PixelBuffer};
use tracing::debug;

use crate::{TransformError, TransformResult};

/// Pixelate a buffer by replacing each `block` x `block` tile with its
/// truncating mean intensity.
///
/// Works on grayscale; color input is converted first with the
/// equal-weight channel average. The output has the same dimensions as
/// the input, but only complete tiles are filled: partial tiles at the
/// right and bottom extents stay black.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `block` is zero.
pub fn pixelate(src: &PixelBuffer, block: u32) -> TransformResult<PixelBuffer> {
    if block == 0 {
        return Err(TransformError::InvalidParameters(
            "block size must be at least 1".into(),
        ));
    }

    debug!(
        width = src.width(),
        height = src.height(),
        block,
        "pixelate"
    );

    let gray = if src.channels() == ChannelModel::Gray {
        src.clone()
    } else {
        src.to_gray(GrayConversion::Average)
    };

    let width = gray.width();
    let height = gray.height();
    let mut out = gray.create_template();

    let mut ty = 0u32;
    while ty + block <= height {
        let mut tx = 0u32;
        while tx + block <= width {
            let mut sum = 0u64;
            for y in ty..ty + block {
                for x in tx..tx + block {
                    sum += gray.gray_unchecked(x, y) as u64;
                }
            }
            let mean = (sum / (block as u64 * block as u64)) as u8;
            for y in ty..ty + block {
                for x in tx..tx + block {
                    out.set_gray_unchecked(x, y, mean);
                }
            }
            tx += block;
        }
        ty += block;
    }

    Ok(out.into())
}
