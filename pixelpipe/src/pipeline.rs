//! Staged analysis pipeline
//!
//! Chains the individual operations into the difference-of-Gaussians
//! edge analysis: grayscale, pixelate, downscale, blur at two radii,
//! subtract, threshold. Each stage consumes the previous stage's
//! buffer and allocates its own output, so intermediates can be kept
//! (via [`run_staged`]) without copying.

use pixelpipe_core::{GrayConversion, PixelBuffer};
use pixelpipe_filter::{detect_edges, gaussian_blur_auto, FilterError};
use pixelpipe_transform::{pixelate, resize, TransformError};
use thiserror::Error;
use tracing::debug;

/// Errors from any stage of the pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixelpipe_core::Error),

    /// Filtering stage error
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Transform stage error
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Tuning parameters for the pipeline
///
/// The defaults reproduce the canonical analysis chain: luma grayscale,
/// block-3 pixelation, half-size downscale, radius 1 and 10 blurs, and
/// an edge threshold of 70.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Color-to-gray weighting for the first stage
    pub gray_conversion: GrayConversion,
    /// Tile size for the pixelation stage
    pub pixelate_block: u32,
    /// Uniform scale factor for the downscale stage
    pub resize_scale: f32,
    /// Radius of the fine (detail-preserving) blur
    pub fine_radius: u32,
    /// Radius of the coarse (background) blur
    pub coarse_radius: u32,
    /// Gradient-magnitude threshold for the final edge stage
    pub edge_threshold: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            gray_conversion: GrayConversion::Luma,
            pixelate_block: 3,
            resize_scale: 0.5,
            fine_radius: 1,
            coarse_radius: 10,
            edge_threshold: 70,
        }
    }
}

/// Every intermediate buffer produced by one pipeline run
#[derive(Debug)]
pub struct PipelineStages {
    /// Grayscale conversion of the input
    pub gray: PixelBuffer,
    /// Pixelated grayscale
    pub pixelated: PixelBuffer,
    /// Downscaled buffer
    pub resized: PixelBuffer,
    /// Blur at the fine radius
    pub fine_blur: PixelBuffer,
    /// Blur at the coarse radius
    pub coarse_blur: PixelBuffer,
    /// Absolute difference of the two blurs
    pub difference: PixelBuffer,
    /// Binary edge map (the pipeline's final product)
    pub edges: PixelBuffer,
}

/// Run the pipeline and keep every intermediate stage.
///
/// # Errors
///
/// Propagates the first stage failure; with a valid configuration the
/// only failure sources are invalid parameter values.
pub fn run_staged(input: &PixelBuffer, config: &PipelineConfig) -> PipelineResult<PipelineStages> {
    debug!(
        width = input.width(),
        height = input.height(),
        channels = %input.channels(),
        "pipeline start"
    );

    let gray = input.to_gray(config.gray_conversion);
    let pixelated = pixelate(&gray, config.pixelate_block)?;
    let resized = resize(&pixelated, config.resize_scale)?;
    let fine_blur = gaussian_blur_auto(&resized, config.fine_radius)?;
    let coarse_blur = gaussian_blur_auto(&resized, config.coarse_radius)?;
    let difference = fine_blur.abs_difference(&coarse_blur);
    let edges = detect_edges(&difference, config.edge_threshold)?;

    debug!(
        width = edges.width(),
        height = edges.height(),
        "pipeline complete"
    );

    Ok(PipelineStages {
        gray,
        pixelated,
        resized,
        fine_blur,
        coarse_blur,
        difference,
        edges,
    })
}

/// Run the pipeline and return only the final edge map.
pub fn run(input: &PixelBuffer, config: &PipelineConfig) -> PipelineResult<PixelBuffer> {
    Ok(run_staged(input, config)?.edges)
}
