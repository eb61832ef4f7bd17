//! Convolution kernels
//!
//! Two kernel forms with deliberately different boundary semantics:
//!
//! - [`OffsetKernel`]: a sparse list of `(dx, dy, weight)` triples.
//!   The normalization divisor is the sum of weights actually applied
//!   at each pixel, so the kernel effectively shrinks at the borders.
//! - [`Kernel`]: a dense `(2r+1)²` floating-point matrix normalized to
//!   sum to 1.0 over its full support. Border pixels lose the support
//!   that falls outside the buffer and are *not* renormalized.
//!
//! Both policies are contract; see the convolution engine for how they
//! are applied.

use crate::{FilterError, FilterResult};

/// A single sparse kernel tap: x offset, y offset, integer weight.
pub type Offset = (i32, i32, i32);

/// Sparse offset-list kernel with boundary-adaptive normalization
#[derive(Debug, Clone)]
pub struct OffsetKernel {
    offsets: Vec<Offset>,
}

impl OffsetKernel {
    /// Create a kernel from an explicit offset list.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if the list is empty or
    /// the total weight is not positive (the divisor must never be
    /// zero over full support).
    pub fn from_offsets(offsets: Vec<Offset>) -> FilterResult<Self> {
        if offsets.is_empty() {
            return Err(FilterError::InvalidKernel("empty offset list".into()));
        }
        let sum: i64 = offsets.iter().map(|&(_, _, w)| w as i64).sum();
        if sum <= 0 {
            return Err(FilterError::InvalidKernel(format!(
                "offset weights must sum to a positive value, got {sum}"
            )));
        }
        Ok(OffsetKernel { offsets })
    }

    /// The identity kernel: a single unit tap at the center.
    pub fn identity() -> Self {
        OffsetKernel {
            offsets: vec![(0, 0, 1)],
        }
    }

    /// 3x3 approximate-Gaussian smoothing preset.
    ///
    /// Center 4, edge neighbors 2, corner neighbors 1 (total 16).
    pub fn smooth_3x3() -> Self {
        OffsetKernel {
            offsets: vec![
                (0, 0, 4),
                (0, -1, 2),
                (0, 1, 2),
                (-1, 0, 2),
                (1, 0, 2),
                (-1, -1, 1),
                (-1, 1, 1),
                (1, -1, 1),
                (1, 1, 1),
            ],
        }
    }

    /// 5x5 approximate-Gaussian smoothing preset (total weight 96).
    pub fn smooth_5x5() -> Self {
        OffsetKernel {
            offsets: vec![
                (0, 0, 10),
                (0, -1, 6),
                (0, 1, 6),
                (0, -2, 4),
                (0, 2, 4),
                (-1, 0, 6),
                (1, 0, 6),
                (-2, 0, 4),
                (2, 0, 4),
                (-1, -1, 4),
                (-1, 1, 4),
                (-2, -2, 1),
                (-2, 2, 1),
                (1, -1, 4),
                (1, 1, 4),
                (2, -2, 1),
                (2, 2, 1),
                (-1, -2, 2),
                (-1, 2, 2),
                (1, -2, 2),
                (1, 2, 2),
                (-2, -1, 2),
                (-2, 1, 2),
                (2, -1, 2),
                (2, 1, 2),
            ],
        }
    }

    /// Get the offset taps.
    #[inline]
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Sum of all weights (the full-support divisor).
    pub fn weight_sum(&self) -> i64 {
        self.offsets.iter().map(|&(_, _, w)| w as i64).sum()
    }
}

/// Dense square kernel, `(2 * radius + 1)²` weights in row-major order
#[derive(Debug, Clone)]
pub struct Kernel {
    radius: u32,
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from explicit row-major weights.
    ///
    /// No normalization is applied; callers own the weight scale.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if the weight count does
    /// not match `(2 * radius + 1)²` or any weight is not finite.
    pub fn from_data(radius: u32, data: Vec<f64>) -> FilterResult<Self> {
        let size = (2 * radius + 1) as usize;
        if data.len() != size * size {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for radius {radius}, got {}",
                size * size,
                data.len()
            )));
        }
        if data.iter().any(|w| !w.is_finite()) {
            return Err(FilterError::InvalidKernel("non-finite weight".into()));
        }
        Ok(Kernel { radius, data })
    }

    /// Build a normalized 2D Gaussian kernel.
    ///
    /// Each entry is `exp(-(x² + y²) / (2σ²)) / (2πσ²)` for
    /// `x, y ∈ [-radius, radius]`, then the whole matrix is divided by
    /// its own sum so that it sums to 1.0 within floating-point
    /// tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `sigma` is not a
    /// positive finite number.
    pub fn gaussian(radius: u32, sigma: f64) -> FilterResult<Self> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(FilterError::InvalidParameters(format!(
                "sigma must be positive and finite, got {sigma}"
            )));
        }

        let size = (2 * radius + 1) as usize;
        let r = radius as i64;
        let norm = 1.0 / (2.0 * std::f64::consts::PI * sigma * sigma);
        let denom = 2.0 * sigma * sigma;

        let mut data = Vec::with_capacity(size * size);
        let mut sum = 0.0;
        for y in -r..=r {
            for x in -r..=r {
                let w = norm * (-((x * x + y * y) as f64) / denom).exp();
                data.push(w);
                sum += w;
            }
        }
        for w in &mut data {
            *w /= sum;
        }

        Ok(Kernel { radius, data })
    }

    /// Build a Gaussian kernel with sigma derived from the radius.
    ///
    /// Uses `sigma = radius / 2.0`, floored at 0.5 so small radii stay
    /// well-defined. The derivation is a policy default, not a law of
    /// the domain; callers wanting a different shape pass sigma to
    /// [`Kernel::gaussian`] directly.
    pub fn gaussian_auto(radius: u32) -> Self {
        let sigma = (radius as f64 / 2.0).max(0.5);
        // sigma is always positive here, so gaussian cannot fail
        Kernel::gaussian(radius, sigma).expect("positive sigma")
    }

    /// Kernel radius.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Side length of the kernel (`2 * radius + 1`).
    #[inline]
    pub fn size(&self) -> usize {
        (2 * self.radius + 1) as usize
    }

    /// Get a weight by matrix index, `kx, ky ∈ [0, size)`.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range.
    #[inline]
    pub fn get(&self, kx: usize, ky: usize) -> f64 {
        self.data[ky * self.size() + kx]
    }

    /// Raw row-major weights.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Sum of all weights (1.0 within tolerance for Gaussian kernels).
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}
