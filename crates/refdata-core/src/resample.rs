//! Up-sampling by piecewise-linear interpolation.
//!
//! The query grid is the half-open range `[0, N-1)` with step `1/U`, built
//! the same way an `arange(0, N - 1, 1 / U)` grid is: the step is rounded to
//! `f64` first, the point count is `ceil((N - 1) / step)` and the `k`-th
//! point is `k * step`. This usually yields `U * (N - 1)` points, all
//! strictly below `N - 1`. When `1/U` rounds down (`U = 49` is the smallest
//! such factor) the count gains one point just short of `N - 1`.
//!
//! Between samples the interpolant is
//!
//! ```text
//! y(q) = s[i] + (s[i+1] - s[i]) * (q - i),   i = floor(q)
//! ```
//!
//! Grid points with `k` a multiple of `U` stand for input sample `k / U` and
//! return it bit for bit, even where `k * step` falls an ulp short of it.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Rational resampling factors `(down, up)`, both at least 1.
///
/// The effective rate change is `up / down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawResamplingSpec")]
pub struct ResamplingSpec {
    down: usize,
    up: usize,
}

#[derive(Deserialize)]
struct RawResamplingSpec {
    down: usize,
    up: usize,
}

impl TryFrom<RawResamplingSpec> for ResamplingSpec {
    type Error = Error;

    fn try_from(raw: RawResamplingSpec) -> Result<Self> {
        Self::new(raw.down, raw.up)
    }
}

impl ResamplingSpec {
    /// Create resampling factors, rejecting zero.
    pub fn new(down: usize, up: usize) -> Result<Self> {
        if down == 0 || up == 0 {
            return Err(Error::InvalidResampling { down, up });
        }
        Ok(Self { down, up })
    }

    /// No rate change at all.
    pub fn identity() -> Self {
        Self { down: 1, up: 1 }
    }

    /// Down-sampling (decimation) factor.
    pub fn down(&self) -> usize {
        self.down
    }

    /// Up-sampling (interpolation) factor.
    pub fn up(&self) -> usize {
        self.up
    }

    /// Rate ratio `up / down`.
    pub fn ratio(&self) -> f64 {
        self.up as f64 / self.down as f64
    }

    /// True when both factors are 1.
    pub fn is_identity(&self) -> bool {
        self.down == 1 && self.up == 1
    }

    /// Whether the filter and decimation stages run for this scenario.
    ///
    /// They run when `down > 1`, or when neither factor changes the rate.
    /// Pure up-sampling (`down == 1`, `up > 1`) validates the interpolation
    /// stage in isolation, so the filter is bypassed.
    pub fn filters(&self) -> bool {
        self.down > 1 || self.up == 1
    }
}

impl Default for ResamplingSpec {
    fn default() -> Self {
        Self::identity()
    }
}

/// Number of query points in the up-sampling grid for `len` input samples.
///
/// Returns `len` for `up == 1` (the stage is the identity).
pub fn upsampled_len(len: usize, up: usize) -> usize {
    if up <= 1 || len < 2 {
        return len;
    }
    let step = 1.0 / up as f64;
    ((len - 1) as f64 / step).ceil() as usize
}

/// Up-sample `signal` by the integer factor `up` using linear interpolation.
///
/// `up == 1` returns an unchanged copy. For `up > 1` the output has
/// [`upsampled_len`] samples covering `[0, N-1)`; the last original sample
/// itself is not part of the grid.
///
/// # Errors
///
/// [`Error::InsufficientSamples`] when `up > 1` and the signal has fewer than
/// two samples. [`Error::InvalidResampling`] when `up == 0`.
pub fn upsample_linear(signal: &[f64], up: usize) -> Result<Vec<f64>> {
    if up == 0 {
        return Err(Error::InvalidResampling { down: 1, up });
    }
    if up == 1 {
        return Ok(signal.to_vec());
    }
    if signal.len() < 2 {
        return Err(Error::InsufficientSamples {
            len: signal.len(),
            up,
        });
    }

    let last_segment = signal.len() - 2;
    let step = 1.0 / up as f64;
    let count = upsampled_len(signal.len(), up);

    let mut output = Vec::with_capacity(count);
    for k in 0..count {
        if k % up == 0 {
            output.push(signal[k / up]);
            continue;
        }
        let q = k as f64 * step;
        let i = (q.floor() as usize).min(last_segment);
        let frac = q - i as f64;
        let lo = signal[i];
        let hi = signal[i + 1];
        output.push(lo + (hi - lo) * frac);
    }

    Ok(output)
}
