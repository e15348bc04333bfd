//! Window-method FIR low-pass design.
//!
//! Produces the taps of a linear-phase low-pass filter as the product of an
//! ideal (sinc) impulse response and a symmetric Hamming window, scaled to
//! unity gain at DC:
//!
//! ```text
//! m[n] = n - (N - 1) / 2
//! h[n] = fc * sinc(fc * m[n]) * (0.54 - 0.46 * cos(2*pi*n / (N - 1)))
//! h[n] = h[n] / sum(h)
//! ```
//!
//! where `sinc(x) = sin(pi*x) / (pi*x)` and the cutoff `fc` is normalized to
//! the Nyquist frequency (`0 < fc < 1`).
//!
//! Only FIR low-pass windows are designed here. IIR coefficients are always
//! supplied by the caller.

use std::f64::consts::PI;

use crate::{Error, ResamplingSpec, Result};

/// Tap count used by the production FIR filter when none is configured.
pub const DEFAULT_FIR_TAPS: usize = 30;

/// Cutoff used by the production FIR filter for a resampling ratio: `up / down`.
pub fn default_fir_cutoff(resampling: &ResamplingSpec) -> f64 {
    resampling.ratio()
}

/// Design a Hamming-windowed sinc low-pass FIR with `num_taps` taps.
///
/// # Errors
///
/// [`Error::InvalidDesign`] if `num_taps == 0` or `cutoff` is not strictly
/// between 0 and 1.
pub fn firwin(num_taps: usize, cutoff: f64) -> Result<Vec<f64>> {
    if num_taps == 0 {
        return Err(Error::InvalidDesign(
            "number of taps must be at least 1".to_string(),
        ));
    }
    if !(cutoff > 0.0 && cutoff < 1.0) {
        return Err(Error::InvalidDesign(format!(
            "cutoff {cutoff} must lie strictly between 0 and 1 (Nyquist)"
        )));
    }

    let alpha = 0.5 * (num_taps - 1) as f64;
    let mut taps: Vec<f64> = (0..num_taps)
        .map(|n| {
            let m = n as f64 - alpha;
            cutoff * sinc(cutoff * m) * hamming(n, num_taps)
        })
        .collect();

    let dc_gain: f64 = taps.iter().sum();
    for tap in &mut taps {
        *tap /= dc_gain;
    }

    Ok(taps)
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Symmetric Hamming window value at `n` for a window of `len` points.
fn hamming(n: usize, len: usize) -> f64 {
    if len == 1 {
        return 1.0;
    }
    0.54 - 0.46 * (2.0 * PI * n as f64 / (len - 1) as f64).cos()
}
