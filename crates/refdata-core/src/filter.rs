//! Linear time-invariant filtering by difference equation.
//!
//! A single recurrence covers both filter families:
//!
//! ```text
//! a[0]*y[n] = b[0]*x[n] + b[1]*x[n-1] + ... + b[P]*x[n-P]
//!                       - a[1]*y[n-1] - ... - a[Q]*y[n-Q]
//! ```
//!
//! with `x[k] = y[k] = 0` for `k < 0`. With `a = [1]` the feedback sum is
//! empty and the filter is a plain causal convolution (FIR); otherwise every
//! output depends on earlier outputs (IIR) and must be computed in strictly
//! increasing index order.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Filter coefficients: numerator `b` (feed-forward) and denominator `a` (feedback).
///
/// `a[0]` is the normalization term. An FIR filter has `a == [1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFilterSpec")]
pub struct FilterSpec {
    a: Vec<f64>,
    b: Vec<f64>,
}

#[derive(Deserialize)]
struct RawFilterSpec {
    a: Vec<f64>,
    b: Vec<f64>,
}

impl TryFrom<RawFilterSpec> for FilterSpec {
    type Error = Error;

    fn try_from(raw: RawFilterSpec) -> Result<Self> {
        Self::new(raw.a, raw.b)
    }
}

impl FilterSpec {
    /// Create a filter from denominator `a` and numerator `b`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFilterSpec`] if either sequence is empty, `a[0] == 0`,
    /// or a coefficient is NaN or infinite.
    pub fn new(a: Vec<f64>, b: Vec<f64>) -> Result<Self> {
        if a.is_empty() {
            return Err(Error::InvalidFilterSpec(
                "denominator coefficients (a) are empty".to_string(),
            ));
        }
        if b.is_empty() {
            return Err(Error::InvalidFilterSpec(
                "numerator coefficients (b) are empty".to_string(),
            ));
        }
        if a[0] == 0.0 {
            return Err(Error::InvalidFilterSpec(
                "normalization term a[0] must be non-zero".to_string(),
            ));
        }
        if let Some((name, i)) = first_non_finite(&a, "a").or_else(|| first_non_finite(&b, "b")) {
            return Err(Error::InvalidFilterSpec(format!(
                "coefficient {name}[{i}] is not finite"
            )));
        }
        Ok(Self { a, b })
    }

    /// FIR filter with taps `b` and `a = [1]`.
    pub fn fir(b: Vec<f64>) -> Result<Self> {
        Self::new(vec![1.0], b)
    }

    /// The unit filter `b = [1]`, `a = [1]`.
    pub fn identity() -> Self {
        Self {
            a: vec![1.0],
            b: vec![1.0],
        }
    }

    /// Denominator (feedback) coefficients.
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Numerator (feed-forward) coefficients.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// True when the filter has no feedback terms (`len(a) == 1`).
    pub fn is_structurally_fir(&self) -> bool {
        self.a.len() == 1
    }

    /// Filter `x`; see [`lfilter`].
    pub fn apply(&self, x: &[f64]) -> Vec<f64> {
        lfilter(self, x)
    }
}

fn first_non_finite<'a>(coeffs: &[f64], name: &'a str) -> Option<(&'a str, usize)> {
    coeffs.iter().position(|c| !c.is_finite()).map(|i| (name, i))
}

/// Evaluate the difference equation over `x` with zero initial conditions.
///
/// The output has the same length as `x` and includes the start-up
/// transient. Samples are produced in increasing index order; each IIR
/// output reads the outputs already written before it.
pub fn lfilter(spec: &FilterSpec, x: &[f64]) -> Vec<f64> {
    let a = spec.a();
    let b = spec.b();
    let a0 = a[0];

    let mut y = Vec::with_capacity(x.len());

    for n in 0..x.len() {
        let mut acc = 0.0;

        // Feed-forward: b[i] * x[n-i]
        for (i, &bi) in b.iter().enumerate().take(n + 1) {
            acc += bi * x[n - i];
        }

        // Feedback: a[j] * y[n-j], j >= 1
        for (j, &aj) in a.iter().enumerate().skip(1).take(n) {
            acc -= aj * y[n - j];
        }

        y.push(if a0 == 1.0 { acc } else { acc / a0 });
    }

    y
}

/// The first `x.len()` terms of the full convolution `b * x`.
///
/// Equal to [`lfilter`] with `a = [1]`, computed without any reference to
/// previous outputs.
pub fn convolve_causal(b: &[f64], x: &[f64]) -> Vec<f64> {
    (0..x.len())
        .map(|n| {
            b.iter()
                .enumerate()
                .filter(|(i, _)| *i <= n)
                .map(|(i, &bi)| bi * x[n - i])
                .sum()
        })
        .collect()
}
