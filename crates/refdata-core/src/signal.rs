//! The input signal shared by every scenario of a run.

use std::ops::Deref;

/// An ordered, finite sequence of equally spaced real-valued samples.
///
/// A `Signal` is immutable once constructed. It is loaded once per run and
/// borrowed read-only by every scenario.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signal {
    samples: Vec<f64>,
}

impl Signal {
    /// Wrap a sample vector.
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// The samples as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the signal has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Deref for Signal {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.samples
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<f64> for Signal {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deref_exposes_samples() {
        let signal = Signal::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(signal.len(), 3);
        assert_eq!(&signal[..2], &[1.0, 2.0]);
        assert_eq!(signal.iter().sum::<f64>(), 6.0);
    }

    #[test]
    fn collect_into_signal() {
        let signal: Signal = (0..4).map(f64::from).collect();
        assert_eq!(signal.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
        assert!(!signal.is_empty());
        assert!(Signal::default().is_empty());
    }
}
