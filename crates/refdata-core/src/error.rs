//! Error types for the reference-data pipeline.

use thiserror::Error;

/// Errors raised by the resampling, filtering and design stages.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// Up-sampling needs at least two samples to interpolate between.
    #[error("up-sampling by {up} needs at least 2 samples, got {len}")]
    InsufficientSamples {
        /// Number of samples in the input signal.
        len: usize,
        /// Requested up-sampling factor.
        up: usize,
    },

    /// Empty coefficient sequences, a zero normalization term or a non-finite coefficient.
    #[error("invalid filter specification: {0}")]
    InvalidFilterSpec(String),

    /// A sampling factor of zero.
    #[error("invalid resampling factors (down = {down}, up = {up}): both must be >= 1")]
    InvalidResampling {
        /// Down-sampling factor.
        down: usize,
        /// Up-sampling factor.
        up: usize,
    },

    /// Window design parameters out of range.
    #[error("invalid filter design: {0}")]
    InvalidDesign(String),
}

/// Convenience result type for the pipeline.
pub type Result<T> = std::result::Result<T, Error>;
