//! File I/O for the refdata pipeline.
//!
//! This crate provides:
//!
//! - **Signal loading**: [`load_signal`] reads a headerless one-column text
//!   file (or a mono WAV file) into a [`Signal`](refdata_core::Signal)
//! - **Record output**: [`write_record`] and [`render_record`] produce the
//!   canonical JSON text consumed by the filter test suite
//! - **Record input**: [`read_record`] loads a reference record back for
//!   comparisons and inspection
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use refdata_core::{FilterSpec, ReferenceRecord, ResamplingSpec};
//! use refdata_io::{load_signal, write_record};
//!
//! let signal = load_signal("test-signal.txt")?;
//! let record = ReferenceRecord::build(
//!     &signal,
//!     &ResamplingSpec::new(3, 1)?,
//!     &FilterSpec::fir(vec![0.25, 0.5, 0.25])?,
//!     true,
//! )?;
//! write_record(&record, "fir-filter-down-sampling.json")?;
//! ```

mod json;
mod loader;

use std::path::PathBuf;

pub use json::{RecordFormatter, format_float, read_record, render_record, write_record};
pub use loader::{load_signal, parse_samples};

/// Error types for refdata file I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file missing, empty, or containing non-numeric content.
    #[error("malformed input '{path}': {reason}")]
    MalformedInput {
        /// Path of the offending file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A reference record could not be encoded or decoded.
    #[error("JSON error in '{path}': {source}")]
    Json {
        /// Path of the record file.
        path: PathBuf,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// A record field holds NaN or an infinity, which JSON cannot represent.
    #[error("{field}[{index}] is not a finite number")]
    NonFinite {
        /// Name of the record field.
        field: &'static str,
        /// Position inside the field.
        index: usize,
    },

    /// A loaded record violates the pipeline's own invariants.
    #[error(transparent)]
    Core(#[from] refdata_core::Error),
}

impl Error {
    /// Create a malformed input error.
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}

/// Convenience result type for refdata I/O.
pub type Result<T> = std::result::Result<T, Error>;
