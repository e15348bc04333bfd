//! Refdata Core - golden reference data for digital filter validation
//!
//! This crate computes the expected output of a filtering component that
//! optionally up-samples and down-samples its input. The result is a
//! [`ReferenceRecord`] that a separate test suite compares against the
//! production filter implementation.
//!
//! # Pipeline
//!
//! ```text
//!  Signal ──► upsample_linear ──► lfilter ──► decimate ──► ReferenceRecord
//!             (U > 1 only)        (skipped when D == 1 and U > 1)
//! ```
//!
//! - [`resample`] - Piecewise-linear interpolation to `U`× the original rate
//! - [`filter`] - Linear difference equation covering FIR and IIR filters
//! - [`decimate`] - Strided selection of every `D`-th sample
//! - [`pipeline`] - The stages combined, including the up-sampling bypass rule
//! - [`design`] - Hamming-windowed sinc low-pass design for FIR scenarios
//! - [`record`] - The canonical reference record
//!
//! # Example
//!
//! ```rust
//! use refdata_core::{FilterSpec, ReferenceRecord, ResamplingSpec, Signal};
//!
//! let signal = Signal::new(vec![0.0, 1.0, 0.5, -0.25, 0.0, 0.75]);
//! let resampling = ResamplingSpec::new(2, 1).unwrap();
//! let filter = FilterSpec::fir(vec![0.5, 0.5]).unwrap();
//!
//! let record = ReferenceRecord::build(&signal, &resampling, &filter, true).unwrap();
//! assert_eq!(record.reference_data, vec![0.0, 0.75, -0.125]);
//! ```

pub mod decimate;
pub mod design;
mod error;
pub mod filter;
pub mod pipeline;
pub mod record;
pub mod resample;
mod signal;

pub use decimate::decimate;
pub use design::{DEFAULT_FIR_TAPS, default_fir_cutoff, firwin};
pub use error::{Error, Result};
pub use filter::{FilterSpec, convolve_causal, lfilter};
pub use pipeline::process;
pub use record::ReferenceRecord;
pub use resample::{ResamplingSpec, upsample_linear};
pub use signal::Signal;
