//! Resolved, runnable scenarios.

use std::path::PathBuf;

use refdata_core::{FilterSpec, ReferenceRecord, ResamplingSpec, Signal};

/// A validated scenario: concrete coefficients, factors and output path.
///
/// Produced by [`ScenarioConfig::resolve`](crate::ScenarioConfig::resolve)
/// or [`Manifest::resolve`](crate::Manifest::resolve).
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Sampling factors.
    pub resampling: ResamplingSpec,
    /// Filter coefficients.
    pub filter: FilterSpec,
    /// Filter family flag recorded in the output.
    pub is_fir: bool,
    /// File the reference record is written to.
    pub output: PathBuf,
}

impl Scenario {
    /// Run the pipeline on `signal` and build the reference record.
    pub fn build_record(&self, signal: &Signal) -> refdata_core::Result<ReferenceRecord> {
        ReferenceRecord::build(signal, &self.resampling, &self.filter, self.is_fir)
    }
}
