//! The canonical reference record.

use serde::{Deserialize, Serialize};

use crate::{FilterSpec, ResamplingSpec, Result, Signal, process};

/// Expected output of one scenario together with the configuration that produced it.
///
/// Field order and names form the file format read by the downstream test
/// suite: `down_sampling_factor`, `up_sampling_factor`, `a`, `b`, `is_fir`,
/// `reference_data`.
///
/// `is_fir` is stored as given by the scenario. It normally agrees with
/// `a.len() == 1` but is not derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Decimation factor `D`.
    pub down_sampling_factor: usize,
    /// Interpolation factor `U`.
    pub up_sampling_factor: usize,
    /// Denominator (feedback) coefficients.
    pub a: Vec<f64>,
    /// Numerator (feed-forward) coefficients.
    pub b: Vec<f64>,
    /// Filter family flag passed to the filter under test.
    pub is_fir: bool,
    /// Expected output samples.
    pub reference_data: Vec<f64>,
}

impl ReferenceRecord {
    /// Run the pipeline over `signal` and bundle the result with its configuration.
    pub fn build(
        signal: &Signal,
        resampling: &ResamplingSpec,
        filter: &FilterSpec,
        is_fir: bool,
    ) -> Result<Self> {
        let reference_data = process(signal, resampling, filter)?;
        Ok(Self {
            down_sampling_factor: resampling.down(),
            up_sampling_factor: resampling.up(),
            a: filter.a().to_vec(),
            b: filter.b().to_vec(),
            is_fir,
            reference_data,
        })
    }

    /// The resampling factors of this record.
    pub fn resampling(&self) -> Result<ResamplingSpec> {
        ResamplingSpec::new(self.down_sampling_factor, self.up_sampling_factor)
    }

    /// The filter coefficients of this record.
    pub fn filter(&self) -> Result<FilterSpec> {
        FilterSpec::new(self.a.clone(), self.b.clone())
    }

    /// Number of reference samples.
    pub fn len(&self) -> usize {
        self.reference_data.len()
    }

    /// True if the record holds no reference samples.
    pub fn is_empty(&self) -> bool {
        self.reference_data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_copies_configuration() {
        let signal = Signal::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let resampling = ResamplingSpec::new(2, 1).unwrap();
        let filter = FilterSpec::new(vec![1.0, -0.5], vec![0.5]).unwrap();
        let record = ReferenceRecord::build(&signal, &resampling, &filter, false).unwrap();

        assert_eq!(record.down_sampling_factor, 2);
        assert_eq!(record.up_sampling_factor, 1);
        assert_eq!(record.a, vec![1.0, -0.5]);
        assert_eq!(record.b, vec![0.5]);
        assert!(!record.is_fir);
        assert_eq!(record.len(), 3);
        assert_eq!(record.resampling().unwrap(), resampling);
        assert_eq!(record.filter().unwrap(), filter);
    }

    #[test]
    fn is_fir_flag_is_not_derived() {
        let signal = Signal::new(vec![0.0, 1.0, 0.0]);
        let record = ReferenceRecord::build(
            &signal,
            &ResamplingSpec::new(1, 3).unwrap(),
            &FilterSpec::identity(),
            false,
        )
        .unwrap();
        assert!(!record.is_fir);
        assert_eq!(record.a, vec![1.0]);
    }
}
