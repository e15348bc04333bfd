//! The resampling + filtering pipeline for one scenario.

use crate::{FilterSpec, ResamplingSpec, Result, decimate, upsample_linear};

/// Compute the reference output of one scenario.
///
/// 1. Up-sample by `resampling.up()` (identity for 1).
/// 2. If [`ResamplingSpec::filters`] holds, filter the up-sampled signal and
///    keep every `resampling.down()`-th sample.
/// 3. Otherwise (`down == 1`, `up > 1`) return the up-sampled signal as is.
///
/// # Errors
///
/// [`Error::InsufficientSamples`](crate::Error::InsufficientSamples) when
/// up-sampling a signal with fewer than two samples.
pub fn process(signal: &[f64], resampling: &ResamplingSpec, filter: &FilterSpec) -> Result<Vec<f64>> {
    let upsampled = upsample_linear(signal, resampling.up())?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        input = signal.len(),
        upsampled = upsampled.len(),
        up = resampling.up(),
        "upsample stage"
    );

    // Scenarios with down == 1 and up > 1 isolate the interpolation stage:
    // their reference is the interpolated signal, never filtered.
    if !resampling.filters() {
        #[cfg(feature = "tracing")]
        tracing::debug!("filter stage bypassed for pure up-sampling");
        return Ok(upsampled);
    }

    let filtered = filter.apply(&upsampled);
    let output = decimate(&filtered, resampling.down());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        filtered = filtered.len(),
        output = output.len(),
        down = resampling.down(),
        "filter and decimation stage"
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, lfilter};

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64 * 0.5 - 3.0).collect()
    }

    #[test]
    fn identity_scenario_returns_input() {
        let x = ramp(25);
        let out = process(&x, &ResamplingSpec::identity(), &FilterSpec::identity()).unwrap();
        assert_eq!(out, x);
    }

    #[test]
    fn pure_upsampling_bypasses_filter() {
        let x = ramp(10);
        let resampling = ResamplingSpec::new(1, 3).unwrap();
        // A filter that would visibly change the signal.
        let filter = FilterSpec::new(vec![1.0, -0.9], vec![0.1, 0.2]).unwrap();
        let out = process(&x, &resampling, &filter).unwrap();
        assert_eq!(out, upsample_linear(&x, 3).unwrap());
    }

    #[test]
    fn resampling_filters_upsampled_signal_then_decimates() {
        let x = ramp(40);
        let resampling = ResamplingSpec::new(3, 2).unwrap();
        let filter = FilterSpec::fir(vec![0.25, 0.5, 0.25]).unwrap();
        let out = process(&x, &resampling, &filter).unwrap();

        let expected = decimate(&lfilter(&filter, &upsample_linear(&x, 2).unwrap()), 3);
        assert_eq!(out, expected);
        assert_eq!(out.len(), (2 * 39usize).div_ceil(3));
    }

    #[test]
    fn downsampling_picks_filtered_samples() {
        let x = ramp(30);
        let resampling = ResamplingSpec::new(4, 1).unwrap();
        let filter = FilterSpec::new(vec![1.0, -0.3], vec![0.7]).unwrap();
        let filtered = lfilter(&filter, &x);
        let out = process(&x, &resampling, &filter).unwrap();
        for (k, &v) in out.iter().enumerate() {
            assert_eq!(v, filtered[k * 4]);
        }
    }

    #[test]
    fn short_signal_fails_only_when_upsampling() {
        let x = vec![1.0];
        assert_eq!(
            process(&x, &ResamplingSpec::new(1, 2).unwrap(), &FilterSpec::identity()),
            Err(Error::InsufficientSamples { len: 1, up: 2 })
        );
        assert_eq!(
            process(&x, &ResamplingSpec::new(2, 1).unwrap(), &FilterSpec::identity()).unwrap(),
            vec![1.0]
        );
    }
}
