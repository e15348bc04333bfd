//! Down-sampling by strided selection.

/// Keep the samples at indices `0, down, 2*down, ...`.
///
/// The output length is `ceil(y.len() / down)`. No anti-aliasing is applied
/// here; in the pipeline the preceding filter stage provides it.
///
/// # Panics
///
/// Panics if `down == 0`. [`ResamplingSpec`](crate::ResamplingSpec) never
/// carries a zero factor.
pub fn decimate(y: &[f64], down: usize) -> Vec<f64> {
    assert!(down >= 1, "down-sampling factor must be >= 1");
    y.iter().step_by(down).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_one_is_identity() {
        let y = vec![1.0, 2.0, 3.0];
        assert_eq!(decimate(&y, 1), y);
    }

    #[test]
    fn keeps_every_third_sample_from_zero() {
        let y: Vec<f64> = (0..10).map(f64::from).collect();
        assert_eq!(decimate(&y, 3), vec![0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn length_is_ceiling_division() {
        for len in 0..40 {
            let y = vec![0.0; len];
            for down in 1..6 {
                assert_eq!(decimate(&y, down).len(), len.div_ceil(down));
            }
        }
    }
}
