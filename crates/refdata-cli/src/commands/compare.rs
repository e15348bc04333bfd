//! Check a filter output against a reference record.

use clap::Args;
use refdata_io::{load_signal, read_record};
use std::path::PathBuf;

#[derive(Args)]
pub struct CompareArgs {
    /// Reference record (JSON)
    #[arg(value_name = "REFERENCE")]
    reference: PathBuf,

    /// Output of the filter under test: one sample per line, or a mono WAV file
    #[arg(value_name = "CANDIDATE")]
    candidate: PathBuf,

    /// Largest accepted absolute deviation
    #[arg(long, default_value_t = 1e-7)]
    tolerance: f64,
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let record = read_record(&args.reference)?;
    let candidate = load_signal(&args.candidate)?;

    println!("Reference: {} ({} samples)", args.reference.display(), record.len());
    println!("Candidate: {} ({} samples)", args.candidate.display(), candidate.len());

    if candidate.len() > record.len() {
        anyhow::bail!(
            "candidate has {} samples but the reference only has {}",
            candidate.len(),
            record.len()
        );
    }

    let (index, error) = max_abs_error(&record.reference_data, &candidate);
    println!("Max error: {error:e} at sample {index}");
    println!("Tolerance: {:e}", args.tolerance);

    if error > args.tolerance {
        anyhow::bail!(
            "max error {error:e} at sample {index} exceeds tolerance {:e}",
            args.tolerance
        );
    }

    println!("PASS");
    Ok(())
}

/// Largest absolute difference over the overlapping prefix, with its index.
///
/// NaN differences count as infinitely large.
fn max_abs_error(reference: &[f64], candidate: &[f64]) -> (usize, f64) {
    reference
        .iter()
        .zip(candidate)
        .map(|(r, c)| {
            let diff = (r - c).abs();
            if diff.is_nan() { f64::INFINITY } else { diff }
        })
        .enumerate()
        .fold((0, 0.0), |best, (i, d)| if d > best.1 { (i, d) } else { best })
}
