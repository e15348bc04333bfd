//! Generate a single reference record from command-line coefficients.

use anyhow::Context;
use clap::Args;
use refdata_config::{FirDesign, ScenarioConfig};
use refdata_io::{load_signal, write_record};
use std::path::PathBuf;

#[derive(Args)]
pub struct RunArgs {
    /// Input signal: one sample per line, or a mono WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Reference record to write (JSON)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Decimation factor
    #[arg(long, default_value_t = 1)]
    down: usize,

    /// Interpolation factor
    #[arg(long, default_value_t = 1)]
    up: usize,

    /// Numerator coefficients, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, conflicts_with_all = ["taps", "cutoff"])]
    b: Option<Vec<f64>>,

    /// Number of taps for a designed FIR low-pass (default 30)
    #[arg(long)]
    taps: Option<usize>,

    /// Cutoff of the designed FIR low-pass, relative to Nyquist (default up/down)
    #[arg(long)]
    cutoff: Option<f64>,

    /// Denominator coefficients, comma separated (default 1)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    a: Option<Vec<f64>>,

    /// Filter family flag written to the record (default: true when `a` has one coefficient)
    #[arg(long = "fir", num_args = 0..=1, default_missing_value = "true")]
    is_fir: Option<bool>,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let name = args
        .output
        .file_stem()
        .and_then(|s| s.to_str())
        .context("output path has no file name")?
        .to_string();

    let mut config = ScenarioConfig::new(name).with_factors(args.down, args.up);
    if let Some(a) = args.a {
        config = config.with_denominator(a);
    }
    config = match args.b {
        Some(b) => config.with_numerator(b),
        None => config.with_design(FirDesign {
            taps: args.taps,
            cutoff: args.cutoff,
        }),
    };
    config.is_fir = args.is_fir;

    let output_dir = args
        .output
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();
    let mut scenario = config.resolve(&output_dir)?;
    scenario.output = args.output;

    let signal = load_signal(&args.input)?;
    let record = scenario.build_record(&signal)?;
    write_record(&record, &scenario.output)?;

    println!(
        "Wrote {} samples to {} (down={}, up={}, {} taps)",
        record.len(),
        scenario.output.display(),
        record.down_sampling_factor,
        record.up_sampling_factor,
        record.b.len()
    );

    Ok(())
}
