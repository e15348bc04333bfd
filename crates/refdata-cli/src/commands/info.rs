//! Display a reference record summary.

use clap::Args;
use refdata_io::read_record;

/// Display reference record information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the reference record (JSON)
    pub file: std::path::PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let record = read_record(&args.file)?;

    let resampling = record.resampling()?;
    let family = if record.is_fir { "FIR" } else { "IIR" };
    let structure = if record.a.len() == 1 { "FIR" } else { "IIR" };

    println!("File:         {}", args.file.display());
    println!(
        "Resampling:   down={} up={} (ratio {:.4})",
        resampling.down(),
        resampling.up(),
        resampling.ratio()
    );
    println!("Numerator:    {} coefficient(s)", record.b.len());
    println!("Denominator:  {} coefficient(s)", record.a.len());
    if family == structure {
        println!("Filter:       {family}");
    } else {
        println!("Filter:       {family} (coefficients are {structure})");
    }
    println!("Samples:      {}", record.len());

    if let (Some(min), Some(max)) = (
        record.reference_data.iter().copied().reduce(f64::min),
        record.reference_data.iter().copied().reduce(f64::max),
    ) {
        println!("Range:        [{min:.6}, {max:.6}]");
    }

    Ok(())
}
