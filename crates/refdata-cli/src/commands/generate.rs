//! Generate reference records for a manifest or the built-in scenario set.

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use refdata_config::{Manifest, factory_manifest};
use refdata_io::{load_signal, write_record};
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    /// Input signal: one sample per line, or a mono WAV file
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Scenario manifest (TOML)
    #[arg(short, long, conflicts_with = "factory")]
    manifest: Option<PathBuf>,

    /// Use the built-in scenario set (default when no manifest is given)
    #[arg(long)]
    factory: bool,

    /// Directory for the reference records
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Only run the named scenarios
    #[arg(long, value_name = "NAME", num_args = 1..)]
    only: Vec<String>,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let manifest = match (&args.manifest, args.factory) {
        (Some(path), _) => {
            tracing::debug!(manifest = %path.display(), "loading scenario manifest");
            Manifest::load(path)?
        }
        (None, true) => factory_manifest(),
        (None, false) => {
            tracing::debug!("no manifest given, using the factory scenarios");
            factory_manifest()
        }
    };
    let manifest = if args.only.is_empty() {
        manifest
    } else {
        manifest.select(&args.only)?
    };

    let input = args
        .input
        .clone()
        .or_else(|| manifest.input_path())
        .context("no input signal given: pass INPUT or set 'input' in the manifest")?;
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| manifest.output_dir_path())
        .unwrap_or_else(|| PathBuf::from("."));

    let signal = load_signal(&input)?;
    let scenarios = manifest.resolve(&output_dir)?;

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create '{}'", output_dir.display()))?;

    println!("Input:  {} ({} samples)", input.display(), signal.len());
    println!("Output: {}", output_dir.display());
    println!();

    let pb = ProgressBar::new(scenarios.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );

    let mut written = Vec::with_capacity(scenarios.len());
    for scenario in &scenarios {
        pb.set_message(scenario.name.clone());
        let record = scenario
            .build_record(&signal)
            .with_context(|| format!("scenario '{}'", scenario.name))?;
        write_record(&record, &scenario.output)?;
        tracing::debug!(
            scenario = %scenario.name,
            down = scenario.resampling.down(),
            up = scenario.resampling.up(),
            samples = record.len(),
            "scenario complete"
        );
        written.push((scenario, record.len()));
        pb.inc(1);
    }
    pb.finish_with_message("done");

    println!("Wrote {} reference record(s):", written.len());
    for (scenario, len) in written {
        let family = if scenario.is_fir { "FIR" } else { "IIR" };
        println!(
            "  {:<26} {} down={} up={} -> {} samples",
            scenario.name,
            family,
            scenario.resampling.down(),
            scenario.resampling.up(),
            len
        );
    }

    Ok(())
}
