//! Signal loading.
//!
//! Text input is a headerless, single-column delimited file with one decimal
//! sample per line. Blank lines and surrounding whitespace are ignored.
//! Files with a `.wav` extension are read as mono WAV instead.

use std::io::Read;
use std::path::Path;

use hound::{SampleFormat, WavReader};
use refdata_core::Signal;

use crate::{Error, Result};

/// Load a signal from `path`, dispatching on the file extension.
///
/// # Errors
///
/// [`Error::MalformedInput`] if the file cannot be opened, holds no samples,
/// has more than one column (or channel), or contains a cell that is not a
/// finite number.
pub fn load_signal(path: impl AsRef<Path>) -> Result<Signal> {
    let path = path.as_ref();
    let is_wav = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"));

    let samples = if is_wav {
        read_wav_samples(path)?
    } else {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::malformed(path, format!("cannot open file: {e}")))?;
        parse_samples(file, path)?
    };

    if samples.is_empty() {
        return Err(Error::malformed(path, "file contains no samples"));
    }

    tracing::debug!(path = %path.display(), samples = samples.len(), "loaded signal");
    Ok(Signal::new(samples))
}

/// Parse one-column text samples from `reader`; `path` is only used in errors.
pub fn parse_samples<R: Read>(reader: R, path: &Path) -> Result<Vec<f64>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();

    for (row_no, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| Error::malformed(path, format!("row {}: {e}", row_no + 1)))?;
        let line = record.position().map_or(row_no as u64 + 1, |p| p.line());

        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() != 1 {
            return Err(Error::malformed(
                path,
                format!("line {line}: expected one column, found {}", record.len()),
            ));
        }

        let cell = &record[0];
        let value: f64 = cell
            .parse()
            .map_err(|_| Error::malformed(path, format!("line {line}: '{cell}' is not a number")))?;
        if !value.is_finite() {
            return Err(Error::malformed(
                path,
                format!("line {line}: '{cell}' is not a finite number"),
            ));
        }
        samples.push(value);
    }

    Ok(samples)
}

/// Read a mono WAV file. Integer PCM is scaled to `[-1, 1)`.
fn read_wav_samples(path: &Path) -> Result<Vec<f64>> {
    let reader =
        WavReader::open(path).map_err(|e| Error::malformed(path, format!("cannot read WAV: {e}")))?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(Error::malformed(
            path,
            format!("expected a mono WAV file, found {} channels", spec.channels),
        ));
    }

    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>(),
        SampleFormat::Int => {
            let max_val = f64::from(1u32 << (spec.bits_per_sample - 1));
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()
        }
    };

    samples.map_err(|e| Error::malformed(path, format!("cannot read WAV samples: {e}")))
}
