//! Integration tests for refdata-io: signal loading and record files.

use std::path::Path;

use refdata_core::{FilterSpec, ReferenceRecord, ResamplingSpec, Signal};
use refdata_io::{Error, load_signal, read_record, render_record, write_record};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_text(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn fir_record(signal: &Signal) -> ReferenceRecord {
    ReferenceRecord::build(
        signal,
        &ResamplingSpec::new(2, 1).unwrap(),
        &FilterSpec::fir(vec![0.2, 0.6, 0.2]).unwrap(),
        true,
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Signal loading
// ---------------------------------------------------------------------------

#[test]
fn load_text_signal() {
    let dir = TempDir::new().unwrap();
    let path = write_text(dir.path(), "test-signal.txt", "0.25\n-0.5\n1e-3\n");
    let signal = load_signal(&path).unwrap();
    assert_eq!(signal.as_slice(), &[0.25, -0.5, 1e-3]);
}

#[test]
fn load_empty_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_text(dir.path(), "empty.txt", "\n\n");
    let err = load_signal(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { .. }));
    assert!(err.to_string().contains("no samples"), "got: {err}");
}

#[test]
fn load_non_numeric_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_text(dir.path(), "bad.txt", "0.1\n0.2\nhello\n");
    assert!(matches!(
        load_signal(&path),
        Err(Error::MalformedInput { .. })
    ));
}

#[test]
fn load_mono_wav() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signal.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for v in [0i16, 16384, -16384, 32767] {
        writer.write_sample(v).unwrap();
    }
    writer.finalize().unwrap();

    let signal = load_signal(&path).unwrap();
    assert_eq!(signal.len(), 4);
    assert_eq!(signal[0], 0.0);
    assert_eq!(signal[1], 0.5);
    assert_eq!(signal[2], -0.5);
    assert!((signal[3] - 32767.0 / 32768.0).abs() < 1e-12);
}

#[test]
fn load_stereo_wav_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stereo.wav");
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 8000,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for _ in 0..4 {
        writer.write_sample(0.1f32).unwrap();
    }
    writer.finalize().unwrap();

    let err = load_signal(&path).unwrap_err();
    assert!(err.to_string().contains("mono"), "got: {err}");
}

// ---------------------------------------------------------------------------
// Record files
// ---------------------------------------------------------------------------

#[test]
fn write_then_read_record() {
    let dir = TempDir::new().unwrap();
    let signal = Signal::new((0..20).map(|i| f64::from(i) * 0.1).collect());
    let record = fir_record(&signal);
    let path = dir.path().join("fir.json");

    write_record(&record, &path).unwrap();
    let loaded = read_record(&path).unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn written_file_matches_rendered_text() {
    let dir = TempDir::new().unwrap();
    let signal = Signal::new(vec![1.0, -1.0, 0.5, 0.25, -0.125]);
    let record = fir_record(&signal);
    let path = dir.path().join("fir.json");

    write_record(&record, &path).unwrap();
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, render_record(&record).unwrap());
    assert!(on_disk.starts_with("{\n    \"down_sampling_factor\": 2,"));
    assert!(!on_disk.ends_with('\n'));
}

#[test]
fn rewriting_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let signal = Signal::new((0..50).map(|i| (f64::from(i) * 0.37).sin()).collect());
    let record = fir_record(&signal);
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    write_record(&record, &first).unwrap();
    write_record(&record, &second).unwrap();
    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn write_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = write_text(dir.path(), "out.json", "stale content that is longer than needed");
    let record = fir_record(&Signal::new(vec![1.0, 2.0]));

    write_record(&record, &path).unwrap();
    assert_eq!(read_record(&path).unwrap(), record);
}

#[cfg(unix)]
fn file_mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).unwrap().permissions().mode() & 0o777
}

#[cfg(unix)]
#[test]
fn new_record_gets_default_file_mode() {
    let dir = TempDir::new().unwrap();
    let plain = write_text(dir.path(), "plain.txt", "x");
    let path = dir.path().join("out.json");

    write_record(&fir_record(&Signal::new(vec![1.0, 2.0])), &path).unwrap();
    assert_eq!(file_mode(&path), file_mode(&plain));
}

#[cfg(unix)]
#[test]
fn overwrite_keeps_existing_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = write_text(dir.path(), "out.json", "old");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

    write_record(&fir_record(&Signal::new(vec![1.0, 2.0])), &path).unwrap();
    assert_eq!(file_mode(&path), 0o640);
}

#[test]
fn write_to_missing_directory_fails_without_leaving_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.json");
    let record = fir_record(&Signal::new(vec![1.0, 2.0]));

    let err = write_record(&record, &path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got: {err:?}");
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn non_finite_record_is_not_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("unstable.json");
    let mut record = fir_record(&Signal::new(vec![1.0, 2.0]));
    record.reference_data.push(f64::NAN);

    assert!(matches!(
        write_record(&record, &path),
        Err(Error::NonFinite { .. })
    ));
    assert!(!path.exists());
}

#[test]
fn read_record_rejects_invalid_factors() {
    let dir = TempDir::new().unwrap();
    let path = write_text(
        dir.path(),
        "bad.json",
        r#"{"down_sampling_factor": 0, "up_sampling_factor": 1, "a": [1.0], "b": [1.0], "is_fir": true, "reference_data": []}"#,
    );
    assert!(matches!(read_record(&path), Err(Error::Core(_))));
}

#[test]
fn read_record_accepts_integer_coefficients() {
    let dir = TempDir::new().unwrap();
    let path = write_text(
        dir.path(),
        "ints.json",
        r#"{"down_sampling_factor": 1, "up_sampling_factor": 3, "a": [1], "b": [1], "is_fir": false, "reference_data": [0.5, 1]}"#,
    );
    let record = read_record(&path).unwrap();
    assert_eq!(record.a, vec![1.0]);
    assert_eq!(record.reference_data, vec![0.5, 1.0]);
}
