//! Reference-record JSON encoding.
//!
//! The downstream test suite reads files laid out like this:
//!
//! ```text
//! {
//!     "down_sampling_factor": 3,
//!     "up_sampling_factor": 1,
//!     "a": [
//!         1.0
//!     ],
//!     "b": [
//!         -0.0011624873830472395,
//!         ...
//!     ],
//!     "is_fir": true,
//!     "reference_data": [
//!         ...
//!     ]
//! }
//! ```
//!
//! Four-space indentation, keys in declaration order, no trailing newline.
//! Floats use the shortest decimal that round-trips, written in fixed
//! notation when the decimal exponent lies in `[-4, 16)` and in exponent
//! notation (`1e-05`, `2.5e+16`) otherwise. Integral floats keep a `.0`.
//!
//! Coefficients are always floats, so a denominator given as `a = [1]` is
//! written `1.0`. Records emitted by tools that keep integer coefficients
//! as JSON integers (`"a": [1]`) hold the same values but differ in text;
//! compare such files by value, not byte for byte.
//!
//! Records are replaced atomically. A new file gets the mode a plain
//! `File::create` would give it, and an overwritten file keeps its mode.

use std::io::{self, Write};
use std::path::Path;

use refdata_core::ReferenceRecord;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use tempfile::NamedTempFile;

use crate::{Error, Result};

const INDENT: &[u8] = b"    ";

/// A pretty-printing [`Formatter`] with four-space indentation and
/// the record float notation of [`format_float`].
pub struct RecordFormatter {
    pretty: PrettyFormatter<'static>,
}

impl RecordFormatter {
    /// Create a formatter with four-space indentation.
    pub fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Default for RecordFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for RecordFormatter {
    fn write_f64<W: ?Sized + Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(format_float(value).as_bytes())
    }

    fn write_f32<W: ?Sized + Write>(&mut self, writer: &mut W, value: f32) -> io::Result<()> {
        self.write_f64(writer, f64::from(value))
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}

/// Format a finite float as the shortest round-trip decimal.
///
/// Plain decimal notation is used for decimal exponents in `[-4, 16)`, and
/// `d.ddde±XX` notation otherwise; integral values keep a trailing `.0`.
///
/// `0.5` → `"0.5"`, `1.0` → `"1.0"`, `1e-5` → `"1e-05"`, `-2.5e16` → `"-2.5e+16"`.
pub fn format_float(value: f64) -> String {
    // `{:e}` yields the shortest round-trip digits, e.g. "-1.25e-7" or "3e0".
    let sci = format!("{value:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(digits.len() + 8);
    out.push_str(sign);

    if (-4..16).contains(&exp) {
        if exp >= 0 {
            let int_len = exp as usize + 1;
            if digits.len() > int_len {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            } else {
                out.push_str(&digits);
                out.extend(std::iter::repeat_n('0', int_len - digits.len()));
                out.push_str(".0");
            }
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', (-exp - 1) as usize));
            out.push_str(&digits);
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exp.unsigned_abs()));
    }

    out
}

fn check_finite(field: &'static str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFinite { field, index }),
        None => Ok(()),
    }
}

fn encode(record: &ReferenceRecord) -> std::result::Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(32 * (record.reference_data.len() + record.b.len()) + 256);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, RecordFormatter::new());
    record.serialize(&mut ser)?;
    Ok(buf)
}

/// Render `record` as canonical JSON text.
///
/// Identical records always render to identical bytes.
///
/// # Errors
///
/// [`Error::NonFinite`] if any coefficient or reference sample is NaN or infinite.
pub fn render_record(record: &ReferenceRecord) -> Result<String> {
    check_finite("a", &record.a)?;
    check_finite("b", &record.b)?;
    check_finite("reference_data", &record.reference_data)?;

    let bytes = encode(record).map_err(|e| Error::json("<memory>", e))?;
    // The formatter only emits ASCII.
    String::from_utf8(bytes).map_err(|e| Error::io("<memory>", io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write `record` to `path`, replacing any existing file.
///
/// The text goes to a temporary file in the destination directory which is
/// then renamed over `path`, so readers never observe a partially written
/// record and a failed write leaves no file behind.
///
/// # Errors
///
/// [`Error::NonFinite`] for unrepresentable values, [`Error::Io`] if the
/// destination directory is not writable.
pub fn write_record(record: &ReferenceRecord, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = render_record(record)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    // tempfile creates owner-only files; ask for 0o666 so the umask applies.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp: NamedTempFile = builder.tempfile_in(dir).map_err(|e| Error::io(path, e))?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| Error::io(path, e))?;
    }
    tmp.write_all(text.as_bytes()).map_err(|e| Error::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(path, e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;

    tracing::info!(
        path = %path.display(),
        samples = record.reference_data.len(),
        "wrote reference record"
    );
    Ok(())
}

/// Read a reference record previously written by [`write_record`].
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be read, [`Error::Json`] if it is not a
/// record, [`Error::Core`] if its factors or coefficients are invalid.
pub fn read_record(path: impl AsRef<Path>) -> Result<ReferenceRecord> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let record: ReferenceRecord = serde_json::from_str(&text).map_err(|e| Error::json(path, e))?;
    record.resampling()?;
    record.filter()?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ReferenceRecord {
        ReferenceRecord {
            down_sampling_factor: 3,
            up_sampling_factor: 1,
            a: vec![1.0],
            b: vec![0.25, 0.5, 0.25],
            is_fir: true,
            reference_data: vec![0.0, -1.5e-7, 12.0],
        }
    }

    #[test]
    fn float_fixed_notation() {
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-3.0), "-3.0");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(123.456), "123.456");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(0.3333333333333333), "0.3333333333333333");
    }

    #[test]
    fn float_exponent_notation() {
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(-1.5e-7), "-1.5e-07");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(2.5e16), "2.5e+16");
        assert_eq!(format_float(1.2345678901234568e17), "1.2345678901234568e+17");
        assert_eq!(format_float(5e-324), "5e-324");
        assert_eq!(format_float(1.7976931348623157e308), "1.7976931348623157e+308");
    }

    #[test]
    fn float_zeros() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
    }

    #[test]
    fn float_round_trips() {
        for &v in &[0.1, 2.0 / 3.0, -1e-10, 6.02214076e23, 0.046221498602406160] {
            let text = format_float(v);
            assert_eq!(text.parse::<f64>().unwrap(), v, "{text}");
        }
    }

    #[test]
    fn renders_canonical_layout() {
        let text = render_record(&sample_record()).unwrap();
        let expected = "{
    \"down_sampling_factor\": 3,
    \"up_sampling_factor\": 1,
    \"a\": [
        1.0
    ],
    \"b\": [
        0.25,
        0.5,
        0.25
    ],
    \"is_fir\": true,
    \"reference_data\": [
        0.0,
        -1.5e-07,
        12.0
    ]
}";
        assert_eq!(text, expected);
    }

    #[test]
    fn integral_coefficients_render_as_floats() {
        let json = r#"{"down_sampling_factor": 1, "up_sampling_factor": 1,
            "a": [1], "b": [2, 0.5], "is_fir": true, "reference_data": [3]}"#;
        let record: ReferenceRecord = serde_json::from_str(json).unwrap();
        let text = render_record(&record).unwrap();
        assert!(text.contains("\"a\": [\n        1.0\n    ]"), "got: {text}");
        assert!(text.contains("        2.0,\n        0.5\n"), "got: {text}");
        assert!(text.contains("\"reference_data\": [\n        3.0\n    ]"), "got: {text}");
    }

    #[test]
    fn renders_empty_reference_data() {
        let mut record = sample_record();
        record.reference_data.clear();
        let text = render_record(&record).unwrap();
        assert!(text.contains("\"reference_data\": []"), "got: {text}");
    }

    #[test]
    fn rejects_non_finite_samples() {
        let mut record = sample_record();
        record.reference_data[2] = f64::INFINITY;
        assert!(matches!(
            render_record(&record),
            Err(Error::NonFinite { field: "reference_data", index: 2 })
        ));
    }

    #[test]
    fn rendered_text_parses_back() {
        let record = sample_record();
        let text = render_record(&record).unwrap();
        let parsed: ReferenceRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, record);
    }
}
