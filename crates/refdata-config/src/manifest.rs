//! Scenario manifest file format and operations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use refdata_core::{DEFAULT_FIR_TAPS, ResamplingSpec, default_fir_cutoff, firwin};

use crate::error::ConfigError;
use crate::scenario::Scenario;
use crate::validation::{ValidationError, validate_manifest, validate_scenario};

/// A list of scenarios sharing one input signal.
///
/// # TOML Format
///
/// ```toml
/// input = "test-signal.txt"
/// output_dir = "reference-data"
///
/// [[scenario]]
/// name = "fir-filter-down-sampling"
/// down_sampling_factor = 3
/// up_sampling_factor = 1
/// is_fir = true
/// [scenario.design]
/// taps = 30
/// cutoff = 0.333
///
/// [[scenario]]
/// name = "iir-filter-down-sampling"
/// down_sampling_factor = 3
/// is_fir = false
/// a = [1.0, -0.5]
/// b = [0.25, 0.25]
/// ```
///
/// Relative `input` and `output_dir` paths are resolved against the
/// directory of the manifest file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Input signal file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Directory the reference records are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Scenarios, run in order.
    #[serde(default, rename = "scenario")]
    pub scenarios: Vec<ScenarioConfig>,

    /// Directory of the file this manifest was loaded from.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Manifest {
    /// Create a manifest from a scenario list.
    pub fn new(scenarios: Vec<ScenarioConfig>) -> Self {
        Self {
            scenarios,
            ..Self::default()
        }
    }

    /// Set the input signal path.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Load a manifest from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let mut manifest = Self::from_toml(&content)?;
        manifest.base_dir = path.parent().map(Path::to_path_buf);
        Ok(manifest)
    }

    /// Parse a manifest from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the manifest to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the manifest to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Input path, resolved against the manifest directory.
    pub fn input_path(&self) -> Option<PathBuf> {
        self.input.as_deref().map(|p| self.resolve_path(p))
    }

    /// Output directory, resolved against the manifest directory.
    pub fn output_dir_path(&self) -> Option<PathBuf> {
        self.output_dir.as_deref().map(|p| self.resolve_path(p))
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Keep only the scenarios named in `names`, in manifest order.
    ///
    /// Returns [`ConfigError::UnknownScenario`] for the first name that does
    /// not occur in the manifest.
    pub fn select(mut self, names: &[String]) -> Result<Self, ConfigError> {
        if let Some(missing) = names
            .iter()
            .find(|n| !self.scenarios.iter().any(|s| &s.name == *n))
        {
            return Err(ConfigError::UnknownScenario(missing.clone()));
        }
        self.scenarios.retain(|s| names.contains(&s.name));
        Ok(self)
    }

    /// Validate every scenario and resolve them against `output_dir`.
    pub fn resolve(&self, output_dir: impl AsRef<Path>) -> Result<Vec<Scenario>, ConfigError> {
        validate_manifest(self)?;
        let output_dir = output_dir.as_ref();
        self.scenarios
            .iter()
            .map(|s| s.resolve(output_dir))
            .collect()
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// True if the manifest holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Look up a scenario by name.
    pub fn get(&self, name: &str) -> Option<&ScenarioConfig> {
        self.scenarios.iter().find(|s| s.name == name)
    }
}

/// Windowed-sinc FIR low-pass design parameters.
///
/// Missing values fall back to the production filter defaults:
/// [`DEFAULT_FIR_TAPS`] taps and a cutoff of `up / down`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FirDesign {
    /// Number of taps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taps: Option<usize>,
    /// Cutoff normalized to Nyquist, in `(0, 1)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
}

impl FirDesign {
    /// Design parameters with explicit taps and cutoff.
    pub fn new(taps: usize, cutoff: f64) -> Self {
        Self {
            taps: Some(taps),
            cutoff: Some(cutoff),
        }
    }
}

/// One scenario as written in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioConfig {
    /// Scenario name, also the output file stem.
    pub name: String,

    /// Decimation factor (defaults to 1).
    #[serde(default = "default_factor")]
    pub down_sampling_factor: usize,

    /// Interpolation factor (defaults to 1).
    #[serde(default = "default_factor")]
    pub up_sampling_factor: usize,

    /// Filter family flag; defaults to `a.len() == 1` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fir: Option<bool>,

    /// Denominator coefficients (defaults to `[1.0]`).
    #[serde(default = "default_denominator")]
    pub a: Vec<f64>,

    /// Explicit numerator coefficients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<Vec<f64>>,

    /// Numerator designed as a windowed-sinc FIR low-pass instead of `b`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<FirDesign>,
}

fn default_factor() -> usize {
    1
}

fn default_denominator() -> Vec<f64> {
    vec![1.0]
}

impl ScenarioConfig {
    /// Create a pass-through scenario: no resampling, `b = [1]`, `a = [1]`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            down_sampling_factor: 1,
            up_sampling_factor: 1,
            is_fir: None,
            a: default_denominator(),
            b: Some(vec![1.0]),
            design: None,
        }
    }

    /// Parse a single scenario from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Set the sampling factors.
    pub fn with_factors(mut self, down: usize, up: usize) -> Self {
        self.down_sampling_factor = down;
        self.up_sampling_factor = up;
        self
    }

    /// Set the denominator coefficients.
    pub fn with_denominator(mut self, a: Vec<f64>) -> Self {
        self.a = a;
        self
    }

    /// Set explicit numerator coefficients, replacing any design.
    pub fn with_numerator(mut self, b: Vec<f64>) -> Self {
        self.b = Some(b);
        self.design = None;
        self
    }

    /// Design the numerator, replacing any explicit taps.
    pub fn with_design(mut self, design: FirDesign) -> Self {
        self.design = Some(design);
        self.b = None;
        self
    }

    /// Set the filter family flag.
    pub fn with_fir_flag(mut self, is_fir: bool) -> Self {
        self.is_fir = Some(is_fir);
        self
    }

    /// Output file name: `<name>.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    /// Effective filter family flag.
    pub fn is_fir(&self) -> bool {
        self.is_fir.unwrap_or(self.a.len() == 1)
    }

    /// Numerator coefficients, designing them if needed.
    pub fn numerator(&self, resampling: &ResamplingSpec) -> Result<Vec<f64>, ConfigError> {
        match (&self.b, &self.design) {
            (Some(b), None) => Ok(b.clone()),
            (None, Some(design)) => {
                let taps = design.taps.unwrap_or(DEFAULT_FIR_TAPS);
                let cutoff = design.cutoff.unwrap_or_else(|| default_fir_cutoff(resampling));
                firwin(taps, cutoff).map_err(|e| ConfigError::core(&self.name, e))
            }
            (Some(_), Some(_)) => Err(ValidationError::InvalidScenario {
                scenario: self.name.clone(),
                reason: "both 'b' and 'design' are given".to_string(),
            }
            .into()),
            (None, None) => Err(ValidationError::InvalidScenario {
                scenario: self.name.clone(),
                reason: "one of 'b' or 'design' is required".to_string(),
            }
            .into()),
        }
    }

    /// Validate and turn this configuration into a runnable [`Scenario`]
    /// writing to `output_dir/<name>.json`.
    pub fn resolve(&self, output_dir: impl AsRef<Path>) -> Result<Scenario, ConfigError> {
        validate_scenario(self)?;

        let resampling = ResamplingSpec::new(self.down_sampling_factor, self.up_sampling_factor)
            .map_err(|e| ConfigError::core(&self.name, e))?;
        let b = self.numerator(&resampling)?;
        let filter = refdata_core::FilterSpec::new(self.a.clone(), b)
            .map_err(|e| ConfigError::core(&self.name, e))?;
        let is_fir = self.is_fir();

        if is_fir != filter.is_structurally_fir() {
            tracing::warn!(
                scenario = %self.name,
                is_fir,
                denominator_len = filter.a().len(),
                "is_fir flag disagrees with the filter structure"
            );
        }

        Ok(Scenario {
            name: self.name.clone(),
            resampling,
            filter,
            is_fir,
            output: output_dir.as_ref().join(self.file_name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
input = "test-signal.txt"
output_dir = "out"

[[scenario]]
name = "fir-filter-re-sampling"
down_sampling_factor = 3
up_sampling_factor = 2
is_fir = true
design = { taps = 30, cutoff = 0.666 }

[[scenario]]
name = "iir-filter-up-sampling"
up_sampling_factor = 3
is_fir = false
a = [1]
b = [1]
"#;

    #[test]
    fn parses_manifest() {
        let manifest = Manifest::from_toml(MANIFEST).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.input, Some(PathBuf::from("test-signal.txt")));

        let fir = manifest.get("fir-filter-re-sampling").unwrap();
        assert_eq!(fir.down_sampling_factor, 3);
        assert_eq!(fir.up_sampling_factor, 2);
        assert_eq!(fir.a, vec![1.0]);
        assert_eq!(fir.design, Some(FirDesign::new(30, 0.666)));

        let iir = manifest.get("iir-filter-up-sampling").unwrap();
        assert_eq!(iir.down_sampling_factor, 1);
        assert_eq!(iir.b, Some(vec![1.0]));
        assert!(!iir.is_fir());
    }

    #[test]
    fn resolves_scenarios() {
        let manifest = Manifest::from_toml(MANIFEST).unwrap();
        let scenarios = manifest.resolve("/tmp/refs").unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].filter.b().len(), 30);
        assert_eq!(
            scenarios[0].output,
            PathBuf::from("/tmp/refs/fir-filter-re-sampling.json")
        );
        assert_eq!(scenarios[1].resampling.up(), 3);
        assert!(!scenarios[1].is_fir);
    }

    #[test]
    fn is_fir_defaults_to_structure() {
        let fir = ScenarioConfig::new("x");
        assert!(fir.is_fir());
        let iir = ScenarioConfig::new("y").with_denominator(vec![1.0, -0.5]);
        assert!(!iir.is_fir());
        assert!(iir.with_fir_flag(true).is_fir());
    }

    #[test]
    fn design_defaults_follow_resampling() {
        let config = ScenarioConfig::new("filter-design")
            .with_factors(3, 1)
            .with_design(FirDesign::default());
        let resampling = ResamplingSpec::new(3, 1).unwrap();
        let b = config.numerator(&resampling).unwrap();
        assert_eq!(b, firwin(DEFAULT_FIR_TAPS, 1.0 / 3.0).unwrap());
    }

    #[test]
    fn bad_design_reports_scenario() {
        let config = ScenarioConfig::new("broken").with_design(FirDesign::new(10, 1.5));
        let err = config.resolve("out").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
    }

    #[test]
    fn select_keeps_manifest_order() {
        let manifest = Manifest::from_toml(MANIFEST).unwrap();
        let names = vec![
            "iir-filter-up-sampling".to_string(),
            "fir-filter-re-sampling".to_string(),
        ];
        let selected = manifest.clone().select(&names).unwrap();
        assert_eq!(selected.scenarios[0].name, "fir-filter-re-sampling");

        let err = manifest.select(&["missing".to_string()]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownScenario(ref n) if n == "missing"));
    }

    #[test]
    fn toml_round_trip() {
        let manifest = Manifest::from_toml(MANIFEST).unwrap();
        let text = manifest.to_toml().unwrap();
        assert_eq!(Manifest::from_toml(&text).unwrap(), manifest);
    }

    #[test]
    fn relative_paths_without_base_are_unchanged() {
        let manifest = Manifest::from_toml(MANIFEST).unwrap();
        assert_eq!(manifest.input_path(), Some(PathBuf::from("test-signal.txt")));
        assert_eq!(manifest.output_dir_path(), Some(PathBuf::from("out")));
    }
}
