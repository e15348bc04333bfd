//! Factory scenarios bundled with the refdata library.
//!
//! These cover the FIR and pass-through cases of the reference data suite and
//! need no external files. IIR scenarios with designed denominators are
//! supplied through a manifest.

use crate::{Manifest, ScenarioConfig};

/// Array of factory scenario names for external access.
pub static FACTORY_SCENARIO_NAMES: &[&str] = &[
    "fir-filter-up-sampling",
    "iir-filter-up-sampling",
    "fir-filter-high-fc",
    "fir-filter-low-fc",
    "fir-filter-down-sampling",
    "fir-filter-re-sampling",
    "filter-design",
];

/// TOML content for factory scenarios, embedded at compile time.
static FACTORY_SCENARIOS_TOML: &[(&str, &str)] = &[
    ("fir-filter-up-sampling", FIR_UP_SAMPLING),
    ("iir-filter-up-sampling", IIR_UP_SAMPLING),
    ("fir-filter-high-fc", FIR_HIGH_FC),
    ("fir-filter-low-fc", FIR_LOW_FC),
    ("fir-filter-down-sampling", FIR_DOWN_SAMPLING),
    ("fir-filter-re-sampling", FIR_RE_SAMPLING),
    ("filter-design", FILTER_DESIGN),
];

/// Up-sampling by 3; the filter stage is bypassed.
const FIR_UP_SAMPLING: &str = r#"
name = "fir-filter-up-sampling"
down_sampling_factor = 1
up_sampling_factor = 3
is_fir = true
design = { taps = 30, cutoff = 0.6666 }
"#;

/// Up-sampling by 3 with a pass-through recursive filter.
const IIR_UP_SAMPLING: &str = r#"
name = "iir-filter-up-sampling"
down_sampling_factor = 1
up_sampling_factor = 3
is_fir = false
a = [1.0]
b = [1.0]
"#;

/// 20-tap low-pass at 0.3 Nyquist, no resampling.
const FIR_HIGH_FC: &str = r#"
name = "fir-filter-high-fc"
down_sampling_factor = 1
up_sampling_factor = 1
is_fir = true
design = { taps = 20, cutoff = 0.3 }
"#;

/// 20-tap low-pass at 0.1 Nyquist, no resampling.
const FIR_LOW_FC: &str = r#"
name = "fir-filter-low-fc"
down_sampling_factor = 1
up_sampling_factor = 1
is_fir = true
design = { taps = 20, cutoff = 0.1 }
"#;

/// Anti-aliasing low-pass followed by decimation by 3.
const FIR_DOWN_SAMPLING: &str = r#"
name = "fir-filter-down-sampling"
down_sampling_factor = 3
up_sampling_factor = 1
is_fir = true
design = { taps = 30, cutoff = 0.333 }
"#;

/// Rational 2/3 resampling.
const FIR_RE_SAMPLING: &str = r#"
name = "fir-filter-re-sampling"
down_sampling_factor = 3
up_sampling_factor = 2
is_fir = true
design = { taps = 30, cutoff = 0.666 }
"#;

/// Default production design: 30 taps at `up / down`.
const FILTER_DESIGN: &str = r#"
name = "filter-design"
down_sampling_factor = 3
up_sampling_factor = 1
is_fir = false
design = {}
"#;

/// Get all factory scenarios, in suite order.
///
/// # Example
///
/// ```rust
/// use refdata_config::factory_scenarios;
///
/// for scenario in factory_scenarios() {
///     println!("{} -> {}", scenario.name, scenario.file_name());
/// }
/// ```
pub fn factory_scenarios() -> Vec<ScenarioConfig> {
    FACTORY_SCENARIOS_TOML
        .iter()
        .filter_map(|(_, toml)| ScenarioConfig::from_toml(toml).ok())
        .collect()
}

/// All factory scenarios as one manifest.
pub fn factory_manifest() -> Manifest {
    Manifest::new(factory_scenarios())
}

/// Get a factory scenario by name (case-insensitive).
///
/// # Example
///
/// ```rust
/// use refdata_config::get_factory_scenario;
///
/// let scenario = get_factory_scenario("fir-filter-low-fc").unwrap();
/// assert_eq!(scenario.down_sampling_factor, 1);
/// ```
pub fn get_factory_scenario(name: &str) -> Option<ScenarioConfig> {
    FACTORY_SCENARIOS_TOML
        .iter()
        .find(|(scenario_name, _)| scenario_name.eq_ignore_ascii_case(name))
        .and_then(|(_, toml)| ScenarioConfig::from_toml(toml).ok())
}

/// Get the names of all factory scenarios.
pub fn factory_scenario_names() -> Vec<&'static str> {
    FACTORY_SCENARIOS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a name refers to a factory scenario (case-insensitive).
///
/// ```rust
/// use refdata_config::is_factory_scenario;
///
/// assert!(is_factory_scenario("filter-design"));
/// assert!(is_factory_scenario("Filter-Design"));
/// assert!(!is_factory_scenario("iir-filter-down-sampling"));
/// ```
pub fn is_factory_scenario(name: &str) -> bool {
    FACTORY_SCENARIO_NAMES
        .iter()
        .any(|n| n.eq_ignore_ascii_case(name))
}
