//! Scenario configuration for the refdata pipeline.
//!
//! A scenario is one choice of filter coefficients, sampling factors and
//! filter-type flag, plus the file its reference record is written to.
//! Scenarios are grouped in TOML manifests; a built-in set covers the
//! FIR and pass-through cases of the reference data suite.
//!
//! # Features
//!
//! - **Manifests**: Load and save scenario lists from TOML files
//! - **Coefficients**: Explicit `b` taps or a windowed-sinc FIR design
//! - **Validation**: Collect every problem in a manifest before running any scenario
//! - **Factory Scenarios**: Built-in scenarios that need no external files
//!
//! # Example
//!
//! ```rust
//! use refdata_config::Manifest;
//!
//! let manifest = Manifest::from_toml(r#"
//!     [[scenario]]
//!     name = "fir-filter-down-sampling"
//!     down_sampling_factor = 3
//!     up_sampling_factor = 1
//!     is_fir = true
//!     design = { taps = 30, cutoff = 0.333 }
//! "#).unwrap();
//!
//! let scenarios = manifest.resolve("reference-data").unwrap();
//! assert_eq!(scenarios[0].output.file_name().unwrap(), "fir-filter-down-sampling.json");
//! ```

mod error;
mod manifest;
mod scenario;

/// Manifest and scenario validation.
pub mod validation;

/// Factory scenarios bundled with the library.
pub mod factory_scenarios;

pub use error::ConfigError;
pub use factory_scenarios::{
    FACTORY_SCENARIO_NAMES, factory_manifest, factory_scenario_names, factory_scenarios,
    get_factory_scenario, is_factory_scenario,
};
pub use manifest::{FirDesign, Manifest, ScenarioConfig};
pub use scenario::Scenario;
pub use validation::{ValidationError, ValidationResult, validate_manifest, validate_scenario};
