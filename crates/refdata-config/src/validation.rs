//! Manifest and scenario validation.
//!
//! Validation collects every problem it finds instead of stopping at the
//! first, so a broken manifest is reported in one pass before any scenario
//! writes output.
//!
//! # Example
//!
//! ```rust
//! use refdata_config::{ScenarioConfig, validate_scenario};
//!
//! let ok = ScenarioConfig::new("pass-through");
//! validate_scenario(&ok).expect("pass-through is valid");
//!
//! let bad = ScenarioConfig::new("bad").with_factors(0, 1);
//! assert!(validate_scenario(&bad).is_err());
//! ```

use std::collections::HashSet;
use thiserror::Error;

use crate::manifest::{Manifest, ScenarioConfig};

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The manifest lists no scenarios.
    #[error("manifest contains no scenarios")]
    EmptyManifest,

    /// Two scenarios share a name and would write the same file.
    #[error("duplicate scenario name: {0}")]
    DuplicateName(String),

    /// Name is empty or not usable as a file stem.
    #[error("invalid scenario name '{0}': must be a non-empty file stem")]
    InvalidName(String),

    /// A scenario's fields are inconsistent or out of range.
    #[error("scenario '{scenario}': {reason}")]
    InvalidScenario {
        /// Name of the scenario.
        scenario: String,
        /// Description of the problem.
        reason: String,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    fn scenario(scenario: &str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidScenario {
            scenario: scenario.to_string(),
            reason: reason.into(),
        }
    }

    fn from_list(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Multiple(errors)),
        }
    }

    /// Flatten into individual errors.
    pub fn into_errors(self) -> Vec<ValidationError> {
        match self {
            ValidationError::Multiple(errors) => errors,
            other => vec![other],
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.chars().any(|c| c == '/' || c == '\\' || c.is_control())
}

fn collect_scenario_errors(config: &ScenarioConfig, errors: &mut Vec<ValidationError>) {
    let name = config.name.as_str();

    if !is_valid_name(name) {
        errors.push(ValidationError::InvalidName(name.to_string()));
    }
    if config.down_sampling_factor == 0 {
        errors.push(ValidationError::scenario(
            name,
            "down_sampling_factor must be at least 1",
        ));
    }
    if config.up_sampling_factor == 0 {
        errors.push(ValidationError::scenario(
            name,
            "up_sampling_factor must be at least 1",
        ));
    }

    match config.a.first() {
        None => errors.push(ValidationError::scenario(name, "'a' must not be empty")),
        Some(&a0) if a0 == 0.0 => {
            errors.push(ValidationError::scenario(name, "a[0] must be non-zero"))
        }
        _ => {}
    }
    if config.a.iter().any(|v| !v.is_finite()) {
        errors.push(ValidationError::scenario(
            name,
            "'a' contains a non-finite coefficient",
        ));
    }

    match (&config.b, &config.design) {
        (Some(_), Some(_)) => errors.push(ValidationError::scenario(
            name,
            "both 'b' and 'design' are given",
        )),
        (None, None) => errors.push(ValidationError::scenario(
            name,
            "one of 'b' or 'design' is required",
        )),
        (Some(b), None) => {
            if b.is_empty() {
                errors.push(ValidationError::scenario(name, "'b' must not be empty"));
            } else if b.iter().any(|v| !v.is_finite()) {
                errors.push(ValidationError::scenario(
                    name,
                    "'b' contains a non-finite coefficient",
                ));
            }
        }
        (None, Some(design)) => {
            if design.taps == Some(0) {
                errors.push(ValidationError::scenario(
                    name,
                    "design taps must be at least 1",
                ));
            }
            if let Some(cutoff) = design.cutoff
                && !(cutoff > 0.0 && cutoff < 1.0)
            {
                errors.push(ValidationError::scenario(
                    name,
                    format!("design cutoff {cutoff} must lie in (0, 1)"),
                ));
            }
        }
    }
}

/// Validate one scenario, reporting every problem found.
pub fn validate_scenario(config: &ScenarioConfig) -> ValidationResult<()> {
    let mut errors = Vec::new();
    collect_scenario_errors(config, &mut errors);
    ValidationError::from_list(errors)
}

/// Validate a whole manifest: non-empty, unique names, and every scenario.
pub fn validate_manifest(manifest: &Manifest) -> ValidationResult<()> {
    if manifest.scenarios.is_empty() {
        return Err(ValidationError::EmptyManifest);
    }

    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for config in &manifest.scenarios {
        if !seen.insert(config.name.as_str()) {
            errors.push(ValidationError::DuplicateName(config.name.clone()));
        }
        collect_scenario_errors(config, &mut errors);
    }
    ValidationError::from_list(errors)
}
