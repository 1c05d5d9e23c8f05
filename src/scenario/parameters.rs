//! Scenario parameters: the inputs of a simulation run
//!
//! A [`ScenarioParameters`] record is what gets serialized verbatim to JSON
//! by the export layer. The named constants live in a `BTreeMap` so the
//! serialized form is deterministic regardless of insertion order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Input description of a simulation run.
///
/// # Fields
///
/// - `name`: scenario identifier (e.g. `"breakthrough-2mM"`)
/// - `model`: physical model name (e.g. `"LangmuirSingle"`)
/// - `solver`: numerical method name (e.g. `"RK4"`)
/// - `total_time`: total simulated time (seconds)
/// - `time_steps`: number of integration steps
/// - `constants`: named numeric constants of the model, sorted by name
///
/// # Example
///
/// ```rust
/// use simout_rs::scenario::ScenarioParameters;
///
/// let params = ScenarioParameters::new("tfa", "LangmuirSingle", "Forward Euler", 200.0, 2000)
///     .with_constant("lambda", 1.2)
///     .with_constant("porosity", 0.4);
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Scenario identifier
    pub name: String,

    /// Physical model name
    pub model: String,

    /// Numerical method name
    pub solver: String,

    /// Total simulated time (seconds)
    pub total_time: f64,

    /// Number of integration steps
    pub time_steps: usize,

    /// Named numeric constants, sorted by name
    #[serde(default)]
    pub constants: BTreeMap<String, f64>,
}

impl ScenarioParameters {
    /// Create a parameter record with an empty constant table.
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        solver: impl Into<String>,
        total_time: f64,
        time_steps: usize,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            solver: solver.into(),
            total_time,
            time_steps,
            constants: BTreeMap::new(),
        }
    }

    /// Builder pattern: add one named constant.
    pub fn with_constant(mut self, key: impl Into<String>, value: f64) -> Self {
        self.constants.insert(key.into(), value);
        self
    }

    /// Validate that the parameters are physically meaningful.
    ///
    /// # Errors
    ///
    /// - non-positive `total_time`
    /// - zero `time_steps`
    /// - non-finite constant values
    pub fn validate(&self) -> Result<(), String> {
        if self.total_time <= 0.0 {
            return Err("Total time must be positive".to_string());
        }
        if self.time_steps == 0 {
            return Err("Time steps must be greater than 0".to_string());
        }
        for (key, value) in &self.constants {
            if !value.is_finite() {
                return Err(format!("Constant {} is not finite", key));
            }
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sorts_constants() {
        let params = ScenarioParameters::new("s", "m", "euler", 10.0, 100)
            .with_constant("zeta", 1.0)
            .with_constant("alpha", 2.0);

        let keys: Vec<&str> = params.constants.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_validate_accepts_reasonable_parameters() {
        let params = ScenarioParameters::new("s", "m", "euler", 600.0, 1000);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_time() {
        let params = ScenarioParameters::new("s", "m", "euler", 0.0, 1000);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_steps() {
        let params = ScenarioParameters::new("s", "m", "euler", 600.0, 0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_constant() {
        let params =
            ScenarioParameters::new("s", "m", "euler", 600.0, 1000).with_constant("k", f64::NAN);
        let err = params.validate().unwrap_err();
        assert!(err.contains("k"), "error should name the constant: {}", err);
    }
}
