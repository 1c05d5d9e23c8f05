//! JSON serialization of scenario parameters
//!
//! Parameters are written pretty-printed so exported files stay readable
//! and diffable. The constant table is a `BTreeMap`, so the output is
//! deterministic for equal inputs.

use serde::Serialize;

use crate::scenario::ScenarioParameters;

/// Serialize any value to pretty-printed JSON text.
///
/// The export layer uses this for [`ScenarioParameters`]; it is generic so
/// callers can reuse it for their own records.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Parse scenario parameters back from JSON text.
///
/// Counterpart of [`to_json`] for re-importing a previously exported
/// parameter file.
pub fn parse_parameters(text: &str) -> Result<ScenarioParameters, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_parameters_parse_back() {
        let params = ScenarioParameters::new("tfa", "LangmuirSingle", "RK4", 200.0, 2000)
            .with_constant("porosity", 0.4);

        let text = to_json(&params).unwrap();
        let parsed = parse_parameters(&text).unwrap();
        assert_eq!(parsed, params);
    }

    #[test]
    fn test_output_is_pretty_printed() {
        let params = ScenarioParameters::new("tfa", "m", "euler", 200.0, 2000);
        let text = to_json(&params).unwrap();

        assert!(text.contains("\n"));
        assert!(text.contains("\"name\": \"tfa\""));
    }

    #[test]
    fn test_missing_constants_default_to_empty() {
        let text = r#"{
            "name": "s",
            "model": "m",
            "solver": "euler",
            "total_time": 10.0,
            "time_steps": 100
        }"#;

        let parsed = parse_parameters(text).unwrap();
        assert!(parsed.constants.is_empty());
    }
}
