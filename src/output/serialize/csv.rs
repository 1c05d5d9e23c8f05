//! CSV serialization of simulation trajectories
//!
//! This module turns a [`Trajectory`] into CSV text compatible with Excel,
//! Python pandas, MATLAB, and most data analysis tools. Two verbosity
//! variants exist:
//!
//! - **Summary**: one `time` column plus the mean of each variable
//! - **Detailed**: one `time` column plus mean, lower and upper bound
//!   columns for each variable
//!
//! # Quick Examples
//!
//! ## Summary serialization
//!
//! ```rust
//! use simout_rs::scenario::{Trajectory, VariableSeries};
//! use simout_rs::output::serialize::serialize_trajectory;
//!
//! let trajectory = Trajectory::new(vec![0.0, 1.0])
//!     .with_variable(VariableSeries::from_mean("c_outlet", vec![0.0, 0.5]));
//!
//! let text = serialize_trajectory(&trajectory, false, None)?;
//! assert!(text.starts_with("time,c_outlet\n"));
//! # Ok::<(), simout_rs::output::serialize::CsvError>(())
//! ```
//!
//! ## Detailed serialization
//!
//! The detailed variant widens each variable into three columns:
//!
//! ```csv
//! time,c_outlet,c_outlet_lower,c_outlet_upper
//! 0.000000,0.000000,0.000000,0.000000
//! 1.000000,0.500000,0.450000,0.550000
//! ```
//!
//! ## Custom format
//!
//! ```rust,ignore
//! // European CSV: semicolon delimiter, comma decimal separator
//! let format = CsvFormat::european();
//! let text = serialize_trajectory(&trajectory, true, Some(&format))?;
//! ```

use chrono::Utc;
use thiserror::Error;

use crate::scenario::Trajectory;

// =================================================================================================
// Configuration Structures
// =================================================================================================

/// Configuration for CSV serialization
///
/// # Fields
///
/// - `delimiter`: column separator (default: `','`)
/// - `decimal_separator`: decimal point character (default: `'.'`)
/// - `precision`: number of decimal places (default: 6)
/// - `include_metadata`: add `#`-prefixed header comments
/// - `metadata`: run metadata to include in the header
/// - `time_header`: header of the time column (default: `"time"`)
/// - `n_points`: uniform downsampling target; `None` keeps every sample
///
/// # Example
///
/// ```rust,ignore
/// let format = CsvFormat {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CsvFormat {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the header
    pub metadata: Option<CsvMetadata>,

    /// Header of the time column (default: "time")
    pub time_header: String,

    /// Downsample uniformly to this many points, always keeping the first
    /// and last samples. `None` keeps every sample.
    pub n_points: Option<usize>,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            time_header: "time".to_string(),
            n_points: None,
        }
    }
}

impl CsvFormat {
    /// Create a format with European CSV conventions (semicolon delimiter,
    /// comma for decimals).
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create a format with high precision (12 decimal places).
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: set the downsampling target
    pub fn n_points(mut self, n_points: usize) -> Self {
        self.n_points = Some(n_points);
        self
    }

    /// Builder pattern: enable the metadata header
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only populated fields appear in the header.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Scenario name
    pub scenario: Option<String>,

    /// Numerical method name
    pub solver: Option<String>,

    /// Total simulated time (seconds)
    pub total_time: Option<f64>,

    /// Number of integration steps
    pub time_steps: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from the identifying pieces of a run.
    pub fn from_run(scenario: &str, solver: &str, total_time: f64, time_steps: usize) -> Self {
        Self {
            scenario: Some(scenario.to_string()),
            solver: Some(solver.to_string()),
            total_time: Some(total_time),
            time_steps: Some(time_steps),
            ..Default::default()
        }
    }

    /// Add a custom key/value line.
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =================================================================================================
// Errors
// =================================================================================================

/// Errors specific to CSV serialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    /// The trajectory holds no time samples.
    #[error("empty trajectory: nothing to serialize")]
    Empty,

    /// A variable series does not match the time axis length.
    #[error("series `{name}` ({band}) has {len} samples, expected {expected}")]
    LengthMismatch {
        name: String,
        band: &'static str,
        len: usize,
        expected: usize,
    },

    /// NaN or Inf encountered in the data.
    #[error("non-finite value in `{name}` at step {step}")]
    NonFinite { name: String, step: usize },
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Write metadata header comments.
fn write_metadata_header(out: &mut String, metadata: &CsvMetadata) {
    out.push_str("# Scenario Simulation Data\n");
    out.push_str(&format!("# Generated: {}\n", Utc::now().to_rfc3339()));

    if let Some(scenario) = &metadata.scenario {
        out.push_str(&format!("# Scenario: {}\n", scenario));
    }
    if let Some(solver) = &metadata.solver {
        out.push_str(&format!("# Solver: {}\n", solver));
    }
    if let Some(total_time) = metadata.total_time {
        out.push_str(&format!("# Total Time: {} s\n", total_time));
    }
    if let Some(time_steps) = metadata.time_steps {
        out.push_str(&format!("# Time Steps: {}\n", time_steps));
    }
    for (key, value) in &metadata.custom {
        out.push_str(&format!("# {}: {}\n", key, value));
    }

    out.push_str("#\n");
}

/// Format a number with the configured precision and decimal separator.
fn format_number(value: f64, format: &CsvFormat) -> String {
    let formatted = format!("{:.prec$}", value, prec = format.precision);

    if format.decimal_separator != '.' {
        formatted.replace('.', &format.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Select `n` row indices out of `len`, uniformly spaced, always including
/// the first and last rows. Requesting more points than exist (or fewer
/// than two) keeps every row.
fn sample_indices(len: usize, n_points: Option<usize>) -> Vec<usize> {
    match n_points {
        Some(n) if n >= 2 && n < len => {
            let mut indices: Vec<usize> =
                (0..n).map(|i| i * (len - 1) / (n - 1)).collect();
            indices.dedup();
            indices
        }
        _ => (0..len).collect(),
    }
}

/// Check one band of one variable: length against the time axis, finiteness
/// of every sample.
fn validate_series(
    name: &str,
    band: &'static str,
    series: &[f64],
    expected: usize,
) -> Result<(), CsvError> {
    if series.len() != expected {
        return Err(CsvError::LengthMismatch {
            name: name.to_string(),
            band,
            len: series.len(),
            expected,
        });
    }
    if let Some(step) = series.iter().position(|v| !v.is_finite()) {
        return Err(CsvError::NonFinite {
            name: name.to_string(),
            step,
        });
    }
    Ok(())
}

// =================================================================================================
// Serialization
// =================================================================================================

/// Serialize a trajectory to CSV text.
///
/// # Arguments
///
/// * `trajectory` - The computed time series to serialize
/// * `detailed` - `false` for the summary variant (per-variable mean),
///   `true` for the detailed variant (mean + lower + upper bounds)
/// * `format` - Optional format configuration (defaults when `None`)
///
/// # Returns
///
/// The CSV text, newline-terminated, header row first.
///
/// # Errors
///
/// - [`CsvError::Empty`]: no time samples
/// - [`CsvError::LengthMismatch`]: a series does not match the time axis
/// - [`CsvError::NonFinite`]: NaN or Inf in the time axis or a series
///
/// # Example
///
/// ```rust,ignore
/// let summary = serialize_trajectory(&trajectory, false, None)?;
/// let detailed = serialize_trajectory(&trajectory, true, None)?;
/// ```
pub fn serialize_trajectory(
    trajectory: &Trajectory,
    detailed: bool,
    format: Option<&CsvFormat>,
) -> Result<String, CsvError> {
    // ============================= Validation =============================

    if trajectory.is_empty() {
        return Err(CsvError::Empty);
    }

    let expected = trajectory.len();
    validate_series("time", "axis", &trajectory.time, expected)?;

    for variable in &trajectory.variables {
        validate_series(&variable.name, "mean", &variable.mean, expected)?;
        if detailed {
            validate_series(&variable.name, "lower", &variable.lower, expected)?;
            validate_series(&variable.name, "upper", &variable.upper, expected)?;
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvFormat::default();
    let format = format.unwrap_or(&binding);

    let mut out = String::new();

    // ============================= Write Metadata =========================

    if format.include_metadata {
        if let Some(metadata) = &format.metadata {
            write_metadata_header(&mut out, metadata);
        }
    }

    // ============================= Write Header ===========================

    out.push_str(&format.time_header);
    for variable in &trajectory.variables {
        out.push(format.delimiter);
        out.push_str(&variable.name);
        if detailed {
            out.push(format.delimiter);
            out.push_str(&variable.name);
            out.push_str("_lower");
            out.push(format.delimiter);
            out.push_str(&variable.name);
            out.push_str("_upper");
        }
    }
    out.push('\n');

    // ============================= Write Data =============================

    for i in sample_indices(expected, format.n_points) {
        out.push_str(&format_number(trajectory.time[i], format));

        for variable in &trajectory.variables {
            out.push(format.delimiter);
            out.push_str(&format_number(variable.mean[i], format));
            if detailed {
                out.push(format.delimiter);
                out.push_str(&format_number(variable.lower[i], format));
                out.push(format.delimiter);
                out.push_str(&format_number(variable.upper[i], format));
            }
        }
        out.push('\n');
    }

    Ok(out)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::VariableSeries;

    fn two_point_trajectory() -> Trajectory {
        Trajectory::new(vec![0.0, 1.0]).with_variable(VariableSeries::new(
            "c_outlet",
            vec![0.0, 0.5],
            vec![0.0, 0.45],
            vec![0.0, 0.55],
        ))
    }

    #[test]
    fn test_summary_columns_and_rows() {
        let text = serialize_trajectory(&two_point_trajectory(), false, None).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "time,c_outlet");
        assert_eq!(lines[1], "0.000000,0.000000");
        assert_eq!(lines[2], "1.000000,0.500000");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_detailed_widens_each_variable() {
        let text = serialize_trajectory(&two_point_trajectory(), true, None).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "time,c_outlet,c_outlet_lower,c_outlet_upper");
        assert_eq!(lines[2], "1.000000,0.500000,0.450000,0.550000");
    }

    #[test]
    fn test_multiple_variables_keep_declaration_order() {
        let trajectory = Trajectory::new(vec![0.0])
            .with_variable(VariableSeries::from_mean("beta", vec![1.0]))
            .with_variable(VariableSeries::from_mean("alpha", vec![2.0]));

        let text = serialize_trajectory(&trajectory, false, None).unwrap();
        assert!(text.starts_with("time,beta,alpha\n"));
    }

    #[test]
    fn test_european_format() {
        let format = CsvFormat::european().precision(2);
        let text = serialize_trajectory(&two_point_trajectory(), false, Some(&format)).unwrap();

        assert!(text.contains("1,00;0,50"), "unexpected text: {}", text);
    }

    #[test]
    fn test_high_precision_format() {
        let format = CsvFormat::high_precision();
        let text = serialize_trajectory(&two_point_trajectory(), false, Some(&format)).unwrap();
        assert!(text.contains("0.500000000000"));
    }

    #[test]
    fn test_metadata_header_lines_are_comments() {
        let metadata = CsvMetadata::from_run("tfa", "RK4", 200.0, 2000);
        let format = CsvFormat::default().with_metadata(metadata);

        let text = serialize_trajectory(&two_point_trajectory(), false, Some(&format)).unwrap();
        let header_lines: Vec<&str> =
            text.lines().take_while(|l| l.starts_with('#')).collect();

        assert!(header_lines.iter().any(|l| l.contains("Scenario: tfa")));
        assert!(header_lines.iter().any(|l| l.contains("Solver: RK4")));
        // First non-comment line must still be the column header.
        let first_data = text.lines().find(|l| !l.starts_with('#')).unwrap();
        assert_eq!(first_data, "time,c_outlet");
    }

    #[test]
    fn test_downsampling_keeps_first_and_last() {
        let n = 101;
        let time: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let mean: Vec<f64> = (0..n).map(|i| (i as f64) * 2.0).collect();
        let trajectory =
            Trajectory::new(time).with_variable(VariableSeries::from_mean("c", mean));

        let format = CsvFormat::default().n_points(5);
        let text = serialize_trajectory(&trajectory, false, Some(&format)).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6); // header + 5 rows
        assert_eq!(lines[1], "0.000000,0.000000");
        assert_eq!(lines[5], "100.000000,200.000000");
    }

    #[test]
    fn test_downsampling_beyond_length_keeps_everything() {
        let text = serialize_trajectory(
            &two_point_trajectory(),
            false,
            Some(&CsvFormat::default().n_points(50)),
        )
        .unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_empty_trajectory_is_rejected() {
        let err = serialize_trajectory(&Trajectory::default(), false, None).unwrap_err();
        assert_eq!(err, CsvError::Empty);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let trajectory = Trajectory::new(vec![0.0, 1.0])
            .with_variable(VariableSeries::from_mean("c", vec![1.0]));

        let err = serialize_trajectory(&trajectory, false, None).unwrap_err();
        assert!(matches!(err, CsvError::LengthMismatch { .. }));
    }

    #[test]
    fn test_band_mismatch_only_matters_in_detailed_mode() {
        let mut variable = VariableSeries::from_mean("c", vec![1.0, 2.0]);
        variable.lower = vec![1.0]; // ragged band
        let trajectory = Trajectory::new(vec![0.0, 1.0]).with_variable(variable);

        assert!(serialize_trajectory(&trajectory, false, None).is_ok());
        assert!(serialize_trajectory(&trajectory, true, None).is_err());
    }

    #[test]
    fn test_nan_is_rejected() {
        let trajectory = Trajectory::new(vec![0.0, 1.0])
            .with_variable(VariableSeries::from_mean("c", vec![1.0, f64::NAN]));

        let err = serialize_trajectory(&trajectory, false, None).unwrap_err();
        assert_eq!(
            err,
            CsvError::NonFinite {
                name: "c".to_string(),
                step: 1
            }
        );
    }
}
