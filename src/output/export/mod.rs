//! Export operations for scenario simulation runs
//!
//! # Architecture
//!
//! Three public operations compose the same small set of leaf helpers:
//!
//! | Operation           | Output                                    |
//! |---------------------|-------------------------------------------|
//! | [`export_result`]   | one CSV file (summary or detailed)        |
//! | [`export_scenario`] | one JSON file (parameters)                |
//! | [`export_all`]      | one ZIP bundle (params + both CSV files)  |
//!
//! Each operation first checks the save capability of the destination
//! directory, validates its inputs, then hands serialized text to the save
//! helpers, directly or via the [`ArchiveBuilder`] for the bundle. Both
//! failure gates run before any serialization work, so a failing call
//! leaves no partial file behind.
//!
//! # Usage example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use simout_rs::output::export::{export_result, export_all, ExportFilenames};
//!
//! // Detailed CSV of one run
//! export_result(&params, Some(&result), true, Path::new("runs/tfa.csv"))?;
//!
//! // Everything in one bundle
//! export_all(&params, Some(&result), &ExportFilenames::default())?;
//! ```

mod archive;
mod save;

// Re-export the most commonly used items at the module level so users can
// write `use simout_rs::output::export::{export_all, ExportError}`.
pub use archive::{ArchiveBuilder, PendingArchive};
pub use save::{check_save_support, save_binary_file, save_text_file};

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::output::serialize::{serialize_trajectory, to_json, CsvError};
use crate::scenario::{AlgorithmResult, ScenarioParameters, Trajectory};

use save::save_target;

/// MIME type of exported trajectory CSV files.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// MIME type of exported parameter JSON files.
pub const JSON_MIME: &str = "application/json;charset=utf-8";

// =================================================================================================
// Errors
// =================================================================================================

/// Errors surfaced by the export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The environment cannot save files at the destination. Fatal, no
    /// recovery attempted.
    #[error("cannot save files to `{path}`: {reason}")]
    CapabilityUnsupported { path: PathBuf, reason: String },

    /// The result is missing, or its trajectory is missing or empty.
    /// Carries a clone of the offending result for caller inspection.
    #[error("algorithm results are invalid: missing or empty trajectory")]
    InvalidResult { result: Option<AlgorithmResult> },

    /// Trajectory CSV serialization failed.
    #[error("trajectory serialization failed: {0}")]
    Csv(#[from] CsvError),

    /// Parameter JSON serialization failed.
    #[error("parameter serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// ZIP encoding failed.
    #[error("archive generation failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// File creation or writing failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// =================================================================================================
// Filenames
// =================================================================================================

/// The four caller-supplied names of a bundle export.
///
/// The first three name entries inside the archive; `archive` is the path
/// of the ZIP file itself. No uniqueness or extension validation is
/// performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFilenames {
    /// Archive entry name of the parameter JSON
    pub parameters: String,

    /// Archive entry name of the summary CSV
    pub results_summary: String,

    /// Archive entry name of the detailed CSV
    pub results_detailed: String,

    /// Path of the ZIP file to save
    pub archive: PathBuf,
}

impl Default for ExportFilenames {
    fn default() -> Self {
        Self {
            parameters: "scenario.params.json".to_string(),
            results_summary: "results.summary.csv".to_string(),
            results_detailed: "results.detailed.csv".to_string(),
            archive: PathBuf::from("scenario.zip"),
        }
    }
}

// =================================================================================================
// Validation
// =================================================================================================

/// Extract the trajectory of a result, or fail with the invalid-result
/// error carrying the (possibly absent) offending value.
fn require_trajectory(result: Option<&AlgorithmResult>) -> Result<&Trajectory, ExportError> {
    let Some(result) = result else {
        return Err(ExportError::InvalidResult { result: None });
    };

    match result.trajectory.as_ref().filter(|t| !t.is_empty()) {
        Some(trajectory) => Ok(trajectory),
        None => Err(ExportError::InvalidResult {
            result: Some(result.clone()),
        }),
    }
}

// =================================================================================================
// Export Operations
// =================================================================================================

/// Export a run's trajectory to a CSV file.
///
/// # Arguments
///
/// * `params` - Parameters of the scenario the result belongs to
/// * `result` - The run outcome; must carry a non-empty trajectory
/// * `detailed` - `false` for the summary CSV, `true` for the detailed one
/// * `filename` - Destination path
///
/// # Errors
///
/// - [`ExportError::CapabilityUnsupported`]: destination directory cannot
///   receive files
/// - [`ExportError::InvalidResult`]: `result` absent, or trajectory
///   absent/empty
///
/// Both checks run before any serialization; a failing call saves nothing.
pub fn export_result(
    params: &ScenarioParameters,
    result: Option<&AlgorithmResult>,
    detailed: bool,
    filename: &Path,
) -> Result<(), ExportError> {
    check_save_support(save_target(filename))?;
    let trajectory = require_trajectory(result)?;

    log::debug!(
        "exporting {} trajectory of scenario `{}`",
        if detailed { "detailed" } else { "summary" },
        params.name
    );

    let text = serialize_trajectory(trajectory, detailed, None)?;
    save_text_file(&text, filename, CSV_MIME)
}

/// Export scenario parameters to a JSON file.
///
/// Serializes unconditionally; there is no validation of parameter shape
/// and no result involved.
///
/// # Errors
///
/// - [`ExportError::CapabilityUnsupported`]: destination directory cannot
///   receive files
pub fn export_scenario(
    params: &ScenarioParameters,
    filename: &Path,
) -> Result<(), ExportError> {
    check_save_support(save_target(filename))?;

    log::debug!("exporting parameters of scenario `{}`", params.name);

    let text = to_json(params)?;
    save_text_file(&text, filename, JSON_MIME)
}

/// Export a complete run (parameters plus both CSV variants) as one ZIP
/// bundle.
///
/// The archive holds exactly three entries, inserted in fixed order:
/// parameter JSON, summary CSV, detailed CSV, each under its name from
/// `filenames`. Encoding runs on a worker thread; this function waits for
/// the blob before saving it under `filenames.archive`.
///
/// # Errors
///
/// Same gates as [`export_result`] (checked against the archive's
/// directory), plus any archive-encoding failure, which surfaces with no
/// file saved.
pub fn export_all(
    params: &ScenarioParameters,
    result: Option<&AlgorithmResult>,
    filenames: &ExportFilenames,
) -> Result<(), ExportError> {
    check_save_support(save_target(&filenames.archive))?;
    let trajectory = require_trajectory(result)?;

    log::debug!("exporting bundle of scenario `{}`", params.name);

    let param_text = to_json(params)?;
    let summary_text = serialize_trajectory(trajectory, false, None)?;
    let detailed_text = serialize_trajectory(trajectory, true, None)?;

    let mut archive = ArchiveBuilder::new();
    archive.add_text(&filenames.parameters, param_text);
    archive.add_text(&filenames.results_summary, summary_text);
    archive.add_text(&filenames.results_detailed, detailed_text);

    let blob = archive.generate().wait()?;
    save_binary_file(&blob, &filenames.archive)
}

// =================================================================================================
// Tests
// =================================================================================================
