//! Serialization bridge: trajectory → CSV, parameters → JSON
//!
//! # Available formats
//!
//! | Format | Module   | Used for                    |
//! |--------|----------|-----------------------------|
//! | CSV    | [`csv`]  | trajectory time series      |
//! | JSON   | [`json`] | scenario parameters         |
//!
//! Each format manages its own errors: CSV serialization returns
//! [`CsvError`], JSON returns `serde_json::Error`. The export layer folds
//! both into its `ExportError`.

pub mod csv;
pub mod json;

// Re-export the most commonly used items at the module level so users can
// write `use simout_rs::output::serialize::{serialize_trajectory, CsvFormat}`.
pub use csv::{serialize_trajectory, CsvError, CsvFormat, CsvMetadata};
pub use json::{parse_parameters, to_json};
