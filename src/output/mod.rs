//! Output module for simulation runs
//!
//! This module turns caller-owned scenario records into files:
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── serialize/          ← Data → text
//! │   ├── mod.rs
//! │   ├── csv.rs          ← trajectory → CSV (summary / detailed)
//! │   └── json.rs         ← parameters → JSON
//! └── export/             ← Text → files on disk
//!     ├── mod.rs          ← export_result / export_scenario / export_all
//!     ├── archive.rs      ← ZIP bundling
//!     └── save.rs         ← capability check + save helpers
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use simout_rs::output::export::export_result;
//!
//! // Save one run's detailed CSV
//! export_result(&params, Some(&result), true, Path::new("tfa.csv"))?;
//! ```
//!
//! # Design Philosophy
//!
//! Serialization and saving are separate concerns: the `serialize` layer is
//! pure (data in, text out, fully deterministic for default formats) and
//! the `export` layer owns every side effect. Tests can therefore compare
//! saved files byte-for-byte against direct serializer calls.

pub mod export;
pub mod serialize;

// Re-export commonly used items for convenience
pub use export::{
    export_all, export_result, export_scenario, ExportError, ExportFilenames,
};
pub use serialize::{serialize_trajectory, CsvFormat};
