//! simout-rs: Scenario Simulation Export Toolkit
//!
//! A small, dependable layer for getting simulation runs out of a program
//! and into files people can open: CSV for trajectories, JSON for scenario
//! parameters, and a single ZIP bundle when both belong together.
//!
//! # Architecture
//!
//! simout-rs is built on two core principles:
//!
//! 1. **Separation of Serialization and Saving**
//!    - Serializers are pure functions (data in, text out)
//!    - Saving is the only side-effecting layer
//!
//! 2. **Fail Before Touching Anything**
//!    - Save capability and input validity are checked up front
//!    - A failing export never leaves a partial file behind
//!
//! # Quick Start
//!
//! ```rust
//! use std::path::Path;
//! use simout_rs::prelude::*;
//!
//! # fn main() -> Result<(), ExportError> {
//! # let dir = std::env::temp_dir();
//! // 1. Describe the run
//! let params = ScenarioParameters::new("breakthrough", "Langmuir", "RK4", 600.0, 1000)
//!     .with_constant("porosity", 0.4);
//!
//! // 2. A trajectory, normally produced by your solver
//! let trajectory = Trajectory::new(vec![0.0, 300.0, 600.0])
//!     .with_variable(VariableSeries::from_mean("c_outlet", vec![0.0, 0.8, 1.0]));
//! let result = AlgorithmResult::new("RK4", trajectory);
//!
//! // 3. Export
//! export_result(&params, Some(&result), false, &dir.join("run.csv"))?;
//! export_scenario(&params, &dir.join("run.params.json"))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`scenario`]: Data model (parameters, results, trajectories)
//! - [`output`]: Serialization and file export

// Core modules
pub mod scenario;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use simout_rs::prelude::*;
    //! ```
    pub use crate::scenario::{AlgorithmResult,
                              ScenarioParameters,
                              Trajectory,
                              VariableSeries};
    pub use crate::output::export::{export_all,
                                    export_result,
                                    export_scenario,
                                    ExportError,
                                    ExportFilenames};
    pub use crate::output::serialize::{serialize_trajectory,
                                       to_json,
                                       CsvFormat};
}
