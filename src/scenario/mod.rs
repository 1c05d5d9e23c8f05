//! Scenario data model
//!
//! This module defines the records exchanged between a simulation engine and
//! the export layer:
//!
//! - [`ScenarioParameters`]: WHAT was simulated (inputs of a run)
//! - [`AlgorithmResult`]: WHAT came out (solver name + computed trajectory)
//! - [`Trajectory`] / [`VariableSeries`]: the computed time series itself
//!
//! # Design
//!
//! All records are plain serde-serializable data. The export layer only
//! reads them; it never mutates caller-owned values. Ownership stays with
//! the caller and every operation takes references.
//!
//! # Example
//!
//! ```rust
//! use simout_rs::scenario::{ScenarioParameters, AlgorithmResult, Trajectory, VariableSeries};
//!
//! let params = ScenarioParameters::new("breakthrough", "Langmuir", "RK4", 600.0, 1000)
//!     .with_constant("porosity", 0.4);
//!
//! let mut trajectory = Trajectory::new(vec![0.0, 1.0, 2.0]);
//! trajectory.push_variable(VariableSeries::from_mean("c_outlet", vec![0.0, 0.5, 1.0]));
//!
//! let result = AlgorithmResult::new("RK4", trajectory);
//! assert!(result.has_trajectory());
//! ```

mod parameters;
mod result;

pub use parameters::ScenarioParameters;
pub use result::{AlgorithmResult, Trajectory, VariableSeries};
