//! Simulation results: trajectory time series and the run outcome record

use serde::{Deserialize, Serialize};

/// One named output variable of a simulation run.
///
/// Each variable carries its `mean` series plus a `lower`/`upper`
/// uncertainty band. Deterministic runs use the mean for all three.
///
/// All three series must have one sample per time point of the owning
/// [`Trajectory`]; the CSV serializer rejects mismatched lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSeries {
    /// Variable name, used as the CSV column header
    pub name: String,

    /// Central estimate, one sample per time point
    pub mean: Vec<f64>,

    /// Lower bound of the uncertainty band
    pub lower: Vec<f64>,

    /// Upper bound of the uncertainty band
    pub upper: Vec<f64>,
}

impl VariableSeries {
    /// Create a variable with an explicit uncertainty band.
    pub fn new(name: impl Into<String>, mean: Vec<f64>, lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            mean,
            lower,
            upper,
        }
    }

    /// Create a deterministic variable: the band collapses onto the mean.
    pub fn from_mean(name: impl Into<String>, mean: Vec<f64>) -> Self {
        let lower = mean.clone();
        let upper = mean.clone();
        Self::new(name, mean, lower, upper)
    }
}

/// Computed output of a simulation run: a time axis plus named variables.
///
/// # Example
///
/// ```rust
/// use simout_rs::scenario::{Trajectory, VariableSeries};
///
/// let mut trajectory = Trajectory::new(vec![0.0, 1.0, 2.0]);
/// trajectory.push_variable(VariableSeries::from_mean("c_outlet", vec![0.0, 0.5, 1.0]));
///
/// assert_eq!(trajectory.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trajectory {
    /// Time axis (seconds)
    pub time: Vec<f64>,

    /// Output variables, in declaration order
    pub variables: Vec<VariableSeries>,
}

impl Trajectory {
    /// Create a trajectory over the given time axis, with no variables yet.
    pub fn new(time: Vec<f64>) -> Self {
        Self {
            time,
            variables: Vec::new(),
        }
    }

    /// Append one output variable.
    pub fn push_variable(&mut self, variable: VariableSeries) {
        self.variables.push(variable);
    }

    /// Builder pattern: append one output variable.
    pub fn with_variable(mut self, variable: VariableSeries) -> Self {
        self.variables.push(variable);
        self
    }

    /// Number of time samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when the trajectory holds no time samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Outcome of a simulation run.
///
/// A run that failed to produce data carries `trajectory: None`; the export
/// layer treats that (and an empty trajectory) as the invalid-result state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// Name of the numerical method that produced this result
    pub solver: String,

    /// Computed trajectory, absent when the run produced no data
    pub trajectory: Option<Trajectory>,
}

impl AlgorithmResult {
    /// Create a result carrying a computed trajectory.
    pub fn new(solver: impl Into<String>, trajectory: Trajectory) -> Self {
        Self {
            solver: solver.into(),
            trajectory: Some(trajectory),
        }
    }

    /// Create a result with no trajectory (a run that produced no data).
    pub fn empty(solver: impl Into<String>) -> Self {
        Self {
            solver: solver.into(),
            trajectory: None,
        }
    }

    /// True when a non-empty trajectory is present.
    pub fn has_trajectory(&self) -> bool {
        self.trajectory.as_ref().is_some_and(|t| !t.is_empty())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mean_collapses_band() {
        let variable = VariableSeries::from_mean("c", vec![1.0, 2.0]);
        assert_eq!(variable.lower, variable.mean);
        assert_eq!(variable.upper, variable.mean);
    }

    #[test]
    fn test_trajectory_len_counts_time_samples() {
        let trajectory = Trajectory::new(vec![0.0, 0.5, 1.0])
            .with_variable(VariableSeries::from_mean("c", vec![0.0, 1.0, 0.0]));
        assert_eq!(trajectory.len(), 3);
        assert!(!trajectory.is_empty());
    }

    #[test]
    fn test_missing_trajectory_is_not_valid() {
        let result = AlgorithmResult::empty("RK4");
        assert!(!result.has_trajectory());
    }

    #[test]
    fn test_empty_trajectory_is_not_valid() {
        let result = AlgorithmResult::new("RK4", Trajectory::default());
        assert!(!result.has_trajectory());
    }

    #[test]
    fn test_populated_trajectory_is_valid() {
        let result = AlgorithmResult::new("RK4", Trajectory::new(vec![0.0, 1.0]));
        assert!(result.has_trajectory());
    }
}
