//! Shared fixtures for integration tests

use simout_rs::scenario::{AlgorithmResult, ScenarioParameters, Trajectory, VariableSeries};

/// A representative parameter record.
pub fn sample_parameters() -> ScenarioParameters {
    ScenarioParameters::new("breakthrough", "LangmuirSingle", "RK4", 600.0, 1000)
        .with_constant("lambda", 1.2)
        .with_constant("porosity", 0.4)
}

/// A decaying two-variable trajectory with `n` samples and a ±10% band.
pub fn sample_trajectory(n: usize) -> Trajectory {
    let time: Vec<f64> = (0..n).map(|i| i as f64).collect();

    let mut trajectory = Trajectory::new(time.clone());
    for (name, rate) in [("c_outlet", 0.05), ("c_column", 0.02)] {
        let mean: Vec<f64> = time.iter().map(|t| (-rate * t).exp()).collect();
        let lower: Vec<f64> = mean.iter().map(|v| v * 0.9).collect();
        let upper: Vec<f64> = mean.iter().map(|v| v * 1.1).collect();
        trajectory.push_variable(VariableSeries::new(name, mean, lower, upper));
    }
    trajectory
}

/// A complete result around [`sample_trajectory`].
pub fn sample_result(n: usize) -> AlgorithmResult {
    AlgorithmResult::new("RK4", sample_trajectory(n))
}
