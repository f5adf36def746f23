//! Side-by-side comparison of several algorithms on one workload.

use serde::Serialize;

use super::{Algorithm, ScheduleKpi};
use crate::config::AlgorithmConfig;
use crate::models::{Process, SchedulingResult};

/// One algorithm's outcome in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmComparison {
    /// Algorithm that was run.
    pub algorithm: Algorithm,
    /// Full run output.
    pub result: SchedulingResult,
    /// Derived indicators.
    pub kpi: ScheduleKpi,
}

/// Outcomes of every compared algorithm, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Per-algorithm entries.
    pub entries: Vec<AlgorithmComparison>,
}

impl ComparisonReport {
    /// Entry for one algorithm.
    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmComparison> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// Lowest average waiting time.
    pub fn best_waiting(&self) -> Option<&AlgorithmComparison> {
        self.best_by(|e| -e.kpi.average_waiting_time)
    }

    /// Lowest average turnaround time.
    pub fn best_turnaround(&self) -> Option<&AlgorithmComparison> {
        self.best_by(|e| -e.kpi.average_turnaround_time)
    }

    /// Lowest average response time.
    pub fn best_response(&self) -> Option<&AlgorithmComparison> {
        self.best_by(|e| -e.kpi.average_response_time)
    }

    /// Highest CPU utilization.
    pub fn best_utilization(&self) -> Option<&AlgorithmComparison> {
        self.best_by(|e| e.kpi.cpu_utilization)
    }

    /// Highest throughput.
    pub fn best_throughput(&self) -> Option<&AlgorithmComparison> {
        self.best_by(|e| e.kpi.throughput)
    }

    /// First entry with the highest score.
    fn best_by(&self, score: impl Fn(&AlgorithmComparison) -> f64) -> Option<&AlgorithmComparison> {
        self.entries.iter().fold(None, |best, e| match best {
            Some(b) if score(e) <= score(b) => Some(b),
            _ => Some(e),
        })
    }
}

/// Runs each algorithm on the same workload and configuration.
///
/// Inputs are expected to pass
/// [`check_time_horizon`](crate::validation::check_time_horizon); see
/// [`Algorithm::run`].
pub fn compare_algorithms(
    algorithms: &[Algorithm],
    processes: &[Process],
    config: &AlgorithmConfig,
) -> ComparisonReport {
    let entries = algorithms
        .iter()
        .map(|&algorithm| {
            let result = algorithm.run(processes, config);
            let kpi = ScheduleKpi::calculate(&result);
            AlgorithmComparison {
                algorithm,
                result,
                kpi,
            }
        })
        .collect();
    ComparisonReport { entries }
}
