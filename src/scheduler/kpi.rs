//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last timeline interval |
//! | Idle Time | Sum of idle intervals |
//! | CPU Utilization | (makespan − idle) / makespan × 100 |
//! | Throughput | processes / makespan |
//! | Avg Waiting / Turnaround / Response | Means over all processes |
//! | Max Waiting | Longest single wait |
//!
//! # Reference
//! Silberschatz et al., "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::SchedulingResult;

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleKpi {
    /// Makespan.
    pub total_time: u64,
    /// Time the CPU spent running processes.
    pub busy_time: u64,
    /// Time the CPU spent idle.
    pub idle_time: u64,
    /// Busy share of the makespan, in percent (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Longest waiting time of any process.
    pub max_waiting_time: u64,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished run.
    ///
    /// A zero makespan yields 0.0 utilization and throughput.
    pub fn calculate(result: &SchedulingResult) -> Self {
        let total_time = result.total_time;
        let idle_time = result.idle_time();
        let busy_time = total_time.saturating_sub(idle_time);

        let (cpu_utilization, throughput) = if total_time == 0 {
            (0.0, 0.0)
        } else {
            let completed = result.processes.iter().filter(|p| p.is_completed()).count();
            (
                busy_time as f64 / total_time as f64 * 100.0,
                completed as f64 / total_time as f64,
            )
        };

        let max_waiting_time = result
            .processes
            .iter()
            .filter_map(|p| p.waiting_time)
            .max()
            .unwrap_or(0);

        Self {
            total_time,
            busy_time,
            idle_time,
            cpu_utilization,
            throughput,
            average_waiting_time: result.average_waiting_time,
            average_turnaround_time: result.average_turnaround_time,
            average_response_time: result.average_response_time,
            max_waiting_time,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_average_wait: f64, min_utilization: f64) -> bool {
        self.average_waiting_time <= max_average_wait && self.cpu_utilization >= min_utilization
    }
}
