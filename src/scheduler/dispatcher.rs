//! Algorithm dispatch.
//!
//! Maps an algorithm identifier plus configuration onto the implementing
//! function. The checks performed here are identifier resolution and the
//! time horizon (the clock must fit in `u64`); everything else is the
//! caller's job (see [`crate::validation`]).

use log::debug;

use super::Algorithm;
use crate::algorithms;
use crate::config::AlgorithmConfig;
use crate::error::SchedulerError;
use crate::models::{Process, SchedulingResult};
use crate::validation;

impl Algorithm {
    /// Runs this algorithm, reading only the config fields it uses.
    ///
    /// | Algorithm | Fields read |
    /// |-----------|-------------|
    /// | FCFS | `is_preemptive` (default false) |
    /// | RR | `time_quantum` |
    /// | SJF | `is_preemptive` (true switches to SRT) |
    /// | SRT | none |
    /// | PRIORITY | `is_preemptive` (default false), `priority_high_is_min` |
    /// | FB | `number_of_queues` |
    /// | FBV | `number_of_queues`, `time_quantum`, `quantum_multiplier` |
    ///
    /// # Panics
    /// If the latest arrival plus the total burst time exceeds `u64::MAX`.
    /// [`Algorithm::try_run`] checks this first.
    pub fn run(self, processes: &[Process], config: &AlgorithmConfig) -> SchedulingResult {
        let result = match self {
            Algorithm::Fcfs => algorithms::fcfs(processes, config.preemptive_or(false)),
            Algorithm::RoundRobin => algorithms::round_robin(processes, config.quantum()),
            Algorithm::Sjf if config.preemptive_or(false) => algorithms::srt(processes),
            Algorithm::Sjf => algorithms::sjf(processes),
            Algorithm::Srt => algorithms::srt(processes),
            Algorithm::Priority => algorithms::priority(
                processes,
                config.preemptive_or(false),
                config.priority_high_is_min,
            ),
            Algorithm::Feedback => algorithms::feedback(processes, config.queue_count()),
            Algorithm::FeedbackVarying => algorithms::feedback_varying(
                processes,
                config.queue_count(),
                config.quantum(),
                config.multiplier(),
            ),
        };

        debug!(
            "{} scheduled {} processes: makespan {}, {} intervals, avg wait {:.2}",
            self,
            processes.len(),
            result.total_time,
            result.gantt_chart.len(),
            result.average_waiting_time
        );
        result
    }

    /// Runs this algorithm after checking that the simulated clock cannot
    /// overflow.
    ///
    /// # Errors
    /// [`SchedulerError::InvalidInput`] with a
    /// [`TimeOverflow`](crate::validation::ValidationErrorKind::TimeOverflow)
    /// error if the schedule would end past `u64::MAX`.
    pub fn try_run(
        self,
        processes: &[Process],
        config: &AlgorithmConfig,
    ) -> Result<SchedulingResult, SchedulerError> {
        validation::check_time_horizon(processes)
            .map_err(|e| SchedulerError::InvalidInput(vec![e]))?;
        Ok(self.run(processes, config))
    }
}

/// Runs the named algorithm.
///
/// # Errors
/// [`SchedulerError::UnknownAlgorithm`] if `algorithm` is not a known
/// identifier, [`SchedulerError::InvalidInput`] if the schedule would run
/// past `u64::MAX`. No partial result is produced.
///
/// # Example
/// ```
/// use cpu_sched_sim::{run, AlgorithmConfig, Process};
///
/// let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 1, 2)];
/// let result = run("RR", &processes, &AlgorithmConfig::default()).unwrap();
/// assert_eq!(result.total_time, 5);
/// assert!(run("LOTTERY", &processes, &AlgorithmConfig::default()).is_err());
/// ```
pub fn run(
    algorithm: &str,
    processes: &[Process],
    config: &AlgorithmConfig,
) -> Result<SchedulingResult, SchedulerError> {
    let algorithm: Algorithm = algorithm.parse()?;
    algorithm.try_run(processes, config)
}
