//! Queue animation synthesis.
//!
//! Replays a finished run into one [`QueueSnapshot`] per timeline interval.
//! At snapshot time `t` every process falls into exactly one bucket:
//!
//! | Bucket | Condition |
//! |--------|-----------|
//! | waiting | `arrival > t` |
//! | completed | `completion ≤ t` |
//! | running | named by the interval starting at `t` |
//! | ready | otherwise |
//!
//! Feedback runs additionally carry per-level queue contents, taken from
//! the result's level trace.

use crate::config::AlgorithmConfig;
use crate::error::SchedulerError;
use crate::models::{Process, QueueAnimation, QueueSnapshot, SchedulingResult};
use crate::scheduler::Algorithm;

/// Runs the named algorithm and replays its timeline.
///
/// # Errors
/// Same as [`crate::scheduler::run`].
pub fn generate_animation(
    algorithm: &str,
    processes: &[Process],
    config: &AlgorithmConfig,
) -> Result<QueueAnimation, SchedulerError> {
    let algorithm: Algorithm = algorithm.parse()?;
    let result = algorithm.try_run(processes, config)?;
    Ok(synthesize(algorithm, &result))
}

/// Builds snapshots from an existing result, one per Gantt item start.
pub fn synthesize(algorithm: Algorithm, result: &SchedulingResult) -> QueueAnimation {
    let snapshots = result
        .gantt_chart
        .iter()
        .map(|item| {
            let t = item.start_time;
            let mut snapshot = QueueSnapshot {
                time: t,
                ready_queue: Vec::new(),
                running_process: None,
                completed_processes: Vec::new(),
                waiting_processes: Vec::new(),
                multilevel_queues: None,
            };

            for p in &result.processes {
                if !p.has_arrived(t) {
                    snapshot.waiting_processes.push(p.clone());
                } else if p.completed_by(t) {
                    snapshot.completed_processes.push(p.clone());
                } else if !item.is_idle && p.id == item.process_id {
                    snapshot.running_process = Some(p.clone());
                } else {
                    snapshot.ready_queue.push(p.clone());
                }
            }

            snapshot.multilevel_queues = result.levels_at(t).map(|levels| {
                levels
                    .levels
                    .iter()
                    .map(|ids| ids.iter().filter_map(|id| result.process(id).cloned()).collect())
                    .collect()
            });

            snapshot
        })
        .collect();

    QueueAnimation {
        snapshots,
        total_time: result.total_time,
        algorithm,
    }
}
