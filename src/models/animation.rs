//! Queue animation model.
//!
//! Snapshots are derived from a finished [`SchedulingResult`](super::SchedulingResult)
//! and are read-only afterwards; playback code steps through them without
//! touching the engine again.

use serde::{Deserialize, Serialize};

use super::Process;
use crate::scheduler::Algorithm;

/// Point-in-time view of process states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueSnapshot {
    /// Simulation time of the snapshot.
    pub time: u64,
    /// Arrived, not completed and not on the CPU.
    pub ready_queue: Vec<Process>,
    /// Process holding the CPU, `None` while idle.
    pub running_process: Option<Process>,
    /// Processes finished by `time`.
    pub completed_processes: Vec<Process>,
    /// Processes that have not arrived yet.
    pub waiting_processes: Vec<Process>,
    /// Per-level queue contents for feedback algorithms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multilevel_queues: Option<Vec<Vec<Process>>>,
}

/// Stepped playback data for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueAnimation {
    /// One snapshot per timeline interval, in order.
    pub snapshots: Vec<QueueSnapshot>,
    /// Makespan of the underlying run.
    pub total_time: u64,
    /// Algorithm that produced the run.
    pub algorithm: Algorithm,
}

impl QueueAnimation {
    /// Number of playback steps.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether there is nothing to play.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Latest snapshot at or before `time`.
    pub fn snapshot_at(&self, time: u64) -> Option<&QueueSnapshot> {
        let idx = self.snapshots.partition_point(|s| s.time <= time);
        idx.checked_sub(1).map(|i| &self.snapshots[i])
    }
}
