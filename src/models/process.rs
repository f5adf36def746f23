//! Process model.
//!
//! A process is the unit the simulated CPU schedules. The caller supplies
//! the identity and workload fields; every timing metric is filled in by
//! the engine during a run.
//!
//! # Time Representation
//! All times are abstract integer time units relative to t=0.

use serde::{Deserialize, Serialize};

/// A schedulable process.
///
/// `id`, `arrival_time`, `burst_time` and `priority` are inputs. The
/// remaining fields are `None` on caller-built records and are populated
/// on the copies returned inside a [`SchedulingResult`](super::SchedulingResult).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Process identifier (uniqueness is the caller's responsibility).
    pub id: String,
    /// Time unit at which the process becomes eligible to run.
    pub arrival_time: u64,
    /// Total CPU time required (≥ 1).
    pub burst_time: u64,
    /// Scheduling priority. Direction is set by the algorithm config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// CPU time still owed when the run ended (0 for completed processes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_time: Option<u64>,
    /// Time of first dispatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// First dispatch minus arrival.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<u64>,
    /// Time the last unit of work finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<u64>,
    /// Completion minus arrival.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnaround_time: Option<u64>,
    /// Turnaround minus burst.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiting_time: Option<u64>,
}

impl Process {
    /// Creates a process with the given arrival and burst times.
    pub fn new(id: impl Into<String>, arrival_time: u64, burst_time: u64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
            remaining_time: None,
            start_time: None,
            response_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns a copy carrying only the caller-supplied fields.
    pub fn input_only(&self) -> Self {
        Self {
            priority: self.priority,
            ..Self::new(self.id.clone(), self.arrival_time, self.burst_time)
        }
    }

    /// Whether the engine has finished this process.
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Whether the process has arrived by time `t`.
    #[inline]
    pub fn has_arrived(&self, t: u64) -> bool {
        self.arrival_time <= t
    }

    /// Whether the process had completed by time `t`.
    #[inline]
    pub fn completed_by(&self, t: u64) -> bool {
        self.completion_time.is_some_and(|c| c <= t)
    }

    /// Records the metrics of a finished process.
    ///
    /// `first_dispatch` and `completion` must both be ≥ `arrival_time`, and
    /// `completion - arrival_time` must be ≥ `burst_time`.
    pub(crate) fn finish(&mut self, first_dispatch: u64, completion: u64) {
        let turnaround = completion - self.arrival_time;
        self.remaining_time = Some(0);
        self.start_time = Some(first_dispatch);
        self.response_time = Some(first_dispatch - self.arrival_time);
        self.completion_time = Some(completion);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }
}
