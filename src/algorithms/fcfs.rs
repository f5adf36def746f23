//! First-Come-First-Served.
//!
//! Processes run in arrival order (input order among equal arrivals), each
//! to completion. The preemptive variant re-evaluates on every arrival, but
//! a newcomer never outranks a process that arrived before it, so both
//! variants produce the same timeline.

use super::selection::{run_preemptive, run_to_completion};
use crate::dispatching::rules::FirstCome;
use crate::models::{Process, SchedulingResult};

/// Runs FCFS.
pub fn fcfs(processes: &[Process], preemptive: bool) -> SchedulingResult {
    if preemptive {
        run_preemptive(processes, FirstCome)
    } else {
        run_to_completion(processes, FirstCome)
    }
}
