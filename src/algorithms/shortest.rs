//! Shortest Job First and Shortest Remaining Time.
//!
//! SJF (also known as SPN) picks the arrived process with the smallest
//! burst and runs it to completion. SRT is its preemptive dual: the process
//! with the least remaining work always holds the CPU.

use super::selection::{run_preemptive, run_to_completion};
use crate::dispatching::rules::{ShortestJob, ShortestRemaining};
use crate::models::{Process, SchedulingResult};

/// Runs non-preemptive Shortest Job First.
pub fn sjf(processes: &[Process]) -> SchedulingResult {
    run_to_completion(processes, ShortestJob)
}

/// Runs preemptive Shortest Remaining Time.
pub fn srt(processes: &[Process]) -> SchedulingResult {
    run_preemptive(processes, ShortestRemaining)
}
