//! Priority scheduling.
//!
//! The direction is configurable: with `high_is_min` a numerically lower
//! value is more urgent. Processes without a priority rank after every
//! process that has one; among themselves they fall back to arrival order.

use super::selection::{run_preemptive, run_to_completion};
use crate::dispatching::rules::PriorityRule;
use crate::models::{Process, SchedulingResult};

/// Runs priority scheduling.
pub fn priority(processes: &[Process], preemptive: bool, high_is_min: bool) -> SchedulingResult {
    let rule = PriorityRule::new(high_is_min);
    if preemptive {
        run_preemptive(processes, rule)
    } else {
        run_to_completion(processes, rule)
    }
}
