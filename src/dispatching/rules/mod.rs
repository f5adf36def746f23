//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{ProcessSlot, RuleScore, SelectionRule};

/// First Come First Served.
///
/// Ranks by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct FirstCome;

impl SelectionRule for FirstCome {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, slot: &ProcessSlot) -> RuleScore {
        slot.arrival_time as RuleScore
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Job First.
///
/// Ranks by total burst time. Minimizes mean waiting time among
/// non-preemptive policies when all jobs are present.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl SelectionRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, slot: &ProcessSlot) -> RuleScore {
        slot.burst_time as RuleScore
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time.
///
/// Ranks by CPU time still owed, so a partially run process competes with
/// its remaining demand.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, slot: &ProcessSlot) -> RuleScore {
        slot.remaining_time as RuleScore
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Priority rule with configurable direction.
///
/// Processes without a priority rank after every process that has one.
#[derive(Debug, Clone, Copy)]
pub struct PriorityRule {
    /// `true`: numerically lower value is more urgent.
    pub high_is_min: bool,
}

impl Default for PriorityRule {
    fn default() -> Self {
        Self { high_is_min: true }
    }
}

impl PriorityRule {
    /// Creates a priority rule with the given direction.
    pub fn new(high_is_min: bool) -> Self {
        Self { high_is_min }
    }
}

impl SelectionRule for PriorityRule {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, slot: &ProcessSlot) -> RuleScore {
        match slot.priority {
            Some(p) if self.high_is_min => RuleScore::from(p),
            Some(p) => -RuleScore::from(p),
            None => RuleScore::MAX,
        }
    }

    fn description(&self) -> &'static str {
        if self.high_is_min {
            "Priority (lower value first)"
        } else {
            "Priority (higher value first)"
        }
    }
}
