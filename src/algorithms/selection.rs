//! Selection-driven simulation loops.
//!
//! # Non-preemptive
//! Repeatedly pick the best ready process and run it to completion.
//!
//! # Preemptive
//! Event-driven: the best ready process runs until it completes or the
//! next arrival, whichever is first; at each arrival the running process
//! goes back into the ready queue and the choice is re-evaluated. Between
//! arrivals no other process's score changes and the running process's
//! score can only improve, so this yields the same schedule as
//! re-evaluating every time unit.
//!
//! # Complexity
//! O((n + a) log n) where a = number of distinct arrival events.

use log::trace;

use crate::dispatching::{ReadyQueue, SelectionRule, SimulationContext};
use crate::models::{Process, SchedulingResult};

/// Runs each selected process to completion.
pub fn run_to_completion<R: SelectionRule>(processes: &[Process], rule: R) -> SchedulingResult {
    let mut ctx = SimulationContext::new(processes);
    let mut ready = ReadyQueue::new(rule);

    while !ctx.is_finished() {
        for idx in ctx.admit_arrivals() {
            ready.push(ctx.slot(idx));
        }

        match ready.pop() {
            Some(idx) => {
                trace!("{} selects {} at {}", ready.rule().name(), ctx.id(idx), ctx.clock());
                let burst = ctx.slot(idx).remaining_time;
                ctx.run(idx, burst, None);
            }
            None => {
                if !ctx.idle_until_next_arrival() {
                    break;
                }
            }
        }
    }

    ctx.into_result(false)
}

/// Keeps the best-ranked ready process on the CPU at all times.
pub fn run_preemptive<R: SelectionRule>(processes: &[Process], rule: R) -> SchedulingResult {
    let mut ctx = SimulationContext::new(processes);
    let mut ready = ReadyQueue::new(rule);

    while !ctx.is_finished() {
        for idx in ctx.admit_arrivals() {
            ready.push(ctx.slot(idx));
        }

        let Some(idx) = ready.pop() else {
            if !ctx.idle_until_next_arrival() {
                break;
            }
            continue;
        };

        let remaining = ctx.slot(idx).remaining_time;
        let slice = match ctx.next_arrival_time() {
            Some(next) => remaining.min(next - ctx.clock()),
            None => remaining,
        };
        trace!(
            "{} selects {} at {} for {}",
            ready.rule().name(),
            ctx.id(idx),
            ctx.clock(),
            slice
        );

        if !ctx.run(idx, slice, None) {
            ready.push(ctx.slot(idx));
        }
    }

    ctx.into_result(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::GanttItem;

    #[test]
    fn test_run_to_completion_idles_between_arrivals() {
        let processes = vec![Process::new("A", 2, 2), Process::new("B", 6, 1)];
        let result = run_to_completion(&processes, rules::FirstCome);
        assert_eq!(
            result.gantt_chart,
            vec![
                GanttItem::idle(0, 2),
                GanttItem::busy("A", 2, 4),
                GanttItem::idle(4, 6),
                GanttItem::busy("B", 6, 7),
            ]
        );
        assert_eq!(result.total_time, 7);
    }

    #[test]
    fn test_preemptive_splits_on_better_arrival() {
        let processes = vec![Process::new("long", 0, 6), Process::new("short", 2, 1)];
        let result = run_preemptive(&processes, rules::ShortestRemaining);
        assert_eq!(
            result.gantt_chart,
            vec![
                GanttItem::busy("long", 0, 2),
                GanttItem::busy("short", 2, 3),
                GanttItem::busy("long", 3, 7),
            ]
        );
    }

    #[test]
    fn test_preemptive_coalesces_across_arrivals() {
        // The arrival at t=1 is worse than the running process; no visible split.
        let processes = vec![Process::new("A", 0, 3), Process::new("B", 1, 5)];
        let result = run_preemptive(&processes, rules::ShortestRemaining);
        assert_eq!(
            result.gantt_chart,
            vec![GanttItem::busy("A", 0, 3), GanttItem::busy("B", 3, 8)]
        );
    }

    #[test]
    fn test_empty_input() {
        let result = run_preemptive(&[], rules::FirstCome);
        assert!(result.gantt_chart.is_empty());
        assert_eq!(result.total_time, 0);
        let result = run_to_completion(&[], rules::FirstCome);
        assert!(result.processes.is_empty());
    }
}
