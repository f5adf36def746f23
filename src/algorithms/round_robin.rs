//! Round Robin.
//!
//! # Algorithm
//! 1. Pop the head of the FIFO ready queue.
//! 2. Run it for `min(quantum, remaining)`.
//! 3. Enqueue every process that arrived up to the end of the slice.
//! 4. Re-enqueue the preempted process behind them.
//!
//! Slices are not merged, so a process that runs back-to-back shows one
//! interval per quantum.

use std::collections::VecDeque;

use log::trace;

use crate::dispatching::SimulationContext;
use crate::models::{Process, SchedulingResult};

/// Runs Round Robin with the given quantum (values below 1 are treated as 1).
pub fn round_robin(processes: &[Process], quantum: u64) -> SchedulingResult {
    let quantum = quantum.max(1);
    let mut ctx = SimulationContext::new(processes);
    let mut ready: VecDeque<usize> = VecDeque::new();

    while !ctx.is_finished() {
        ready.extend(ctx.admit_arrivals());

        let Some(idx) = ready.pop_front() else {
            if !ctx.idle_until_next_arrival() {
                break;
            }
            continue;
        };

        trace!("RR dispatches {} at {}", ctx.id(idx), ctx.clock());
        let completed = ctx.run(idx, quantum, None);

        // Newcomers go ahead of the process returning from its slice.
        ready.extend(ctx.admit_arrivals());
        if !completed {
            ready.push_back(idx);
        }
    }

    ctx.into_result(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttItem;
    use pretty_assertions::assert_eq;

    fn textbook() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
            Process::new("P4", 3, 6),
        ]
    }

    #[test]
    fn test_rr_quantum_two_sequence() {
        let result = round_robin(&textbook(), 2);
        let order: Vec<_> = result
            .gantt_chart
            .iter()
            .map(|g| (g.process_id.as_str(), g.start_time, g.end_time))
            .collect();
        assert_eq!(
            order,
            vec![
                ("P1", 0, 2),
                ("P2", 2, 4),
                ("P3", 4, 6),
                ("P1", 6, 8),
                ("P4", 8, 10),
                ("P2", 10, 11),
                ("P3", 11, 13),
                ("P1", 13, 14),
                ("P4", 14, 16),
                ("P3", 16, 18),
                ("P4", 18, 20),
                ("P3", 20, 22),
            ]
        );
        assert_eq!(result.total_time, 22);
    }

    #[test]
    fn test_rr_slices_never_exceed_quantum() {
        let result = round_robin(&textbook(), 2);
        assert!(result.gantt_chart.iter().all(|g| g.duration() <= 2));
    }

    #[test]
    fn test_rr_newcomer_precedes_preempted() {
        // B arrives exactly when A's first slice ends; B runs next.
        let processes = vec![Process::new("A", 0, 4), Process::new("B", 2, 1)];
        let result = round_robin(&processes, 2);
        assert_eq!(
            result.gantt_chart,
            vec![
                GanttItem::busy("A", 0, 2),
                GanttItem::busy("B", 2, 3),
                GanttItem::busy("A", 3, 5),
            ]
        );
    }

    #[test]
    fn test_rr_lone_process_is_not_merged() {
        let result = round_robin(&[Process::new("A", 0, 5)], 2);
        assert_eq!(result.gantt_chart.len(), 3);
        assert_eq!(result.processes[0].completion_time, Some(5));
    }

    #[test]
    fn test_rr_response_recorded_on_first_dispatch() {
        let result = round_robin(&textbook(), 2);
        let responses: Vec<_> = result.processes.iter().map(|p| p.response_time).collect();
        // P1@0, P2@2, P3@4, P4@8
        assert_eq!(responses, vec![Some(0), Some(1), Some(2), Some(5)]);
    }

    #[test]
    fn test_rr_does_not_dispatch_before_arrival() {
        let result = round_robin(&[Process::new("A", 3, 1)], 2);
        assert_eq!(
            result.gantt_chart,
            vec![GanttItem::idle(0, 3), GanttItem::busy("A", 3, 4)]
        );
    }

    #[test]
    fn test_rr_zero_quantum_treated_as_one() {
        let result = round_robin(&[Process::new("A", 0, 2)], 0);
        assert_eq!(result.gantt_chart.len(), 2);
    }
}
