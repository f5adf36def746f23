//! Multilevel feedback queues.
//!
//! # Algorithm
//! - `N` FIFO levels, 0 = most urgent. Arrivals always enter level 0.
//! - Dispatch from the lowest-indexed non-empty level.
//! - A process that exhausts its level's quantum is demoted to
//!   `min(level + 1, N - 1)`, behind any process that arrived during its
//!   slice. There is no promotion.
//!
//! Quantum per level:
//!
//! | Variant | Quantum at level `l` |
//! |---------|----------------------|
//! | FB | `2^l` |
//! | FBV | `base × multiplier^l` |
//!
//! Each dispatch is tagged with its level on the timeline, and the level
//! contents at each dispatch are kept in the result's level trace.

use std::collections::VecDeque;

use log::trace;

use crate::dispatching::SimulationContext;
use crate::models::{LevelSnapshot, Process, SchedulingResult};

/// Per-level time quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantumSchedule {
    /// `2^level`.
    Exponential,
    /// `base × multiplier^level`.
    Scaled {
        /// Level-0 quantum.
        base: u64,
        /// Growth factor per level.
        multiplier: u64,
    },
}

impl QuantumSchedule {
    /// Quantum for a level (at least 1, saturating on overflow).
    pub fn quantum(&self, level: usize) -> u64 {
        let exp = u32::try_from(level).unwrap_or(u32::MAX);
        let q = match *self {
            QuantumSchedule::Exponential => 2u64.saturating_pow(exp),
            QuantumSchedule::Scaled { base, multiplier } => {
                base.saturating_mul(multiplier.saturating_pow(exp))
            }
        };
        q.max(1)
    }
}

/// Runs Multilevel Feedback (FB) with quanta `1, 2, 4, …`.
pub fn feedback(processes: &[Process], number_of_queues: usize) -> SchedulingResult {
    multilevel(processes, number_of_queues, QuantumSchedule::Exponential)
}

/// Runs Feedback with Varying quantum (FBV).
pub fn feedback_varying(
    processes: &[Process],
    number_of_queues: usize,
    base_quantum: u64,
    multiplier: u64,
) -> SchedulingResult {
    multilevel(
        processes,
        number_of_queues,
        QuantumSchedule::Scaled {
            base: base_quantum.max(1),
            multiplier: multiplier.max(1),
        },
    )
}

/// Runs a multilevel feedback simulation with the given quantum schedule.
pub fn multilevel(
    processes: &[Process],
    number_of_queues: usize,
    schedule: QuantumSchedule,
) -> SchedulingResult {
    let levels = number_of_queues.max(1);
    let mut ctx = SimulationContext::new(processes);
    let mut queues: Vec<VecDeque<usize>> = vec![VecDeque::new(); levels];
    let mut level_trace = Vec::new();

    while !ctx.is_finished() {
        queues[0].extend(ctx.admit_arrivals());

        let next = queues
            .iter_mut()
            .enumerate()
            .find_map(|(level, q)| q.pop_front().map(|idx| (level, idx)));

        let Some((level, idx)) = next else {
            let now = ctx.clock();
            if !ctx.idle_until_next_arrival() {
                break;
            }
            level_trace.push(snapshot_levels(&ctx, &queues, now));
            continue;
        };

        level_trace.push(snapshot_levels(&ctx, &queues, ctx.clock()));
        let quantum = schedule.quantum(level);
        trace!(
            "feedback dispatches {} from level {} at {} (quantum {})",
            ctx.id(idx),
            level,
            ctx.clock(),
            quantum
        );
        let completed = ctx.run(idx, quantum, Some(level));

        queues[0].extend(ctx.admit_arrivals());
        if !completed {
            let demoted = (level + 1).min(levels - 1);
            queues[demoted].push_back(idx);
        }
    }

    ctx.into_result(false).with_level_trace(level_trace)
}

fn snapshot_levels(ctx: &SimulationContext, queues: &[VecDeque<usize>], time: u64) -> LevelSnapshot {
    LevelSnapshot {
        time,
        levels: queues
            .iter()
            .map(|q| q.iter().map(|&i| ctx.id(i).to_string()).collect())
            .collect(),
    }
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
    fn test_quantum_schedules() {
        let fb = QuantumSchedule::Exponential;
        assert_eq!((0..4).map(|l| fb.quantum(l)).collect::<Vec<_>>(), vec![1, 2, 4, 8]);

        let fbv = QuantumSchedule::Scaled { base: 2, multiplier: 3 };
        assert_eq!((0..3).map(|l| fbv.quantum(l)).collect::<Vec<_>>(), vec![2, 6, 18]);

        assert_eq!(fb.quantum(200), u64::MAX);
    }

    #[test]
    fn test_feedback_single_process_demotes() {
        let result = feedback(&[Process::new("A", 0, 6)], 3);
        assert_eq!(
            result.gantt_chart,
            vec![
                GanttItem::busy("A", 0, 1).with_queue_level(0),
                GanttItem::busy("A", 1, 3).with_queue_level(1),
                GanttItem::busy("A", 3, 6).with_queue_level(2),
            ]
        );
    }

    #[test]
    fn test_feedback_bottom_level_round_robins() {
        let result = feedback(&[Process::new("A", 0, 12)], 2);
        let levels: Vec<_> = result.gantt_chart.iter().map(|g| g.queue_level).collect();
        // 1 at level 0, then 2-unit slices at the bottom level.
        assert_eq!(
            levels,
            vec![Some(0), Some(1), Some(1), Some(1), Some(1), Some(1), Some(1)]
        );
        assert_eq!(result.total_time, 12);
    }

    #[test]
    fn test_feedback_textbook() {
        let result = feedback(&textbook(), 3);
        let order: Vec<_> = result
            .gantt_chart
            .iter()
            .map(|g| (g.process_id.as_str(), g.start_time, g.end_time, g.queue_level))
            .collect();
        assert_eq!(
            order,
            vec![
                ("P1", 0, 1, Some(0)),
                ("P2", 1, 2, Some(0)),
                ("P3", 2, 3, Some(0)),
                ("P4", 3, 4, Some(0)),
                ("P1", 4, 6, Some(1)),
                ("P2", 6, 8, Some(1)),
                ("P3", 8, 10, Some(1)),
                ("P4", 10, 12, Some(1)),
                ("P1", 12, 14, Some(2)),
                ("P3", 14, 18, Some(2)),
                ("P4", 18, 21, Some(2)),
                ("P3", 21, 22, Some(2)),
            ]
        );
    }

    #[test]
    fn test_feedback_levels_never_decrease() {
        let result = feedback(&textbook(), 3);
        for p in &result.processes {
            let levels: Vec<_> = result
                .slices_for(&p.id)
                .iter()
                .filter_map(|g| g.queue_level)
                .collect();
            assert!(levels.windows(2).all(|w| w[0] <= w[1]), "{}: {levels:?}", p.id);
        }
    }

    #[test]
    fn test_level_trace_records_queue_contents() {
        let result = feedback(&textbook(), 3);
        assert_eq!(result.level_trace.len(), result.gantt_chart.len());
        // At t=4, P1 is dispatched from level 1; P2, P3, P4 are waiting there.
        let at4 = result.levels_at(4).unwrap();
        assert_eq!(at4.levels[0], Vec::<String>::new());
        assert_eq!(at4.levels[1], vec!["P2", "P3", "P4"]);
    }

    #[test]
    fn test_feedback_idle_gap() {
        let processes = vec![Process::new("A", 0, 1), Process::new("B", 3, 1)];
        let result = feedback(&processes, 3);
        assert_eq!(result.gantt_chart[1], GanttItem::idle(1, 3));
        let idle_levels = result.levels_at(1).unwrap();
        assert!(idle_levels.levels.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_feedback_varying() {
        let result = feedback_varying(&[Process::new("A", 0, 10)], 3, 2, 2);
        let slices: Vec<_> = result.gantt_chart.iter().map(|g| g.duration()).collect();
        assert_eq!(slices, vec![2, 4, 4]);
    }

    #[test]
    fn test_arrival_during_slice_preempts_next_dispatch() {
        // B arrives while A runs its level-1 slice and goes to level 0.
        let processes = vec![Process::new("A", 0, 5), Process::new("B", 2, 1)];
        let result = feedback(&processes, 3);
        let order: Vec<_> = result
            .gantt_chart
            .iter()
            .map(|g| (g.process_id.as_str(), g.start_time, g.end_time))
            .collect();
        assert_eq!(order, vec![("A", 0, 1), ("A", 1, 3), ("B", 3, 4), ("A", 4, 6)]);
    }
}
