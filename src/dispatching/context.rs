//! Simulation state shared by every algorithm.

use log::trace;

use crate::models::{GanttItem, Process, SchedulingResult, Timeline};

/// Runtime state of one process during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSlot {
    /// Position in the caller's input.
    pub index: usize,
    /// Arrival time.
    pub arrival_time: u64,
    /// Total CPU demand.
    pub burst_time: u64,
    /// CPU time still owed.
    pub remaining_time: u64,
    /// Caller-supplied priority.
    pub priority: Option<i32>,
    /// Time of first dispatch.
    pub first_dispatch: Option<u64>,
    /// Time the last unit finished.
    pub completion_time: Option<u64>,
}

/// Clock, arrival feed and timeline for one run.
///
/// Owns copies of the caller's processes; nothing here is shared between
/// runs. Arrivals are released in (arrival time, input order) order.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    processes: Vec<Process>,
    slots: Vec<ProcessSlot>,
    arrival_order: Vec<usize>,
    next_arrival: usize,
    clock: u64,
    finished: usize,
    timeline: Timeline,
}

impl SimulationContext {
    /// Creates a context at t=0.
    pub fn new(processes: &[Process]) -> Self {
        let slots: Vec<ProcessSlot> = processes
            .iter()
            .enumerate()
            .map(|(index, p)| ProcessSlot {
                index,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                remaining_time: p.burst_time,
                priority: p.priority,
                first_dispatch: None,
                completion_time: None,
            })
            .collect();

        // Stable sort keeps input order among equal arrivals.
        let mut arrival_order: Vec<usize> = (0..slots.len()).collect();
        arrival_order.sort_by_key(|&i| slots[i].arrival_time);

        Self {
            processes: processes.iter().map(Process::input_only).collect(),
            slots,
            arrival_order,
            next_arrival: 0,
            clock: 0,
            finished: 0,
            timeline: Timeline::new(),
        }
    }

    /// Current simulation time.
    #[inline]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Runtime state of a process.
    #[inline]
    pub fn slot(&self, index: usize) -> &ProcessSlot {
        &self.slots[index]
    }

    /// Identifier of a process.
    #[inline]
    pub fn id(&self, index: usize) -> &str {
        &self.processes[index].id
    }

    /// Number of processes in the run.
    pub fn process_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether every process has completed.
    pub fn is_finished(&self) -> bool {
        self.finished == self.slots.len()
    }

    /// Releases every not-yet-admitted process with `arrival ≤ clock`.
    pub fn admit_arrivals(&mut self) -> Vec<usize> {
        let mut admitted = Vec::new();
        while let Some(&idx) = self.arrival_order.get(self.next_arrival) {
            if self.slots[idx].arrival_time > self.clock {
                break;
            }
            admitted.push(idx);
            self.next_arrival += 1;
        }
        admitted
    }

    /// Arrival time of the next process not yet admitted.
    pub fn next_arrival_time(&self) -> Option<u64> {
        self.arrival_order
            .get(self.next_arrival)
            .map(|&idx| self.slots[idx].arrival_time)
    }

    /// Emits an idle interval up to the next arrival and jumps the clock.
    ///
    /// Returns `false` when there is no later arrival to wait for.
    pub fn idle_until_next_arrival(&mut self) -> bool {
        match self.next_arrival_time() {
            Some(next) if next > self.clock => {
                trace!("idle [{}, {})", self.clock, next);
                self.timeline.push(GanttItem::idle(self.clock, next));
                self.clock = next;
                true
            }
            _ => false,
        }
    }

    /// Runs a process for `duration` units starting at the current clock.
    ///
    /// `duration` is capped at the process's remaining time. Returns `true`
    /// when the process completed during this slice.
    pub fn run(&mut self, index: usize, duration: u64, queue_level: Option<usize>) -> bool {
        let start = self.clock;
        let slot = &mut self.slots[index];
        let duration = duration.min(slot.remaining_time);
        slot.first_dispatch.get_or_insert(start);
        slot.remaining_time -= duration;
        self.clock += duration;

        let mut item = GanttItem::busy(self.processes[index].id.clone(), start, self.clock);
        if let Some(level) = queue_level {
            item = item.with_queue_level(level);
        }
        trace!("run {} [{}, {})", item.process_id, start, self.clock);
        self.timeline.push(item);

        if slot.remaining_time == 0 {
            slot.completion_time = Some(self.clock);
            self.finished += 1;
            true
        } else {
            false
        }
    }

    /// Builds the result, optionally merging touching same-process intervals.
    pub fn into_result(self, coalesce: bool) -> SchedulingResult {
        let mut processes = self.processes;
        for (process, slot) in processes.iter_mut().zip(&self.slots) {
            match (slot.first_dispatch, slot.completion_time) {
                (Some(first), Some(done)) => process.finish(first, done),
                _ => process.remaining_time = Some(slot.remaining_time),
            }
        }

        let gantt = if coalesce {
            self.timeline.into_coalesced()
        } else {
            self.timeline.into_items()
        };
        SchedulingResult::new(processes, gantt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("A", 3, 2),
            Process::new("B", 0, 1),
            Process::new("C", 3, 4),
        ]
    }

    #[test]
    fn test_admit_in_arrival_then_input_order() {
        let mut ctx = SimulationContext::new(&sample());
        assert_eq!(ctx.admit_arrivals(), vec![1]);
        assert_eq!(ctx.next_arrival_time(), Some(3));
        ctx.run(1, 1, None);
        assert!(ctx.idle_until_next_arrival());
        assert_eq!(ctx.clock(), 3);
        assert_eq!(ctx.admit_arrivals(), vec![0, 2]);
        assert_eq!(ctx.next_arrival_time(), None);
    }

    #[test]
    fn test_run_caps_at_remaining() {
        let mut ctx = SimulationContext::new(&[Process::new("A", 0, 3)]);
        ctx.admit_arrivals();
        assert!(!ctx.run(0, 2, None));
        assert_eq!(ctx.slot(0).remaining_time, 1);
        assert!(ctx.run(0, 5, None));
        assert_eq!(ctx.clock(), 3);
        assert!(ctx.is_finished());
    }

    #[test]
    fn test_idle_without_future_arrival() {
        let mut ctx = SimulationContext::new(&[Process::new("A", 0, 1)]);
        ctx.admit_arrivals();
        assert!(!ctx.idle_until_next_arrival());
    }

    #[test]
    fn test_into_result_fills_metrics() {
        let mut ctx = SimulationContext::new(&[Process::new("A", 1, 2)]);
        ctx.idle_until_next_arrival();
        ctx.admit_arrivals();
        ctx.run(0, 1, None);
        ctx.run(0, 1, None);

        let result = ctx.into_result(true);
        assert_eq!(result.gantt_chart.len(), 2); // idle + merged A
        let a = &result.processes[0];
        assert_eq!(a.completion_time, Some(3));
        assert_eq!(a.response_time, Some(0));
        assert_eq!(a.waiting_time, Some(0));
    }
}
