//! Indexed ready queue.
//!
//! A min-heap of `(score, arrival, input index)` entries. Entries are
//! pushed with the process state at push time; a process must not be in
//! the queue while it runs, so its score is always current when pushed back.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{ProcessSlot, RuleScore, SelectionRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    score: RuleScore,
    arrival: u64,
    index: usize,
}

/// Ready processes ordered by a selection rule.
///
/// # Example
/// ```
/// use cpu_sched_sim::dispatching::{rules, ReadyQueue, SimulationContext};
/// use cpu_sched_sim::models::Process;
///
/// let processes = vec![
///     Process::new("late", 1, 1).with_priority(1),
///     Process::new("early", 0, 1).with_priority(1),
/// ];
/// let ctx = SimulationContext::new(&processes);
/// let mut ready = ReadyQueue::new(rules::PriorityRule::default());
/// ready.push(ctx.slot(0));
/// ready.push(ctx.slot(1));
/// // Equal priority: earliest arrival wins.
/// assert_eq!(ready.pop(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct ReadyQueue<R: SelectionRule> {
    rule: R,
    heap: BinaryHeap<Reverse<Entry>>,
}

impl<R: SelectionRule> ReadyQueue<R> {
    /// Creates an empty queue ranked by `rule`.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            heap: BinaryHeap::new(),
        }
    }

    /// Adds a process using its current state.
    pub fn push(&mut self, slot: &ProcessSlot) {
        self.heap.push(Reverse(Entry {
            score: self.rule.evaluate(slot),
            arrival: slot.arrival_time,
            index: slot.index,
        }));
    }

    /// Removes and returns the best-ranked process index.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(e)| e.index)
    }

    /// Best-ranked process index without removing it.
    pub fn peek(&self) -> Option<usize> {
        self.heap.peek().map(|Reverse(e)| e.index)
    }

    /// Number of queued processes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The ranking rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }
}
