//! Selection rules and the ready queue they drive.
//!
//! Selection-based algorithms (FCFS, SJF, SRT, Priority) differ only in the
//! key they rank ready processes by. A [`SelectionRule`] produces that key;
//! the [`ReadyQueue`] orders processes by it and breaks ties uniformly:
//!
//! 1. rule score (lower first)
//! 2. earliest arrival time
//! 3. input order
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{rules, ReadyQueue, SimulationContext};
//! use cpu_sched_sim::models::Process;
//!
//! let processes = vec![Process::new("A", 0, 5), Process::new("B", 0, 2)];
//! let mut ctx = SimulationContext::new(&processes);
//! let mut ready = ReadyQueue::new(rules::ShortestJob);
//! for idx in ctx.admit_arrivals() {
//!     ready.push(ctx.slot(idx));
//! }
//! assert_eq!(ready.pop(), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::{ProcessSlot, SimulationContext};
pub use engine::ReadyQueue;

use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// Ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher precedence.** Ties are broken by the
/// [`ReadyQueue`], not by the rule.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRT").
    fn name(&self) -> &'static str;

    /// Scores a process in its current runtime state.
    fn evaluate(&self, slot: &ProcessSlot) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
