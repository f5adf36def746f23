//! Algorithm configuration.
//!
//! One struct carries every tunable; each algorithm reads only the fields
//! it uses. Every key is optional when deserializing.
//!
//! | Key | Used by | Default |
//! |-----|---------|---------|
//! | `timeQuantum` | RR, FBV (base) | 2 |
//! | `numberOfQueues` | FB, FBV | 3 |
//! | `quantumMultiplier` | FBV | 2 |
//! | `isPreemptive` | FCFS, SJF, PRIORITY | algorithm default (non-preemptive) |
//! | `priorityHighIsMin` | PRIORITY | true |

use serde::{Deserialize, Serialize};

/// Default Round Robin / FBV base quantum.
pub const DEFAULT_TIME_QUANTUM: u64 = 2;
/// Default number of feedback levels.
pub const DEFAULT_NUMBER_OF_QUEUES: usize = 3;
/// Default FBV quantum growth factor.
pub const DEFAULT_QUANTUM_MULTIPLIER: u64 = 2;

/// Configuration passed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlgorithmConfig {
    /// Round Robin quantum and FBV base quantum.
    pub time_quantum: u64,
    /// Number of feedback levels.
    pub number_of_queues: usize,
    /// FBV per-level quantum multiplier.
    pub quantum_multiplier: u64,
    /// Preemption toggle. `None` selects the algorithm's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_preemptive: Option<bool>,
    /// `true`: numerically lower priority is more urgent.
    pub priority_high_is_min: bool,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
            number_of_queues: DEFAULT_NUMBER_OF_QUEUES,
            quantum_multiplier: DEFAULT_QUANTUM_MULTIPLIER,
            is_preemptive: None,
            priority_high_is_min: true,
        }
    }
}

impl AlgorithmConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time quantum.
    pub fn with_time_quantum(mut self, quantum: u64) -> Self {
        self.time_quantum = quantum;
        self
    }

    /// Sets the number of feedback levels.
    pub fn with_number_of_queues(mut self, queues: usize) -> Self {
        self.number_of_queues = queues;
        self
    }

    /// Sets the FBV quantum multiplier.
    pub fn with_quantum_multiplier(mut self, multiplier: u64) -> Self {
        self.quantum_multiplier = multiplier;
        self
    }

    /// Sets the preemption toggle.
    pub fn with_preemption(mut self, preemptive: bool) -> Self {
        self.is_preemptive = Some(preemptive);
        self
    }

    /// Sets the priority direction.
    pub fn with_priority_high_is_min(mut self, high_is_min: bool) -> Self {
        self.priority_high_is_min = high_is_min;
        self
    }

    /// Effective quantum (at least 1).
    pub fn quantum(&self) -> u64 {
        self.time_quantum.max(1)
    }

    /// Effective level count (at least 1).
    pub fn queue_count(&self) -> usize {
        self.number_of_queues.max(1)
    }

    /// Effective multiplier (at least 1).
    pub fn multiplier(&self) -> u64 {
        self.quantum_multiplier.max(1)
    }

    /// Preemption flag, falling back to `default` when unset.
    pub fn preemptive_or(&self, default: bool) -> bool {
        self.is_preemptive.unwrap_or(default)
    }
}
