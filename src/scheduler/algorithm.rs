//! Algorithm identifiers and display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// Supported scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Round Robin.
    #[serde(rename = "RR")]
    RoundRobin,
    /// Shortest Job First (a.k.a. Shortest Process Next).
    #[serde(rename = "SJF", alias = "SPN")]
    Sjf,
    /// Shortest Remaining Time.
    #[serde(rename = "SRT")]
    Srt,
    /// Priority scheduling.
    #[serde(rename = "PRIORITY")]
    Priority,
    /// Multilevel Feedback.
    #[serde(rename = "FB")]
    Feedback,
    /// Feedback with Varying quantum.
    #[serde(rename = "FBV")]
    FeedbackVarying,
}

/// Display metadata for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    /// Algorithm.
    pub algorithm: Algorithm,
    /// Short identifier accepted by the dispatcher.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Metadata for every algorithm, in declaration order.
pub static ALGORITHMS: [AlgorithmInfo; 7] = [
    AlgorithmInfo {
        algorithm: Algorithm::Fcfs,
        id: "FCFS",
        name: "First Come First Serve",
        description: "Processes jobs in order of arrival (non-preemptive)",
    },
    AlgorithmInfo {
        algorithm: Algorithm::RoundRobin,
        id: "RR",
        name: "Round Robin",
        description: "Fixed time quantum for fair CPU sharing (preemptive)",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Sjf,
        id: "SJF",
        name: "Shortest Job First",
        description: "Selects the shortest job first (non-preemptive)",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Srt,
        id: "SRT",
        name: "Shortest Remaining Time",
        description: "Always runs the job with the least remaining work (preemptive)",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Priority,
        id: "PRIORITY",
        name: "Priority Scheduling",
        description: "Schedules based on priority; choose min or max as highest",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Feedback,
        id: "FB",
        name: "Multilevel Feedback",
        description: "Demotes long jobs through queues with quanta 1, 2, 4, ... (preemptive)",
    },
    AlgorithmInfo {
        algorithm: Algorithm::FeedbackVarying,
        id: "FBV",
        name: "Feedback with Varying Quantum",
        description: "Multilevel feedback with a configurable base quantum and multiplier",
    },
];

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Fcfs,
        Algorithm::RoundRobin,
        Algorithm::Sjf,
        Algorithm::Srt,
        Algorithm::Priority,
        Algorithm::Feedback,
        Algorithm::FeedbackVarying,
    ];

    /// Metadata entry.
    pub fn info(self) -> &'static AlgorithmInfo {
        &ALGORITHMS[self as usize]
    }

    /// Short identifier (e.g. "RR").
    pub fn id(self) -> &'static str {
        self.info().id
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        self.info().description
    }

    /// Whether the algorithm tracks feedback levels.
    pub fn is_multilevel(self) -> bool {
        matches!(self, Algorithm::Feedback | Algorithm::FeedbackVarying)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    /// Parses an identifier, ignoring ASCII case. `SPN` is accepted for SJF.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.eq_ignore_ascii_case("SPN") {
            return Ok(Algorithm::Sjf);
        }
        ALGORITHMS
            .iter()
            .find(|info| info.id.eq_ignore_ascii_case(key))
            .map(|info| info.algorithm)
            .ok_or_else(|| SchedulerError::UnknownAlgorithm(s.to_string()))
    }
}
