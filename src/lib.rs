//! Deterministic CPU scheduling simulator.
//!
//! Runs a set of processes through a classic uniprocessor scheduling
//! algorithm and reports the execution timeline, per-process timing
//! metrics and averages. A finished run can be replayed as queue
//! snapshots for stepped visualization.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `GanttItem`, `SchedulingResult`,
//!   `QueueSnapshot`, `QueueAnimation`
//! - **`algorithms`**: FCFS, Round Robin, SJF/SRT, Priority, FB, FBV
//! - **`dispatching`**: Selection rules and the tie-breaking ready queue
//! - **`scheduler`**: Identifier dispatch, algorithm metadata, KPIs, comparison
//! - **`animation`**: Snapshot synthesis from a finished run
//! - **`export`**: JSON process lists, JSON and CSV result reports
//! - **`validation`**: Input integrity checks (empty ids, duplicates, zero bursts)
//! - **`workload`**: Sample and seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::{run, AlgorithmConfig, Process};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 8),
//!     Process::new("P4", 3, 6),
//! ];
//! let result = run("FCFS", &processes, &AlgorithmConfig::default()).unwrap();
//! assert_eq!(result.total_time, 22);
//! assert!((result.average_waiting_time - 5.75).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Stallings, "Operating Systems: Internals and Design Principles", Ch. 9

pub mod algorithms;
pub mod animation;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod export;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use animation::{generate_animation, synthesize};
pub use config::AlgorithmConfig;
pub use error::SchedulerError;
pub use models::{GanttItem, Process, QueueAnimation, QueueSnapshot, SchedulingResult};
pub use scheduler::{compare_algorithms, run, Algorithm, ScheduleKpi, ALGORITHMS};
