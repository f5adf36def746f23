//! CPU scheduling algorithms.
//!
//! Every algorithm is a pure function of its input slice and parameters:
//! no state survives between calls, and identical inputs always yield
//! identical results.
//!
//! # Shared rules
//!
//! - **Tie-break**: primary key, then earliest arrival, then input order.
//! - **Idle time**: when nothing is ready, one idle interval spans from the
//!   clock to the next arrival.
//! - **Output order**: result processes keep the caller's input order.
//!
//! | Function | Policy | Preemptive | Timeline merged |
//! |----------|--------|------------|-----------------|
//! | `fcfs` | arrival order | optional | when preemptive |
//! | `round_robin` | FIFO + quantum | yes | no |
//! | `sjf` | shortest burst | no | no |
//! | `srt` | shortest remaining | yes | yes |
//! | `priority` | priority value | optional | when preemptive |
//! | `feedback` / `feedback_varying` | multilevel FIFO | yes | no |
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Stallings, "Operating Systems: Internals and Design Principles", Ch. 9

mod fcfs;
mod feedback;
mod priority;
mod round_robin;
mod selection;
mod shortest;

pub use fcfs::fcfs;
pub use feedback::{feedback, feedback_varying, multilevel, QuantumSchedule};
pub use priority::priority;
pub use round_robin::round_robin;
pub use selection::{run_preemptive, run_to_completion};
pub use shortest::{sjf, srt};
