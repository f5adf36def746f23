//! Algorithm dispatch, metadata and run evaluation.
//!
//! # Dispatch
//!
//! [`run`] resolves an identifier such as `"RR"` to an [`Algorithm`] and
//! executes it with the relevant fields of an
//! [`AlgorithmConfig`](crate::AlgorithmConfig). [`ALGORITHMS`] is the
//! immutable name/description table used for display.
//!
//! # KPI
//!
//! [`ScheduleKpi`] derives utilization and throughput from a result;
//! [`compare_algorithms`] runs several algorithms on one workload.

mod algorithm;
mod compare;
mod dispatcher;
mod kpi;

pub use algorithm::{Algorithm, AlgorithmInfo, ALGORITHMS};
pub use compare::{compare_algorithms, AlgorithmComparison, ComparisonReport};
pub use dispatcher::run;
pub use kpi::ScheduleKpi;
