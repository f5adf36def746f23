//! Simulation domain models.
//!
//! Provides the data types exchanged between the engine and its consumers:
//! the process descriptors going in, and the timeline, metrics and animation
//! snapshots coming out.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Schedulable unit (input + derived metrics) |
//! | `GanttItem` | One busy or idle CPU interval |
//! | `SchedulingResult` | Timeline + per-process metrics + averages |
//! | `QueueSnapshot` | Process states at one instant |
//! | `QueueAnimation` | Ordered snapshots for stepped playback |

mod animation;
mod gantt;
mod process;
mod result;

pub use animation::{QueueAnimation, QueueSnapshot};
pub use gantt::{coalesce, is_contiguous, GanttItem, Timeline, IDLE_ID};
pub use process::Process;
pub use result::{LevelSnapshot, SchedulingResult};
