//! Execution timeline (Gantt chart) model.
//!
//! A timeline is an ordered sequence of half-open CPU intervals
//! `[start_time, end_time)`. Idle periods are first-class intervals, so a
//! well-formed timeline has no gaps: every item starts where the previous
//! one ended.

use serde::{Deserialize, Serialize};

/// Process id written for idle intervals.
pub const IDLE_ID: &str = "IDLE";

/// One contiguous CPU interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttItem {
    /// Running process, or [`IDLE_ID`].
    pub process_id: String,
    /// Interval start (inclusive).
    pub start_time: u64,
    /// Interval end (exclusive).
    pub end_time: u64,
    /// Whether the CPU was idle.
    #[serde(default)]
    pub is_idle: bool,
    /// Feedback queue level the slice was dispatched from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_level: Option<usize>,
}

impl GanttItem {
    /// Creates a busy interval for a process.
    pub fn busy(process_id: impl Into<String>, start_time: u64, end_time: u64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
            is_idle: false,
            queue_level: None,
        }
    }

    /// Creates an idle interval.
    pub fn idle(start_time: u64, end_time: u64) -> Self {
        Self {
            process_id: IDLE_ID.to_string(),
            start_time,
            end_time,
            is_idle: true,
            queue_level: None,
        }
    }

    /// Tags the interval with a feedback queue level.
    pub fn with_queue_level(mut self, level: usize) -> Self {
        self.queue_level = Some(level);
        self
    }

    /// Interval length.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end_time - self.start_time
    }

    /// Whether `other` continues this interval for the same occupant.
    fn continued_by(&self, other: &GanttItem) -> bool {
        self.end_time == other.start_time
            && self.is_idle == other.is_idle
            && self.process_id == other.process_id
            && self.queue_level == other.queue_level
    }
}

/// Append-only timeline builder.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    items: Vec<GanttItem>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval. Zero-length intervals are dropped.
    pub fn push(&mut self, item: GanttItem) {
        debug_assert!(
            self.items
                .last()
                .map_or(true, |last| last.end_time == item.start_time),
            "timeline must stay contiguous"
        );
        if item.end_time > item.start_time {
            self.items.push(item);
        }
    }

    /// End of the last interval (0 when empty).
    pub fn end_time(&self) -> u64 {
        self.items.last().map(|i| i.end_time).unwrap_or(0)
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no interval has been recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the raw intervals.
    pub fn into_items(self) -> Vec<GanttItem> {
        self.items
    }

    /// Returns the intervals with touching same-occupant entries merged.
    pub fn into_coalesced(self) -> Vec<GanttItem> {
        coalesce(self.items)
    }
}

/// Merges adjacent intervals of the same occupant whose boundaries touch.
pub fn coalesce(items: Vec<GanttItem>) -> Vec<GanttItem> {
    let mut merged: Vec<GanttItem> = Vec::with_capacity(items.len());
    for item in items {
        match merged.last_mut() {
            Some(last) if last.continued_by(&item) => last.end_time = item.end_time,
            _ => merged.push(item),
        }
    }
    merged
}

/// Whether every interval starts where the previous one ended.
pub fn is_contiguous(items: &[GanttItem]) -> bool {
    items.windows(2).all(|w| w[0].end_time == w[1].start_time)
}
