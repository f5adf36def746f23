//! Scheduling result model.

use serde::{Deserialize, Serialize};

use super::{GanttItem, Process};

/// Contents of every feedback level at a dispatch instant.
///
/// `levels[i]` lists the process ids waiting in level `i`, head first.
/// The process being dispatched has already been removed from its level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// Dispatch time.
    pub time: u64,
    /// Queued process ids per level.
    pub levels: Vec<Vec<String>>,
}

/// Output of one algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingResult {
    /// Input processes (in input order) with every derived field populated.
    pub processes: Vec<Process>,
    /// Chronological, contiguous execution timeline.
    pub gantt_chart: Vec<GanttItem>,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Makespan: end of the last timeline interval.
    pub total_time: u64,
    /// Per-dispatch level contents, recorded by feedback algorithms only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub level_trace: Vec<LevelSnapshot>,
}

impl SchedulingResult {
    /// Assembles a result and computes the averaged metrics.
    ///
    /// Averages over an empty process list are 0.0.
    pub fn new(processes: Vec<Process>, gantt_chart: Vec<GanttItem>) -> Self {
        let total_time = gantt_chart.last().map(|g| g.end_time).unwrap_or(0);
        let average_waiting_time = mean(&processes, |p| p.waiting_time);
        let average_turnaround_time = mean(&processes, |p| p.turnaround_time);
        let average_response_time = mean(&processes, |p| p.response_time);
        Self {
            processes,
            gantt_chart,
            average_waiting_time,
            average_turnaround_time,
            average_response_time,
            total_time,
            level_trace: Vec::new(),
        }
    }

    /// Attaches a feedback level trace.
    pub fn with_level_trace(mut self, trace: Vec<LevelSnapshot>) -> Self {
        self.level_trace = trace;
        self
    }

    /// Finds a process record by id.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Timeline intervals belonging to one process.
    pub fn slices_for(&self, id: &str) -> Vec<&GanttItem> {
        self.gantt_chart
            .iter()
            .filter(|g| !g.is_idle && g.process_id == id)
            .collect()
    }

    /// Total idle time on the timeline.
    pub fn idle_time(&self) -> u64 {
        self.gantt_chart
            .iter()
            .filter(|g| g.is_idle)
            .map(GanttItem::duration)
            .sum()
    }

    /// Level snapshot recorded at `time`, if any.
    pub fn levels_at(&self, time: u64) -> Option<&LevelSnapshot> {
        self.level_trace
            .binary_search_by_key(&time, |s| s.time)
            .ok()
            .map(|i| &self.level_trace[i])
    }
}

fn mean(processes: &[Process], metric: impl Fn(&Process) -> Option<u64>) -> f64 {
    if processes.is_empty() {
        return 0.0;
    }
    let sum: f64 = processes.iter().filter_map(metric).map(|v| v as f64).sum();
    sum / processes.len() as f64
}
