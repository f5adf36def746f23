//! JSON and CSV import/export.
//!
//! - Process lists round-trip as a pretty-printed JSON array of input
//!   records (`id`, `arrivalTime`, `burstTime`, optional `priority`).
//! - A finished run exports as a JSON report or a CSV table with a metrics
//!   header block.

use serde::Serialize;
use serde_json::Value;

use crate::error::SchedulerError;
use crate::models::{GanttItem, Process, SchedulingResult};
use crate::scheduler::{Algorithm, ScheduleKpi};

/// Serializes the input fields of a process list.
pub fn processes_to_json(processes: &[Process]) -> serde_json::Result<String> {
    let inputs: Vec<Process> = processes.iter().map(Process::input_only).collect();
    serde_json::to_string_pretty(&inputs)
}

/// Parses a process list, discarding any derived fields present in the data.
///
/// # Errors
/// [`SchedulerError::MalformedImport`] if the text is not JSON, is not an
/// array, or contains an entry that is not a process record.
pub fn processes_from_json(json: &str) -> Result<Vec<Process>, SchedulerError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(SchedulerError::MalformedImport(
            "expected an array of processes".to_string(),
        ));
    }
    let processes: Vec<Process> = serde_json::from_value(value)?;
    Ok(processes.iter().map(Process::input_only).collect())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultReport<'a> {
    algorithm: Algorithm,
    metrics: ScheduleKpi,
    processes: &'a [Process],
    gantt_chart: &'a [GanttItem],
}

/// Serializes a run as a report with `algorithm`, `metrics`, `processes`
/// and `ganttChart` keys.
pub fn result_to_json(algorithm: Algorithm, result: &SchedulingResult) -> serde_json::Result<String> {
    let report = ResultReport {
        algorithm,
        metrics: ScheduleKpi::calculate(result),
        processes: &result.processes,
        gantt_chart: &result.gantt_chart,
    };
    serde_json::to_string_pretty(&report)
}

const CSV_COLUMNS: &str = "Process ID,Arrival Time,Burst Time,Priority,Waiting Time,Turnaround Time,Response Time,Completion Time";

/// Renders a run as CSV: a metrics header block, a blank line, then one row
/// per process in input order. A missing priority is written as 0.
pub fn result_to_csv(algorithm: Algorithm, result: &SchedulingResult) -> String {
    let kpi = ScheduleKpi::calculate(result);
    let mut lines = vec![
        format!("Algorithm: {}", algorithm.name()),
        format!("Average Waiting Time: {:.2}", kpi.average_waiting_time),
        format!("Average Turnaround Time: {:.2}", kpi.average_turnaround_time),
        format!("Average Response Time: {:.2}", kpi.average_response_time),
        format!("CPU Utilization: {:.2}%", kpi.cpu_utilization),
        format!("Throughput: {:.2}", kpi.throughput),
        String::new(),
        CSV_COLUMNS.to_string(),
    ];
    lines.extend(result.processes.iter().map(|p| {
        format!(
            "{},{},{},{},{},{},{},{}",
            csv_field(&p.id),
            p.arrival_time,
            p.burst_time,
            p.priority.unwrap_or(0),
            p.waiting_time.unwrap_or_default(),
            p.turnaround_time.unwrap_or_default(),
            p.response_time.unwrap_or_default(),
            p.completion_time.unwrap_or_default(),
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlgorithmConfig;
    use crate::workload::sample_processes;
    use pretty_assertions::assert_eq;

    fn textbook_result() -> SchedulingResult {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
            Process::new("P4", 3, 6),
        ];
        Algorithm::Fcfs.run(&processes, &AlgorithmConfig::default())
    }

    #[test]
    fn test_process_list_round_trip() {
        let sample = sample_processes();
        let json = processes_to_json(&sample).unwrap();
        assert!(json.contains("\"arrivalTime\": 0"));
        assert_eq!(processes_from_json(&json).unwrap(), sample);
    }

    #[test]
    fn test_export_drops_derived_fields() {
        let json = processes_to_json(&textbook_result().processes).unwrap();
        assert!(!json.contains("waitingTime"));
        assert!(!json.contains("priority"));
    }

    #[test]
    fn test_import_strips_derived_fields() {
        let json = r#"[{"id":"A","arrivalTime":1,"burstTime":4,"priority":2,"waitingTime":9}]"#;
        let processes = processes_from_json(json).unwrap();
        assert_eq!(processes, vec![Process::new("A", 1, 4).with_priority(2)]);
    }

    #[test]
    fn test_import_rejects_non_array() {
        let err = processes_from_json(r#"{"id":"A","arrivalTime":0,"burstTime":1}"#).unwrap_err();
        assert_eq!(
            err,
            SchedulerError::MalformedImport("expected an array of processes".into())
        );
        assert!(matches!(
            processes_from_json("not json"),
            Err(SchedulerError::MalformedImport(_))
        ));
        assert!(matches!(
            processes_from_json(r#"[{"id":"A"}]"#),
            Err(SchedulerError::MalformedImport(_))
        ));
    }

    #[test]
    fn test_result_report_keys() {
        let json = result_to_json(Algorithm::Fcfs, &textbook_result()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["algorithm"], "FCFS");
        assert_eq!(value["metrics"]["totalTime"], 22);
        assert_eq!(value["metrics"]["averageWaitingTime"], 5.75);
        assert_eq!(value["processes"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["ganttChart"][0]["processId"], "P1");
    }

    #[test]
    fn test_result_csv() {
        let csv = result_to_csv(Algorithm::Fcfs, &textbook_result());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Algorithm: First Come First Serve",
                "Average Waiting Time: 5.75",
                "Average Turnaround Time: 11.25",
                "Average Response Time: 5.75",
                "CPU Utilization: 100.00%",
                "Throughput: 0.18",
                "",
                CSV_COLUMNS,
                "P1,0,5,0,0,5,0,5",
                "P2,1,3,0,4,7,4,8",
                "P3,2,8,0,6,14,6,16",
                "P4,3,6,0,13,19,13,22",
            ]
        );
    }

    #[test]
    fn test_result_csv_line_endings() {
        let csv = result_to_csv(Algorithm::RoundRobin, &textbook_result());
        assert!(csv.ends_with("P4,3,6,0,13,19,13,22\n"));
        assert!(!csv.ends_with("\n\n"));
        assert_eq!(csv.matches('\n').count(), 12);
    }

    #[test]
    fn test_csv_quotes_ids() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("P1"), "P1");
    }
}
