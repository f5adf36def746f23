//! Input validation for simulation runs.
//!
//! The engine assumes well-formed input; these checks are for the caller's
//! side of the boundary (forms, imports). Detects:
//! - Empty process lists
//! - Empty or duplicate process IDs
//! - Zero burst times
//! - Schedules that would run past `u64::MAX`
//! - Out-of-range configuration values

use std::collections::HashSet;

use crate::config::AlgorithmConfig;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes to schedule.
    EmptyProcessList,
    /// A process has a blank identifier.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs no CPU time.
    InvalidBurstTime,
    /// A configuration value is out of range.
    InvalidConfig,
    /// The schedule would end past the largest representable time.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. No blank IDs
/// 3. No duplicate IDs
/// 4. Every burst time ≥ 1
/// 5. Latest arrival + total burst time fits in `u64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "Process list is empty",
        ));
    }

    let mut ids = HashSet::new();
    for (i, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {i} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!("Process '{}' must have a burst time of at least 1", p.id),
            ));
        }
    }

    if let Err(e) = check_time_horizon(processes) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Returns an upper bound on the makespan: latest arrival plus total burst.
///
/// No schedule produced by this crate ends later, so when this fits in
/// `u64` the simulated clock cannot overflow.
pub fn check_time_horizon(processes: &[Process]) -> Result<u64, ValidationError> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
        .ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::TimeOverflow,
                "Latest arrival plus total burst time exceeds the maximum time value",
            )
        })
}

/// Validates configuration ranges.
///
/// Checks `time_quantum ≥ 1`, `number_of_queues ≥ 2`, `quantum_multiplier ≥ 1`.
pub fn validate_config(config: &AlgorithmConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.time_quantum < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            "Time quantum must be at least 1",
        ));
    }
    if config.number_of_queues < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!(
                "Number of queues must be at least 2 (got {})",
                config.number_of_queues
            ),
        ));
    }
    if config.quantum_multiplier < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            "Quantum multiplier must be at least 1",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 1, 1)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_empty_list() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessList);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 3), Process::new("P1", 2, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_blank_id() {
        let processes = vec![Process::new("  ", 0, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new("P1", 0, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidBurstTime));
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new("P1", 0, 0),
            Process::new("P1", 0, 2),
            Process::new("", 0, 1),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_time_horizon() {
        let processes = vec![Process::new("P1", 4, 3), Process::new("P2", 0, 2)];
        assert_eq!(check_time_horizon(&processes), Ok(9));
        assert_eq!(check_time_horizon(&[]), Ok(0));

        let overflowing = vec![Process::new("P1", u64::MAX - 1, 5)];
        let errors = validate_processes(&overflowing).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_config_ranges() {
        assert!(validate_config(&AlgorithmConfig::default()).is_ok());

        let bad = AlgorithmConfig::new()
            .with_time_quantum(0)
            .with_number_of_queues(1)
            .with_quantum_multiplier(0);
        let errors = validate_config(&bad).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidConfig));
    }
}
