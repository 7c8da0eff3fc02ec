//! Input validation for process batches.
//!
//! Checks the structural integrity of a batch before any driver runs.
//! Detects:
//! - Empty batches
//! - Duplicate process IDs
//! - Non-positive burst durations
//! - Negative arrival times
//! - Non-positive Round-Robin quanta
//! - Batches whose time horizon does not fit in an `i64`

use crate::models::Process;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// The batch contains no process.
    EmptyBatch,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Round-Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Metrics were requested for a process that never completed.
    IncompleteRecord,
    /// Latest arrival plus total burst overflows the tick type.
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

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. The batch is not empty
/// 2. No duplicate process IDs
/// 3. Every burst duration is positive
/// 4. No arrival time is negative
/// 5. Latest arrival plus total burst fits in an `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "Process batch is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst duration {}",
                    p.id, p.burst_duration
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    if errors.is_empty() && time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst exceeds the representable tick range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest arrival plus the sum of all bursts.
///
/// No valid schedule of the batch completes after this tick. Returns
/// `None` when the sum overflows.
pub fn time_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_duration))
}

/// Validates a Round-Robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Round-Robin quantum must be positive, got {quantum}"),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(1),
            Process::new("P2", 2, 3),
            Process::new("P3", 4, 1),
        ]
    }

    #[test]
    fn test_valid_batch() {
        assert!(validate_batch(&sample_batch()).is_ok());
    }

    #[test]
    fn test_empty_batch() {
        let errors = validate_batch(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyBatch);
    }

    #[test]
    fn test_duplicate_id() {
        let batch = vec![Process::new("P1", 0, 1), Process::new("P1", 1, 1)];
        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_zero_burst() {
        let batch = vec![Process::new("P1", 0, 0)];
        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_arrival() {
        let batch = vec![Process::new("P1", -1, 3)];
        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_multiple_errors() {
        let batch = vec![Process::new("P1", -2, 0), Process::new("P1", 0, 1)];
        let errors = validate_batch(&batch).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_arrival_overflow() {
        let batch = vec![Process::new("P1", i64::MAX, 1)];
        let errors = validate_batch(&batch).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_total_burst_overflow() {
        let half = i64::MAX / 2 + 1;
        let batch = vec![Process::new("P1", 0, half), Process::new("P2", 0, half)];
        let errors = validate_batch(&batch).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_time_horizon() {
        assert_eq!(time_horizon(&sample_batch()), Some(4 + 5 + 3 + 1));
        assert_eq!(time_horizon(&[]), Some(0));
        assert_eq!(time_horizon(&[Process::new("P1", i64::MAX - 1, 1)]), Some(i64::MAX));
        assert_eq!(time_horizon(&[Process::new("P1", i64::MAX, 1)]), None);
    }

    #[test]
    fn test_validate_quantum() {
        assert!(validate_quantum(1).is_ok());
        let errors = validate_quantum(0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveQuantum);
        assert!(validate_quantum(-3).is_err());
    }
}
