//! Schedule quality metrics (KPIs).
//!
//! Computes the standard uniprocessor performance indicators from the
//! final per-process records of a run. Every value is a fold over the
//! finished records, computed once after the simulation ends.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Waiting | Σ waiting / n |
//! | Average Turnaround | Σ (completion - arrival) / n |
//! | Throughput | n / elapsed |
//! | Makespan | Latest completion time |
//! | CPU Utilization | Busy ticks in the timeline / makespan |
//!
//! `elapsed` is the driver's clock when the run ended. For FCFS that is
//! the completion of the last dispatched process, which can be earlier
//! than the makespan when a late arrival is listed first.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, SimulationResult};
use crate::models::{Process, Timeline};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Schedule performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of processes measured.
    pub process_count: usize,
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Throughput denominator: the driver's final clock.
    pub elapsed: i64,
    /// Sum of burst durations.
    pub total_burst: i64,
    /// Fraction of the makespan the timeline shows the CPU busy (0.0..=1.0).
    pub cpu_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from finished process records, their timeline and the
    /// elapsed ticks of the run.
    ///
    /// # Errors
    /// `InvalidInput` when `processes` is empty, a record is unfinished or
    /// `elapsed` is not positive. Averages over nothing are refused rather
    /// than reported as NaN.
    pub fn calculate(
        processes: &[Process],
        timeline: &Timeline,
        elapsed: i64,
    ) -> SimulationResult<Self> {
        if processes.is_empty() {
            return Err(SimulationError::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::EmptyBatch,
                "Cannot compute metrics for an empty batch",
            )]));
        }

        let unfinished: Vec<ValidationError> = processes
            .iter()
            .filter(|p| !p.completed)
            .map(|p| {
                ValidationError::new(
                    ValidationErrorKind::IncompleteRecord,
                    format!("Process '{}' has not completed", p.id),
                )
            })
            .collect();
        if !unfinished.is_empty() {
            return Err(SimulationError::InvalidInput(unfinished));
        }

        if elapsed <= 0 {
            return Err(SimulationError::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::IncompleteRecord,
                format!("Cannot compute throughput over {elapsed} elapsed ticks"),
            )]));
        }
        let makespan = processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0);
        let cpu_utilization = if makespan > 0 {
            timeline.busy_time() as f64 / makespan as f64
        } else {
            0.0
        };

        let count = processes.len() as f64;
        let total_waiting: i64 = processes.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: i64 = processes.iter().map(|p| p.turnaround_time).sum();
        let total_burst: i64 = processes.iter().map(|p| p.burst_duration).sum();

        Ok(Self {
            process_count: processes.len(),
            average_waiting: total_waiting as f64 / count,
            average_turnaround: total_turnaround as f64 / count,
            throughput: count / elapsed as f64,
            makespan,
            elapsed,
            total_burst,
            cpu_utilization,
        })
    }
}
