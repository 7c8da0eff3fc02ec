//! Result of one simulation run.

use serde::Serialize;

use super::ScheduleKpi;
use crate::models::{Process, Timeline};

/// Everything a driver produces for one batch.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    /// Name of the driver that produced this outcome.
    pub algorithm: String,
    /// Final per-process records, in the caller's input order.
    pub processes: Vec<Process>,
    /// Execution intervals in dispatch order.
    pub timeline: Timeline,
    /// Aggregate statistics.
    pub kpi: ScheduleKpi,
}

impl SimulationOutcome {
    /// Finds the record of a process by id.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Simulated ticks used as the throughput denominator.
    pub fn elapsed(&self) -> i64 {
        self.kpi.elapsed
    }

    /// Latest completion across all processes.
    pub fn last_completion(&self) -> i64 {
        self.kpi.makespan
    }
}
