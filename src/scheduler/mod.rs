//! Simulation drivers and KPI evaluation.
//!
//! One driver per policy, all behind the [`Scheduler`] capability:
//!
//! | Driver | Policy | Preemptive |
//! |--------|--------|------------|
//! | [`FcfsScheduler`] | list order | no |
//! | [`SjfScheduler`] | shortest burst among arrived | no |
//! | [`SjfPriorityScheduler`] | shortest remaining burst, tick-driven | between completions only |
//! | [`RoundRobinScheduler`] | FIFO with fixed quantum | yes |
//!
//! Every driver validates the batch, clones it into a private working
//! copy and mutates only that copy, so one batch can be fed to several
//! drivers in a row.
//!
//! # KPI
//!
//! [`ScheduleKpi`] computes average waiting, average turnaround,
//! throughput and CPU utilization from the finished records.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

mod config;
mod fcfs;
mod kpi;
mod outcome;
mod round_robin;
mod sjf;
mod sjf_priority;

pub use config::{SimulationConfig, DEFAULT_QUANTUM, DEFAULT_TICK_SLACK};
pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleKpi;
pub use outcome::SimulationOutcome;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;
pub use sjf_priority::SjfPriorityScheduler;

use std::fmt::Debug;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, SimulationResult};
use crate::models::{Process, Timeline};
use crate::validation::{time_horizon, validate_batch, validate_quantum};

/// A scheduling policy that can simulate a process batch.
///
/// Implementations never mutate `batch`; they work on their own copy.
pub trait Scheduler: Debug {
    /// Policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Runs the batch to completion.
    ///
    /// # Errors
    /// `InvalidInput` for a batch that fails validation, `LogicalStall`
    /// when the run outlives the batch horizon plus the configured slack.
    fn simulate(&self, batch: &[Process]) -> SimulationResult<SimulationOutcome>;
}

/// The available policies, as data.
///
/// # Example
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{Algorithm, SimulationConfig};
///
/// let batch = vec![Process::new("P1", 0, 5), Process::new("P2", 0, 3)];
/// let outcome = Algorithm::Fcfs.run(&batch, &SimulationConfig::default()).unwrap();
/// assert!((outcome.kpi.average_waiting - 2.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Tick-driven shortest-remaining-burst with priority-based waiting.
    SjfPriority,
    /// Round-Robin with a fixed quantum.
    RoundRobin {
        /// Ticks per dispatch.
        quantum: i64,
    },
}

impl Algorithm {
    /// Parses a policy name (`fcfs`, `sjf`, `sjf-priority`, `rr`,
    /// `round-robin`, case-insensitive). Round-Robin takes
    /// `config.default_quantum`.
    pub fn from_name(name: &str, config: &SimulationConfig) -> Option<Self> {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "fcfs" => Some(Self::Fcfs),
            "sjf" => Some(Self::Sjf),
            "sjf-priority" | "sjfp" => Some(Self::SjfPriority),
            "rr" | "round-robin" => Some(Self::RoundRobin {
                quantum: config.default_quantum,
            }),
            _ => None,
        }
    }

    /// Builds the driver for this policy.
    pub fn scheduler(&self, config: &SimulationConfig) -> Box<dyn Scheduler> {
        match *self {
            Self::Fcfs => Box::new(FcfsScheduler::new()),
            Self::Sjf => Box::new(SjfScheduler::new().with_config(config.clone())),
            Self::SjfPriority => Box::new(SjfPriorityScheduler::new().with_config(config.clone())),
            Self::RoundRobin { quantum } => {
                Box::new(RoundRobinScheduler::new(quantum).with_config(config.clone()))
            }
        }
    }

    /// Simulates `batch` under this policy.
    pub fn run(
        &self,
        batch: &[Process],
        config: &SimulationConfig,
    ) -> SimulationResult<SimulationOutcome> {
        self.scheduler(config).simulate(batch)
    }
}

/// Runs every policy in `algorithms` over the same batch.
///
/// Each run gets its own copy of the batch. Fails on the first policy
/// that fails; no partial list is returned.
pub fn run_all(
    batch: &[Process],
    algorithms: &[Algorithm],
    config: &SimulationConfig,
) -> SimulationResult<Vec<SimulationOutcome>> {
    algorithms
        .iter()
        .map(|algorithm| algorithm.run(batch, config))
        .collect()
}

/// Validates `batch` and returns a fresh working copy in input order.
pub(crate) fn prepare_batch(batch: &[Process]) -> SimulationResult<Vec<Process>> {
    validate_batch(batch)?;
    let mut processes = batch.to_vec();
    for p in &mut processes {
        p.reset();
    }
    Ok(processes)
}

/// Like [`prepare_batch`], also checking a Round-Robin quantum.
pub(crate) fn prepare_batch_with_quantum(
    batch: &[Process],
    quantum: i64,
) -> SimulationResult<Vec<Process>> {
    let mut errors = Vec::new();
    if let Err(mut e) = validate_batch(batch) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_quantum(quantum) {
        errors.append(&mut e);
    }
    if !errors.is_empty() {
        return Err(SimulationError::InvalidInput(errors));
    }
    prepare_batch(batch)
}

/// Last tick a run over `processes` may reach before it counts as stalled.
///
/// Every process has finished by the batch horizon (latest arrival plus
/// total burst), so only `slack` ticks beyond it are tolerated.
pub(crate) fn tick_limit(processes: &[Process], slack: i64) -> i64 {
    time_horizon(processes)
        .unwrap_or(i64::MAX)
        .saturating_add(slack.max(0))
}

/// Fails with `LogicalStall` once `now` passes `limit`.
pub(crate) fn check_tick_bound(
    algorithm: &'static str,
    now: i64,
    limit: i64,
    processes: &[Process],
) -> SimulationResult<()> {
    if now <= limit {
        return Ok(());
    }
    let remaining = processes.iter().filter(|p| !p.completed).count();
    warn!("{algorithm}: aborted at tick {now} with {remaining} unfinished process(es)");
    Err(SimulationError::LogicalStall {
        algorithm,
        tick: now,
        remaining,
    })
}

/// Packages a finished run. `elapsed` is the driver's final clock.
pub(crate) fn finish(
    algorithm: &'static str,
    processes: Vec<Process>,
    timeline: Timeline,
    elapsed: i64,
) -> SimulationResult<SimulationOutcome> {
    let kpi = ScheduleKpi::calculate(&processes, &timeline, elapsed)?;
    info!(
        "{algorithm}: {} process(es) finished in {} ticks (avg wait {:.2}, avg turnaround {:.2})",
        kpi.process_count, kpi.elapsed, kpi.average_waiting, kpi.average_turnaround
    );
    Ok(SimulationOutcome {
        algorithm: algorithm.to_string(),
        processes,
        timeline,
        kpi,
    })
}
