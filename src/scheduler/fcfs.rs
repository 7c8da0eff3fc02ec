//! First-Come-First-Served driver.
//!
//! # Algorithm
//!
//! 1. Dispatch processes in list order. "First come" means first listed;
//!    the batch is not sorted by arrival.
//! 2. The first process never waits. Every later one waits
//!    `max(0, service_clock - arrival)`.
//! 3. Each process runs its whole burst; the service clock advances by the
//!    burst only.
//!
//! Idle gaps between the service clock and a later arrival are not
//! modelled: the clock is not moved forward to the arrival, so a process
//! listed after a late arrival is measured against the burst-only clock.
//!
//! Throughput is measured over the completion time of the last process
//! dispatched, which is not always the latest completion.
//!
//! # Complexity
//! O(n).

use log::debug;

use super::{finish, prepare_batch, Scheduler, SimulationOutcome};
use crate::error::SimulationResult;
use crate::models::{Process, Timeline};

/// First-Come-First-Served, non-preemptive.
///
/// # Example
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{FcfsScheduler, Scheduler};
///
/// let batch = vec![
///     Process::new("1", 0, 5).with_priority(1),
///     Process::new("2", 0, 3).with_priority(1),
/// ];
/// let outcome = FcfsScheduler::new().simulate(&batch).unwrap();
/// assert_eq!(outcome.process("2").unwrap().waiting_time, 5);
/// assert_eq!(outcome.process("2").unwrap().completion_time, 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new driver.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn simulate(&self, batch: &[Process]) -> SimulationResult<SimulationOutcome> {
        let mut processes = prepare_batch(batch)?;
        let mut timeline = Timeline::new();
        let mut service_clock: i64 = 0;
        let mut last_completion: i64 = 0;

        for (i, process) in processes.iter_mut().enumerate() {
            let waiting = if i == 0 {
                0
            } else {
                (service_clock - process.arrival_time).max(0)
            };
            let start = process.arrival_time + waiting;
            service_clock += process.burst_duration;

            process.complete_at(process.burst_duration + process.arrival_time + waiting);
            process.waiting_time = waiting;
            last_completion = process.completion_time;

            debug!(
                "FCFS: dispatch {} at {} for {} ticks (waited {})",
                process.id, start, process.burst_duration, waiting
            );
            timeline.record(&process.id, start, process.completion_time);
        }

        finish(self.name(), processes, timeline, last_completion)
    }
}
