//! Round-Robin driver.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO ready queue with the processes present at t=0, in
//!    arrival order (list order on equal arrivals).
//! 2. Pop the head and run it for `min(quantum, remaining)` ticks.
//! 3. Enqueue every process that arrived up to the end of that run, in
//!    arrival order, then re-enqueue the run process if it is unfinished.
//! 4. With an empty queue and pending arrivals, the clock jumps to the
//!    next arrival.
//!
//! Waiting time is `turnaround - burst`, as for the non-preemptive
//! drivers.
//!
//! # Complexity
//! O(Σ ⌈burst / quantum⌉).

use std::collections::VecDeque;

use log::{debug, trace};

use super::{
    check_tick_bound, finish, prepare_batch_with_quantum, tick_limit, Scheduler,
    SimulationConfig, SimulationOutcome,
};
use crate::dispatching::arrival_order;
use crate::error::{SimulationError, SimulationResult};
use crate::models::{Process, Timeline};

/// Round-Robin with a fixed time quantum.
///
/// # Example
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{RoundRobinScheduler, Scheduler};
///
/// let batch = vec![Process::new("P1", 0, 3), Process::new("P2", 0, 2)];
/// let outcome = RoundRobinScheduler::new(2).simulate(&batch).unwrap();
/// assert_eq!(outcome.timeline.len(), 3);
/// assert_eq!(outcome.process("P1").unwrap().completion_time, 5);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    quantum: i64,
    config: SimulationConfig,
}

impl RoundRobinScheduler {
    /// Creates a driver with the given quantum.
    ///
    /// The quantum is checked when the simulation starts; a non-positive
    /// value fails with `InvalidInput`.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

/// Moves every pending process that arrived by `now` to the queue tail.
fn admit_pending(
    pending: &mut VecDeque<usize>,
    queue: &mut VecDeque<usize>,
    processes: &[Process],
    now: i64,
) {
    while let Some(&idx) = pending.front() {
        if !processes[idx].has_arrived(now) {
            break;
        }
        pending.pop_front();
        queue.push_back(idx);
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn simulate(&self, batch: &[Process]) -> SimulationResult<SimulationOutcome> {
        let mut processes = prepare_batch_with_quantum(batch, self.quantum)?;
        let mut timeline = Timeline::new();
        let mut pending: VecDeque<usize> = arrival_order(&processes).into();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut remaining = processes.len();
        let mut now: i64 = 0;
        let limit = tick_limit(&processes, self.config.tick_slack);

        admit_pending(&mut pending, &mut queue, &processes, now);

        while remaining > 0 {
            check_tick_bound(self.name(), now, limit, &processes)?;

            let Some(idx) = queue.pop_front() else {
                let Some(&next) = pending.front() else {
                    return Err(SimulationError::LogicalStall {
                        algorithm: self.name(),
                        tick: now,
                        remaining,
                    });
                };
                let arrival = processes[next].arrival_time;
                trace!("RR: idle from {now} to {arrival}");
                now = now.max(arrival);
                admit_pending(&mut pending, &mut queue, &processes, now);
                continue;
            };

            let start = now;
            let run = self.quantum.min(processes[idx].remaining_burst);
            now += run;

            let process = &mut processes[idx];
            process.remaining_burst -= run;
            debug!(
                "RR: dispatch {} at {} for {} ticks ({} remaining)",
                process.id, start, run, process.remaining_burst
            );
            timeline.record(&process.id, start, now);

            let finished = process.remaining_burst == 0;
            if finished {
                process.complete_at(now);
                process.waiting_time = process.turnaround_time - process.burst_duration;
                remaining -= 1;
            }

            admit_pending(&mut pending, &mut queue, &processes, now);
            if !finished {
                queue.push_back(idx);
            }
        }

        finish(self.name(), processes, timeline, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use crate::workload::{generate, WorkloadConfig};

    fn spans(outcome: &SimulationOutcome) -> Vec<(&str, i64, i64)> {
        outcome
            .timeline
            .iter()
            .map(|s| (s.process_id.as_str(), s.start, s.stop))
            .collect()
    }

    #[test]
    fn test_rr_classic_batch() {
        let batch = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 1),
        ];
        let outcome = RoundRobinScheduler::new(2).simulate(&batch).unwrap();

        assert_eq!(
            spans(&outcome),
            vec![
                ("P1", 0, 2),
                ("P2", 2, 4),
                ("P3", 4, 5),
                ("P1", 5, 7),
                ("P2", 7, 8),
                ("P1", 8, 9),
            ]
        );

        let p1 = outcome.process("P1").unwrap();
        assert_eq!((p1.completion_time, p1.turnaround_time, p1.waiting_time), (9, 9, 4));
        let p2 = outcome.process("P2").unwrap();
        assert_eq!((p2.completion_time, p2.turnaround_time, p2.waiting_time), (8, 7, 4));
        let p3 = outcome.process("P3").unwrap();
        assert_eq!((p3.completion_time, p3.turnaround_time, p3.waiting_time), (5, 3, 2));

        assert!((outcome.kpi.average_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((outcome.kpi.throughput - 3.0 / 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_rr_arrivals_queue_before_preempted_process() {
        // P2 arrives exactly when P1's quantum ends and must run next.
        let batch = vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)];
        let outcome = RoundRobinScheduler::new(2).simulate(&batch).unwrap();
        assert_eq!(
            spans(&outcome),
            vec![("P1", 0, 2), ("P2", 2, 4), ("P1", 4, 6)]
        );
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs_by_arrival() {
        let batch = vec![
            Process::new("late", 3, 2),
            Process::new("early", 0, 4),
        ];
        let outcome = RoundRobinScheduler::new(10).simulate(&batch).unwrap();
        assert_eq!(spans(&outcome), vec![("early", 0, 4), ("late", 4, 6)]);
        assert_eq!(outcome.process("late").unwrap().waiting_time, 1);
    }

    #[test]
    fn test_rr_simultaneous_arrivals_list_order() {
        let batch = vec![
            Process::new("B", 0, 1),
            Process::new("A", 0, 1),
            Process::new("C", 0, 1),
        ];
        let outcome = RoundRobinScheduler::new(1).simulate(&batch).unwrap();
        assert_eq!(outcome.timeline.dispatch_order(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_rr_idle_gap() {
        let batch = vec![Process::new("P1", 0, 1), Process::new("P2", 5, 2)];
        let outcome = RoundRobinScheduler::new(4).simulate(&batch).unwrap();
        assert_eq!(spans(&outcome), vec![("P1", 0, 1), ("P2", 5, 7)]);
        assert_eq!(outcome.elapsed(), 7);
        assert_eq!(outcome.process("P2").unwrap().waiting_time, 0);
    }

    #[test]
    fn test_rr_first_arrival_after_zero() {
        let batch = vec![Process::new("P1", 3, 3)];
        let outcome = RoundRobinScheduler::new(2).simulate(&batch).unwrap();
        assert_eq!(spans(&outcome), vec![("P1", 3, 5), ("P1", 5, 6)]);
    }

    #[test]
    fn test_rr_slices_bounded_by_quantum() {
        for seed in 0..20 {
            let config = WorkloadConfig::default().with_count(12).with_seed(seed);
            let batch = generate(&config);
            let quantum = (seed as i64 % 4) + 1;
            let outcome = RoundRobinScheduler::new(quantum).simulate(&batch).unwrap();

            for slice in &outcome.timeline {
                assert!(slice.duration() > 0);
                assert!(slice.duration() <= quantum);
            }
            for p in &batch {
                let count = outcome.timeline.slices_for(&p.id).len() as i64;
                if p.burst_duration <= quantum {
                    assert_eq!(count, 1);
                } else {
                    assert_eq!(count, (p.burst_duration + quantum - 1) / quantum);
                }
            }
            assert_eq!(outcome.timeline.busy_time(), outcome.kpi.total_burst);
            assert!(outcome.kpi.total_burst <= outcome.last_completion());
        }
    }

    #[test]
    fn test_rr_rejects_non_positive_quantum() {
        let batch = vec![Process::new("P1", 0, 1)];
        match RoundRobinScheduler::new(0).simulate(&batch).unwrap_err() {
            SimulationError::InvalidInput(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveQuantum);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Batch and quantum problems are reported together.
        match RoundRobinScheduler::new(-1).simulate(&[]).unwrap_err() {
            SimulationError::InvalidInput(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rr_finishes_within_zero_slack() {
        let config = SimulationConfig::new().with_tick_slack(0);
        let batch = vec![Process::new("P1", 0, 10), Process::new("P2", 2_000_000, 3)];
        let outcome = RoundRobinScheduler::new(3)
            .with_config(config)
            .simulate(&batch)
            .unwrap();
        assert_eq!(outcome.process("P1").unwrap().completion_time, 10);
        assert_eq!(outcome.process("P2").unwrap().completion_time, 2_000_003);
        assert_eq!(outcome.timeline.len(), 5);
    }
}
