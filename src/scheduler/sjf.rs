//! Shortest-Job-First, non-preemptive driver.
//!
//! # Algorithm
//!
//! 1. Order a working pool by arrival time (stable on list order).
//! 2. At each dispatch point, pick the arrived process with the smallest
//!    burst; ties go to the first one in pool order.
//! 3. If nothing has arrived, the CPU idles for one tick.
//! 4. The selected process runs its whole burst, then leaves the pool.
//!
//! # Complexity
//! O(n² + idle ticks).

use log::{debug, trace};

use super::{
    check_tick_bound, finish, prepare_batch, tick_limit, Scheduler, SimulationConfig,
    SimulationOutcome,
};
use crate::dispatching::{arrival_order, rules::ShortestBurst, select_next, SchedulingContext};
use crate::error::SimulationResult;
use crate::models::{Process, Timeline};

/// Shortest-Job-First, non-preemptive.
///
/// # Example
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{Scheduler, SjfScheduler};
///
/// let batch = vec![Process::new("2", 0, 3), Process::new("1", 0, 5)];
/// let outcome = SjfScheduler::new().simulate(&batch).unwrap();
/// assert_eq!(outcome.process("2").unwrap().completion_time, 3);
/// assert_eq!(outcome.process("1").unwrap().waiting_time, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SjfScheduler {
    config: SimulationConfig,
}

impl SjfScheduler {
    /// Creates a driver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}

impl Scheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn simulate(&self, batch: &[Process]) -> SimulationResult<SimulationOutcome> {
        let mut processes = prepare_batch(batch)?;
        let mut timeline = Timeline::new();
        let mut pool = arrival_order(&processes);
        let mut ctx = SchedulingContext::at_time(0);
        let limit = tick_limit(&processes, self.config.tick_slack);

        while !pool.is_empty() {
            check_tick_bound(self.name(), ctx.current_time, limit, &processes)?;

            let Some(pos) = select_next(&processes, &pool, &ShortestBurst, &ctx) else {
                trace!("SJF: idle at {}", ctx.current_time);
                ctx.advance(1);
                continue;
            };

            let idx = pool.remove(pos);
            let now = ctx.current_time;
            let process = &mut processes[idx];

            let waiting = (now - process.arrival_time).max(0);
            process.complete_at(process.burst_duration + now);
            process.waiting_time = waiting;

            debug!(
                "SJF: dispatch {} at {} for {} ticks (waited {})",
                process.id, now, process.burst_duration, waiting
            );
            timeline.record(&process.id, now, process.completion_time);
            ctx.advance(process.burst_duration);
        }

        finish(self.name(), processes, timeline, ctx.current_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_reversed_pair() {
        let batch = vec![
            Process::new("2", 0, 3).with_priority(1),
            Process::new("1", 0, 5).with_priority(1),
        ];
        let outcome = SjfScheduler::new().simulate(&batch).unwrap();

        let p2 = outcome.process("2").unwrap();
        assert_eq!(p2.waiting_time, 0);
        assert_eq!(p2.completion_time, 3);

        let p1 = outcome.process("1").unwrap();
        assert_eq!(p1.waiting_time, 3);
        assert_eq!(p1.turnaround_time, 8);
        assert_eq!(p1.completion_time, 8);
    }

    #[test]
    fn test_sjf_picks_shorter_regardless_of_list_order() {
        let batch = vec![Process::new("1", 0, 5), Process::new("2", 0, 3)];
        let outcome = SjfScheduler::new().simulate(&batch).unwrap();
        assert_eq!(outcome.timeline.dispatch_order(), vec!["2", "1"]);
        // Table rows stay in input order.
        assert_eq!(outcome.processes[0].id, "1");
    }

    #[test]
    fn test_sjf_shorter_job_waits_for_its_arrival() {
        // At t=0 only "long" has arrived; it is not preempted when "short"
        // shows up, and "short" beats "mid" at the next dispatch point.
        let batch = vec![
            Process::new("long", 0, 6),
            Process::new("mid", 1, 4),
            Process::new("short", 2, 1),
        ];
        let outcome = SjfScheduler::new().simulate(&batch).unwrap();
        assert_eq!(outcome.timeline.dispatch_order(), vec!["long", "short", "mid"]);

        let short = outcome.process("short").unwrap();
        assert_eq!(short.completion_time, 7);
        assert_eq!(short.waiting_time, 4);

        let mid = outcome.process("mid").unwrap();
        assert_eq!(mid.completion_time, 11);
        assert_eq!(mid.waiting_time, 6);
    }

    #[test]
    fn test_sjf_idle_ticks() {
        let batch = vec![Process::new("P1", 3, 2), Process::new("P2", 8, 1)];
        let outcome = SjfScheduler::new().simulate(&batch).unwrap();

        let spans: Vec<(i64, i64)> = outcome.timeline.iter().map(|s| (s.start, s.stop)).collect();
        assert_eq!(spans, vec![(3, 5), (8, 9)]);
        assert_eq!(outcome.process("P1").unwrap().waiting_time, 0);
        assert_eq!(outcome.elapsed(), 9);
        assert!((outcome.kpi.throughput - 2.0 / 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_tie_goes_to_earlier_arrival_order() {
        let batch = vec![
            Process::new("late", 1, 2),
            Process::new("B", 0, 4),
            Process::new("A", 0, 2),
            Process::new("C", 0, 2),
        ];
        let outcome = SjfScheduler::new().simulate(&batch).unwrap();
        // A and C tie at t=0: A precedes C in the arrival-sorted pool.
        // At t=2 "late" ties with C and sorts after it.
        assert_eq!(outcome.timeline.dispatch_order(), vec!["A", "C", "late", "B"]);
    }

    #[test]
    fn test_sjf_busy_time_within_makespan() {
        let batch = vec![
            Process::new("P1", 0, 3),
            Process::new("P2", 4, 2),
            Process::new("P3", 4, 5),
        ];
        let outcome = SjfScheduler::new().simulate(&batch).unwrap();
        assert!(outcome.kpi.total_burst <= outcome.last_completion());
        assert_eq!(outcome.timeline.busy_time(), outcome.kpi.total_burst);
    }

    #[test]
    fn test_sjf_idles_to_late_arrival_without_slack() {
        let config = SimulationConfig::new().with_tick_slack(0);
        let batch = vec![Process::new("P1", 10, 1)];
        let outcome = SjfScheduler::new()
            .with_config(config)
            .simulate(&batch)
            .unwrap();
        assert_eq!(outcome.process("P1").unwrap().completion_time, 11);
        assert_eq!(outcome.elapsed(), 11);
    }
}
