//! SJF-Priority driver: tick-driven shortest-remaining-burst.
//!
//! # Algorithm
//!
//! At every tick `t`:
//! 1. Admit each unfinished, arrived, non-active process into the waiting
//!    set once (deduplicated on identity).
//! 2. Stable-sort the waiting set by remaining burst.
//! 3. If the CPU is free, the head of the waiting set becomes active.
//! 4. The active process consumes one tick. On its last tick it completes
//!    at `t + 1` with `waiting = turnaround - priority`.
//!
//! A running process is never displaced by a shorter arrival: selection
//! only happens when the active slot is vacated. This is a simplified
//! SRTF that re-dispatches between completions only.
//!
//! # Waiting time
//!
//! `priority` is read as the amount of time already credited to the
//! process, so `waiting = turnaround - priority`, not `- burst`. With a
//! priority larger than the turnaround the reported waiting time is
//! negative.
//!
//! # Complexity
//! O(T · n log n) for T simulated ticks.

use log::{debug, trace};

use super::{
    check_tick_bound, finish, prepare_batch, tick_limit, Scheduler, SimulationConfig,
    SimulationOutcome,
};
use crate::dispatching::{
    admit_arrivals, rules::ShortestRemaining, sort_by_rule, SchedulingContext,
};
use crate::error::SimulationResult;
use crate::models::{Process, Timeline};

/// Tick-driven shortest-remaining-burst with priority-credited waiting.
#[derive(Debug, Clone, Default)]
pub struct SjfPriorityScheduler {
    config: SimulationConfig,
}

impl SjfPriorityScheduler {
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

impl Scheduler for SjfPriorityScheduler {
    fn name(&self) -> &'static str {
        "SJF-Priority"
    }

    fn simulate(&self, batch: &[Process]) -> SimulationResult<SimulationOutcome> {
        let mut processes = prepare_batch(batch)?;
        let mut timeline = Timeline::new();
        let mut waiting: Vec<usize> = Vec::new();
        let mut active: Option<usize> = None;
        let mut slice_start: i64 = 0;
        let mut remaining = processes.len();
        let mut ctx = SchedulingContext::at_time(0);
        let limit = tick_limit(&processes, self.config.tick_slack);

        while remaining > 0 {
            check_tick_bound(self.name(), ctx.current_time, limit, &processes)?;
            let now = ctx.current_time;

            if admit_arrivals(&processes, now, active, &mut waiting) > 0 {
                trace!("SJF-Priority: {} waiting at {now}", waiting.len());
            }
            sort_by_rule(&mut waiting, &processes, &ShortestRemaining, &ctx);

            if active.is_none() && !waiting.is_empty() {
                let idx = waiting.remove(0);
                debug!(
                    "SJF-Priority: dispatch {} at {} ({} ticks remaining)",
                    processes[idx].id, now, processes[idx].remaining_burst
                );
                active = Some(idx);
                slice_start = now;
            }

            let Some(idx) = active else {
                trace!("SJF-Priority: idle at {now}");
                ctx.advance(1);
                continue;
            };

            let process = &mut processes[idx];
            process.remaining_burst -= 1;
            trace!(
                "SJF-Priority: {} ran tick {now}, {} remaining",
                process.id, process.remaining_burst
            );

            if process.remaining_burst == 0 {
                process.complete_at(now + 1);
                process.waiting_time = process.turnaround_time - process.priority;
                timeline.record(&process.id, slice_start, now + 1);
                remaining -= 1;
                active = None;
            }

            ctx.advance(1);
        }

        finish(self.name(), processes, timeline, ctx.current_time)
    }
}
