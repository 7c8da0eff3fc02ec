//! Built-in selection rules.
//!
//! - **SJF**: shortest total burst
//! - **SRT**: shortest remaining burst
//! - **FIFO**: earliest arrival
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//!
//! # References
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use super::{RuleScore, SchedulingContext, SelectionRule};
use crate::models::Process;

/// Shortest Job First.
///
/// Orders by total burst duration. Used by the non-preemptive SJF driver,
/// where a selected job consumes its whole burst at once.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst_duration
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time.
///
/// Orders by ticks still required. Used by the tick-driven SJF-Priority
/// driver.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.remaining_burst
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// First In First Out.
///
/// Orders by arrival tick. Used to seed the Round-Robin ready queue.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl SelectionRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}
