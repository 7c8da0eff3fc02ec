//! Ready-set selection for the simulation drivers.
//!
//! Provides the ordering rules (shortest burst, shortest remaining burst,
//! arrival order) and the pure functions that apply them to a pool of
//! unfinished processes at a given tick.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::dispatching::{rules, select_next, SchedulingContext};
//! use u_cpu_schedule::models::Process;
//!
//! let pool = vec![Process::new("P1", 0, 5), Process::new("P2", 0, 3)];
//! let ctx = SchedulingContext::at_time(0);
//! assert_eq!(select_next(&pool, &[0, 1], &rules::ShortestBurst, &ctx), Some(1));
//! ```

mod context;
mod ready_set;
pub mod rules;

pub use context::SchedulingContext;
pub use ready_set::{admit_arrivals, arrival_order, select_next, sort_by_rule};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first. Integer ticks keep comparisons exact.
pub type RuleScore = i64;

/// A rule that orders ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Equal scores are resolved by the
/// caller's scan order, never by the rule itself.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRT").
    fn name(&self) -> &'static str;

    /// Scores a process at the current simulation time.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
