//! Driver configuration.

use serde::{Deserialize, Serialize};

/// Default number of ticks a run may continue past its batch horizon.
pub const DEFAULT_TICK_SLACK: i64 = 1_000;

/// Default Round-Robin quantum when none is given explicitly.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Settings shared by all simulation drivers.
///
/// # Example
/// ```
/// use u_cpu_schedule::scheduler::SimulationConfig;
///
/// let config: SimulationConfig = serde_json::from_str(r#"{"tick_slack": 500}"#).unwrap();
/// assert_eq!(config.tick_slack, 500);
/// assert_eq!(config.default_quantum, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ticks allowed past the batch horizon (latest arrival plus total
    /// burst) before a run still unfinished fails with `LogicalStall`.
    pub tick_slack: i64,
    /// Quantum used by `Algorithm::from_name("rr", ..)`.
    pub default_quantum: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_slack: DEFAULT_TICK_SLACK,
            default_quantum: DEFAULT_QUANTUM,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stall slack.
    pub fn with_tick_slack(mut self, tick_slack: i64) -> Self {
        self.tick_slack = tick_slack;
        self
    }

    /// Sets the default Round-Robin quantum.
    pub fn with_default_quantum(mut self, quantum: i64) -> Self {
        self.default_quantum = quantum;
        self
    }
}
