//! Random process batches.
//!
//! Produces reproducible batches for benchmarks, demos and randomized
//! tests. The same [`WorkloadConfig`] (including its seed) always yields
//! the same batch.
//!
//! Bounds are clamped so the output always passes batch validation:
//! bursts are at least 1, arrivals and priorities at least 0.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Parameters for [`generate`].
///
/// # Example
/// ```
/// use u_cpu_schedule::workload::{generate, WorkloadConfig};
///
/// let config = WorkloadConfig::default().with_count(3).with_seed(7);
/// let batch = generate(&config);
/// assert_eq!(batch.len(), 3);
/// assert_eq!(batch[2].id, "P3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival tick (inclusive).
    pub max_arrival: i64,
    /// Shortest burst (inclusive).
    pub min_burst: i64,
    /// Longest burst (inclusive).
    pub max_burst: i64,
    /// Largest priority value (inclusive).
    pub max_priority: i64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
            seed: 42,
        }
    }
}

impl WorkloadConfig {
    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generates a batch from a `StdRng` seeded with `config.seed`.
pub fn generate(config: &WorkloadConfig) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    generate_with_rng(config, &mut rng)
}

/// Generates a batch from a caller-supplied RNG. `config.seed` is ignored.
pub fn generate_with_rng<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<Process> {
    let max_arrival = config.max_arrival.max(0);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);
    let max_priority = config.max_priority.max(0);

    (1..=config.count)
        .map(|n| {
            Process::new(
                format!("P{n}"),
                rng.random_range(0..=max_arrival),
                rng.random_range(min_burst..=max_burst),
            )
            .with_priority(rng.random_range(0..=max_priority))
        })
        .collect()
}
