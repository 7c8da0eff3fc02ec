//! Uniprocessor CPU-scheduling simulator.
//!
//! Runs a batch of processes through a scheduling policy on a single
//! simulated CPU and reports per-process waiting, turnaround and
//! completion times, an execution timeline and aggregate KPIs.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `TimeSlice`
//! - **`validation`**: Batch integrity checks (empty batch, duplicate IDs,
//!   non-positive bursts, negative arrivals, quantum)
//! - **`dispatching`**: Selection rules and ready-set helpers shared by the
//!   drivers
//! - **`scheduler`**: FCFS, SJF, SJF-Priority and Round-Robin drivers, KPIs
//! - **`report`**: Plain-text title, Gantt chart and results table
//! - **`workload`**: Seeded random batches
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::models::Process;
//! use u_cpu_schedule::scheduler::{run_all, Algorithm, SimulationConfig};
//!
//! let batch = vec![
//!     Process::new("P1", 0, 5).with_priority(1),
//!     Process::new("P2", 0, 3).with_priority(1),
//! ];
//! let algorithms = [Algorithm::Fcfs, Algorithm::Sjf];
//! let outcomes = run_all(&batch, &algorithms, &SimulationConfig::default()).unwrap();
//!
//! assert!((outcomes[0].kpi.average_waiting - 2.5).abs() < 1e-10);
//! assert!((outcomes[1].kpi.average_waiting - 1.5).abs() < 1e-10);
//! ```
//!
//! # Logging
//!
//! Drivers emit diagnostics through the `log` facade. The crate never
//! installs a logger.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{SimulationError, SimulationResult};
