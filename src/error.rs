//! Simulation errors.

use std::fmt;

use crate::validation::ValidationError;

/// Result alias used by every driver.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Why a simulation run produced no outcome.
///
/// Runs are all-or-nothing: a failed run never returns partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The batch or the driver parameters failed validation.
    InvalidInput(Vec<ValidationError>),
    /// The tick bound was reached with processes still unfinished.
    LogicalStall {
        /// Driver that gave up.
        algorithm: &'static str,
        /// Simulated tick at which the run was aborted.
        tick: i64,
        /// Processes not yet completed.
        remaining: usize,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Self::LogicalStall {
                algorithm,
                tick,
                remaining,
            } => write!(
                f,
                "{algorithm} stalled at tick {tick} with {remaining} unfinished process(es)"
            ),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
