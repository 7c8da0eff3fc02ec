//! Process model.
//!
//! A process is the schedulable unit of work: a CPU burst that becomes
//! eligible at its arrival tick. The same type carries the mutable
//! simulation state every driver fills in, so all algorithms share one
//! representation.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Descriptor fields (`id`, `arrival_time`, `burst_duration`, `priority`)
/// are immutable during a run. State fields are skipped by serde on input
/// and are reset by each driver on its own working copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_duration: i64,
    /// Only read by the SJF-Priority driver, where it is the base
    /// subtracted from turnaround to obtain waiting time. It does not
    /// order dispatch anywhere.
    #[serde(default)]
    pub priority: i64,

    /// Ticks still required. Starts at `burst_duration`, ends at 0.
    #[serde(skip_deserializing)]
    pub remaining_burst: i64,
    /// Whether the process has finished.
    #[serde(skip_deserializing)]
    pub completed: bool,
    /// Tick at which the process finished.
    #[serde(skip_deserializing)]
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    #[serde(skip_deserializing)]
    pub turnaround_time: i64,
    /// Time spent ready but not running (algorithm-specific formula).
    #[serde(skip_deserializing)]
    pub waiting_time: i64,
}

impl Process {
    /// Creates a process with priority 0 and fresh simulation state.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_duration: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_duration,
            priority: 0,
            remaining_burst: burst_duration,
            completed: false,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Clears all simulation state and refills the remaining burst.
    pub fn reset(&mut self) {
        self.remaining_burst = self.burst_duration;
        self.completed = false;
        self.completion_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
    }

    /// Whether the process is eligible to run at `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }

    /// Records completion at `completion_time` and derives turnaround.
    ///
    /// Waiting time is left to the caller since its formula differs
    /// between algorithms.
    pub(crate) fn complete_at(&mut self, completion_time: i64) {
        self.remaining_burst = 0;
        self.completed = true;
        self.completion_time = completion_time;
        self.turnaround_time = completion_time - self.arrival_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_duration, 7);
        assert_eq!(p.priority, 2);
        assert_eq!(p.remaining_burst, 7);
        assert!(!p.completed);
    }

    #[test]
    fn test_process_reset() {
        let mut p = Process::new("P1", 0, 4);
        p.remaining_burst = 1;
        p.complete_at(9);
        p.waiting_time = 5;

        p.reset();
        assert_eq!(p.remaining_burst, 4);
        assert!(!p.completed);
        assert_eq!(p.completion_time, 0);
        assert_eq!(p.turnaround_time, 0);
        assert_eq!(p.waiting_time, 0);
    }

    #[test]
    fn test_complete_at() {
        let mut p = Process::new("P1", 2, 3);
        p.complete_at(10);
        assert!(p.completed);
        assert_eq!(p.remaining_burst, 0);
        assert_eq!(p.completion_time, 10);
        assert_eq!(p.turnaround_time, 8);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new("P1", 5, 1);
        assert!(!p.has_arrived(4));
        assert!(p.has_arrived(5));
        assert!(p.has_arrived(6));
    }

    #[test]
    fn test_deserialize_descriptor() {
        let json = r#"{"id": "P7", "arrival_time": 1, "burst_duration": 6}"#;
        let mut p: Process = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "P7");
        assert_eq!(p.priority, 0);
        // State is not part of the input format; drivers reset it.
        assert_eq!(p.remaining_burst, 0);
        p.reset();
        assert_eq!(p.remaining_burst, 6);
    }
}
