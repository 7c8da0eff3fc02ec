//! Timeline (Gantt chart) model.
//!
//! A timeline is the ordered list of execution intervals a driver
//! produced, in dispatch order. It says nothing about idle time other
//! than by the gaps between slices.

use serde::{Deserialize, Serialize};

/// The execution history of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order.
    pub slices: Vec<TimeSlice>,
}

/// A process running uninterrupted over `[start, stop)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Running process.
    pub process_id: String,
    /// First tick of the interval.
    pub start: i64,
    /// Tick after the last one of the interval.
    pub stop: i64,
}

impl TimeSlice {
    /// Creates a new slice.
    pub fn new(process_id: impl Into<String>, start: i64, stop: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            stop,
        }
    }

    /// Length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice for `process_id` over `[start, stop)`.
    pub fn record(&mut self, process_id: &str, start: i64, stop: i64) {
        self.slices.push(TimeSlice::new(process_id, start, stop));
    }

    /// Whether no slice was recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Iterates slices in dispatch order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeSlice> {
        self.slices.iter()
    }

    /// Latest stop tick across all slices (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.stop).max().unwrap_or(0)
    }

    /// Total ticks the CPU spent running something.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(TimeSlice::duration).sum()
    }

    /// All slices of one process, in dispatch order.
    pub fn slices_for(&self, process_id: &str) -> Vec<&TimeSlice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Process ids in the order they were first dispatched.
    pub fn dispatch_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = Vec::new();
        for s in &self.slices {
            if !order.contains(&s.process_id.as_str()) {
                order.push(&s.process_id);
            }
        }
        order
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimeSlice;
    type IntoIter = std::slice::Iter<'a, TimeSlice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}
