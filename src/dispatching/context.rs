//! Scheduling context for selection rule evaluation.

/// Runtime scheduling state passed to selection rules.
///
/// All times are in ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given tick.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }

    /// Moves the context clock forward by `ticks`.
    pub fn advance(&mut self, ticks: i64) {
        self.current_time += ticks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_advance() {
        let mut ctx = SchedulingContext::at_time(3);
        ctx.advance(4);
        assert_eq!(ctx.current_time, 7);
        assert_eq!(SchedulingContext::default().current_time, 0);
    }
}
