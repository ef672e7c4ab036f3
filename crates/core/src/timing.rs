//! Gravity timer.
//!
//! The host hands in timestamps at whatever cadence it renders; the timer
//! turns them into drop steps. It is level-triggered: once the accumulated
//! time is strictly greater than the interval a single step is due.

/// Accumulates elapsed time between drop steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u64,
    accumulated_ms: u64,
    last_ms: u64,
}

impl DropTimer {
    /// `interval_ms` must be positive; the config layer checks that.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            accumulated_ms: 0,
            last_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn accumulated_ms(&self) -> u64 {
        self.accumulated_ms
    }

    /// Feed a timestamp. Returns true when a drop step is due.
    ///
    /// Time that passes while not `running` is discarded. A timestamp older
    /// than the previous one counts as no time at all.
    pub fn advance(&mut self, now_ms: u64, running: bool) -> bool {
        let delta = now_ms.saturating_sub(self.last_ms);
        self.last_ms = now_ms;
        if !running {
            return false;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(delta);
        self.accumulated_ms > self.interval_ms
    }

    /// Start a fresh interval (called after every drop step).
    pub fn restart(&mut self) {
        self.accumulated_ms = 0;
    }
}
