//! Elapsed-time ticker.

use gloo_timers::callback::Interval;

use crate::orchestrator::AttemptId;

/// Repeating tick owned by one attempt. Dropping it cancels the interval.
pub struct TickTimer {
    attempt: AttemptId,
    _interval: Interval,
}

impl TickTimer {
    pub fn start(attempt: AttemptId, period_ms: u32, on_tick: impl FnMut() + 'static) -> Self {
        log::debug!("Starting timer for attempt {}", attempt);
        Self {
            attempt,
            _interval: Interval::new(period_ms, on_tick),
        }
    }

    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        log::debug!("Stopping timer for attempt {}", self.attempt);
    }
}
