use std::time::Duration;

/// Accumulates frame time and fires one gravity tick per elapsed interval.
#[derive(Clone, Debug)]
pub struct TickTimer {
    interval: Duration,
    accumulated: Duration,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Adds `dt` and reports whether a tick is due. At most one tick fires per
    /// call; the remainder past the interval carries over.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.accumulated += dt;
        if self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
