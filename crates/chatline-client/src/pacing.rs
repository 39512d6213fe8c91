//! Reply pacing: how long a successful reply is held back before it is
//! shown, so answers don't appear instantaneously.

use std::time::Duration;

use rand::Rng;

/// Uniform delay window `[min, max)` in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyPacing {
    min_ms: u64,
    max_ms: u64,
}

impl ReplyPacing {
    /// Window `[min_ms, max_ms)`. A window with `max_ms <= min_ms`
    /// always yields `min_ms`.
    pub fn between(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self::between(0, 0)
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    /// Draw the delay for one reply.
    pub fn sample(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::thread_rng().gen_range(self.min_ms..self.max_ms))
    }
}

impl Default for ReplyPacing {
    fn default() -> Self {
        Self::between(1000, 2000)
    }
}
