//! Minimum-interval rate limiter for outbound requests
//!
//! One instance is shared (via `Arc`) by everything that talks to the results
//! site. Each caller reserves its start slot while holding the lock and only
//! then sleeps, so slow in-flight requests never shrink the spacing of
//! requests queued behind them.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{self, Instant};
use tracing::debug;

/// Enforces a minimum interval between the starts of gated calls
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_start: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_start: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until the caller may start its request, returning the reserved start
    ///
    /// The reservation is recorded before waiting, so concurrent callers are
    /// handed strictly increasing slots at least `min_interval` apart.
    pub async fn acquire(&self) -> Instant {
        let start = {
            let mut last_start = self.last_start.lock().await;
            let now = Instant::now();
            let start = match *last_start {
                Some(previous) => now.max(previous + self.min_interval),
                None => now,
            };
            *last_start = Some(start);
            start
        };

        let wait = start.saturating_duration_since(Instant::now());
        if !wait.is_zero() {
            debug!("Rate limiter delaying request by {}ms", wait.as_millis());
            time::sleep_until(start).await;
        }
        start
    }
}
