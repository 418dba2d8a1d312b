use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

/// Time source used by [`Cooldown`]
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> Instant;

    /// Suspend the current task for the given duration
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by tokio's timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Enforces a minimum delay between consecutive external calls.
///
/// Invariant: after `wait` returns, at least `interval` has elapsed since
/// the previous `wait` returned. The first call goes through immediately.
pub struct Cooldown {
    interval: Duration,
    last_call: Option<Instant>,
    clock: Arc<dyn Clock>,
}

impl Cooldown {
    /// Create a cooldown with the given minimum inter-call interval
    pub fn new(interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            interval,
            last_call: None,
            clock,
        }
    }

    /// Wait until the interval since the previous call has elapsed,
    /// then mark the current call
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_call {
            let elapsed = self.clock.now().duration_since(last);
            if elapsed < self.interval {
                self.clock.sleep(self.interval - elapsed).await;
            }
        }
        self.last_call = Some(self.clock.now());
    }
}
