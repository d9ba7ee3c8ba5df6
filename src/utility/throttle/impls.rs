// Standard library
use std::collections::VecDeque;
use std::sync::Arc;

// 3rd party crates
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::time::{sleep, Duration, Instant};
use tracing::{debug, trace};

// Current module imports
use super::types::{PendingTurn, QueueThrottler, ThrottleState, ThrottleTicket};

impl QueueThrottler {
    /// Creates a throttler allowing `rate_limit` completions per second.
    pub fn new(rate_limit: u32) -> Self {
        Self::with_interval(Duration::from_secs(1) / rate_limit.max(1))
    }

    /// Creates a throttler with an explicit minimum interval between completions.
    pub fn with_interval(sleep_time: Duration) -> Self {
        Self {
            sleep_time,
            state: Arc::new(Mutex::new(ThrottleState {
                last_run: Instant::now(),
                active: false,
                waiters: VecDeque::new(),
            })),
        }
    }

    pub fn interval(&self) -> Duration {
        self.sleep_time
    }

    /// Number of unsettled tickets, counting the active holder.
    pub fn remaining(&self) -> usize {
        let state = self.state.lock();
        state.waiters.len() + usize::from(state.active)
    }

    /// Waits until it is this caller's turn.
    pub async fn acquire_turn(&self) -> ThrottleTicket {
        let receiver = {
            let mut state = self.state.lock();
            if state.active {
                let (sender, receiver) = oneshot::channel();
                state.waiters.push_back(sender);
                Some(receiver)
            } else {
                state.active = true;
                None
            }
        };

        if let Some(receiver) = receiver {
            let mut pending = PendingTurn {
                throttler: self.clone(),
                receiver: Some(receiver),
            };
            if let Some(receiver) = pending.receiver.as_mut() {
                // Senders are only dropped after a successful send.
                let _ = receiver.await;
            }
            pending.receiver = None;
        }

        trace!(remaining = self.remaining(), "Throttle turn granted");
        ThrottleTicket {
            throttler: self.clone(),
            settled: false,
        }
    }

    /// Sleeps for whatever is left of the interval since the last completion.
    async fn cooldown(&self) {
        let elapsed: Duration = self.state.lock().last_run.elapsed();
        let need_to_sleep: Duration = self.sleep_time.saturating_sub(elapsed);

        if !need_to_sleep.is_zero() {
            debug!(
                sleep_ms = need_to_sleep.as_millis() as u64,
                "Throttling before next request"
            );
            sleep(need_to_sleep).await;
        }
    }

    /// Stamps the completion time and hands the turn to the next live waiter.
    fn complete(&self) {
        let mut state = self.state.lock();
        state.last_run = Instant::now();

        while let Some(sender) = state.waiters.pop_front() {
            // A failed send means the waiter gave up; try the next one.
            if sender.send(()).is_ok() {
                return;
            }
        }

        state.active = false;
    }
}

impl ThrottleTicket {
    /// Pays the cooldown and releases the next queued caller.
    pub async fn throttle(mut self) {
        self.throttler.cooldown().await;
        self.settled = true;
        self.throttler.complete();
    }
}

impl Drop for ThrottleTicket {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        let throttler: QueueThrottler = self.throttler.clone();
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    throttler.cooldown().await;
                    throttler.complete();
                });
            }
            Err(_) => throttler.complete(),
        }
    }
}

impl Drop for PendingTurn {
    fn drop(&mut self) {
        if let Some(mut receiver) = self.receiver.take() {
            receiver.close();
            // The turn arrived just as the waiter was cancelled; pass it on.
            if receiver.try_recv().is_ok() {
                self.throttler.complete();
            }
        }
    }
}
