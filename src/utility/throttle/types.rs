// Standard library
use std::collections::VecDeque;
use std::sync::Arc;

// 3rd party crates
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio::time::{Duration, Instant};

/// FIFO throttler enforcing a minimum interval between completions.
///
/// Cloning is cheap and every clone shares the same queue.
#[derive(Debug, Clone)]
pub struct QueueThrottler {
    pub(super) sleep_time: Duration,
    pub(super) state: Arc<Mutex<ThrottleState>>,
}

/// Mutable state shared by every handle of a throttler.
#[derive(Debug)]
pub struct ThrottleState {
    /// Instant of the last completed turn
    pub last_run: Instant,
    /// Whether a ticket currently holds the turn
    pub active: bool,
    /// Callers waiting for their turn, oldest first
    pub waiters: VecDeque<oneshot::Sender<()>>,
}

/// A granted turn. Settle it with `throttle()` once the protected work is done.
///
/// Dropping an unsettled ticket still pays the cooldown and frees the next caller.
#[derive(Debug)]
#[must_use = "a ticket holds the throttle turn until it is settled"]
pub struct ThrottleTicket {
    pub(super) throttler: QueueThrottler,
    pub(super) settled: bool,
}

/// A caller still waiting in line.
pub(super) struct PendingTurn {
    pub(super) throttler: QueueThrottler,
    pub(super) receiver: Option<oneshot::Receiver<()>>,
}
