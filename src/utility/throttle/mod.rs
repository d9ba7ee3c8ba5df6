//! Single-lane request throttler.
//!
//! Callers line up with [`QueueThrottler::acquire_turn`] and are admitted one at
//! a time in arrival order. The admitted caller runs its protected work and then
//! settles its [`ThrottleTicket`](types::ThrottleTicket) with
//! [`throttle`](types::ThrottleTicket::throttle), which waits
//! out whatever is left of the minimum interval since the previous completion
//! before handing the turn to the next caller in line.
//!
//! ```ignore
//! let throttler = QueueThrottler::new(1);
//! let ticket = throttler.acquire_turn().await;
//! let response = client.get(url).send().await;
//! ticket.throttle().await;
//! ```

pub mod impls;
pub mod types;

pub use types::QueueThrottler;

#[cfg(test)]
mod tests;
