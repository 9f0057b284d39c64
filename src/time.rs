//! Time abstraction for testability.
//!
//! The pipeline paces registry requests with a fixed delay. This module
//! provides a [`Sleeper`] trait so tests can skip or record those delays
//! while production uses the tokio timer.

use std::time::Duration;

/// Abstraction over async sleeping.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use vpn_prefixes::time::{InstantSleeper, Sleeper};
///
/// # async fn example() {
/// InstantSleeper.sleep(Duration::from_secs(3600)).await; // returns immediately
/// # }
/// ```
pub trait Sleeper: Send + Sync {
    /// Waits for the given duration.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Production sleeper backed by [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately.
///
/// Intended for tests; using it in production disables request pacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}
