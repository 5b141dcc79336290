/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Rate limiter module for controlling API request rates
//!
//! This module provides a token bucket on top of the `governor` crate. The
//! bucket holds `capacity` tokens and refills continuously at
//! `capacity / period` tokens per second, never above `capacity`. Admission
//! is a single atomic compare-and-swap inside `governor`, so concurrent
//! callers can never both take the last token.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Token bucket shared by every call issued through one client instance
///
/// Cloning shares the bucket; two limiters built with `new` never do.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
    capacity: NonZeroU32,
    period: Duration,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// A non-positive `max_requests` is clamped to 1 and a zero period to one
    /// second, so a misconfigured client is throttled rather than blocked
    /// forever.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use ahrefs_client::application::config::RateLimiterConfig;
    /// use ahrefs_client::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(&RateLimiterConfig {
    ///     max_requests: 60,
    ///     period_seconds: 60,
    /// });
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let clamped = config.max_requests.clamp(1, i64::from(u32::MAX)) as u32;
        let capacity = NonZeroU32::new(clamped).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.period_seconds.max(1));

        let replenish_interval = period / capacity.get();
        let quota = Quota::with_period(replenish_interval)
            .unwrap_or_else(|| Quota::per_second(capacity))
            .allow_burst(capacity);

        debug!(
            "Rate limiter: {} requests per {:?} (one token every {:?})",
            capacity, period, replenish_interval
        );

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
            capacity,
            period,
        }
    }

    /// Waits until a token is available and consumes it
    ///
    /// Suspends the calling task only; other tasks keep running.
    pub async fn acquire(&self) {
        self.limiter.until_ready().await;
    }

    /// Consumes a token if one is available right now
    ///
    /// # Returns
    ///
    /// * `true` if a token was taken
    /// * `false` if the bucket is empty
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }

    /// Maximum number of tokens the bucket holds
    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity.get()
    }

    /// Window over which a full bucket refills
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("capacity", &self.capacity)
            .field("period", &self.period)
            .finish()
    }
}
