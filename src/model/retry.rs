/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BACKOFF_FACTOR, DEFAULT_MAX_RETRIES, RETRY_AFTER_STATUSES, RETRYABLE_STATUSES,
};
use reqwest::{Method, StatusCode};
use std::time::Duration;

/// Longest single backoff sleep
pub const BACKOFF_MAX: Duration = Duration::from_secs(120);

/// Configuration for transport-level retry behavior
///
/// One budget covers connection failures, read failures and retryable
/// statuses together.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,
    /// Backoff factor in seconds; retry `n` sleeps `factor * 2^(n-1)`
    pub backoff_factor: f64,
}

impl RetryConfig {
    /// Creates a retry configuration
    #[must_use]
    pub fn new(max_retries: u32, backoff_factor: f64) -> Self {
        Self {
            max_retries,
            backoff_factor,
        }
    }

    /// Configuration that never retries
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(0, 0.0)
    }

    /// Sleep before retry `attempt` (1-indexed), capped at [`BACKOFF_MAX`]
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        if attempt == 0 || !self.backoff_factor.is_finite() || self.backoff_factor <= 0.0 {
            return Duration::ZERO;
        }
        let exponent = attempt.saturating_sub(1).min(63) as i32;
        let secs = self.backoff_factor * 2f64.powi(exponent);
        Duration::try_from_secs_f64(secs)
            .unwrap_or(BACKOFF_MAX)
            .min(BACKOFF_MAX)
    }

    /// Whether the transport may retry this method at all
    ///
    /// Only GET and POST are retried; PUT and every other method get a
    /// single attempt.
    #[must_use]
    pub fn is_retryable_method(method: &Method) -> bool {
        *method == Method::GET || *method == Method::POST
    }

    /// Whether a response with this status should be retried
    #[must_use]
    pub fn is_retryable_status(status: StatusCode) -> bool {
        RETRYABLE_STATUSES.contains(&status.as_u16())
    }

    /// Whether a `Retry-After` header on this status is honoured
    #[must_use]
    pub fn honours_retry_after(status: StatusCode) -> bool {
        RETRY_AFTER_STATUSES.contains(&status.as_u16())
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_BACKOFF_FACTOR)
    }
}
