//! Retry strategy abstraction for page fetches.
//!
//! This module provides traits and implementations for retry logic with
//! configurable backoff strategies.

use std::time::Duration;

use tracing::warn;

use crate::config::retry as retry_config;

/// Trait for defining retry strategies.
///
/// Implementations define how many attempts to make and how long to wait
/// between each attempt.
pub trait RetryStrategy {
    /// Maximum number of attempts, including the first one.
    fn max_attempts(&self) -> u32;

    /// Delay after the given failed attempt (0-indexed).
    ///
    /// Returns `None` if no delay should be applied.
    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration>;

    /// Execute a function with retry logic.
    ///
    /// Calls `f` up to `max_attempts()` times, sleeping `delay_for_attempt()`
    /// between each failed attempt.
    fn execute<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Result<T, E>,
    {
        self.execute_when(f, |_| true)
    }

    /// Like [`execute`](Self::execute), but gives up immediately on errors
    /// for which `retryable` returns false.
    fn execute_when<T, E, F, P>(&self, mut f: F, retryable: P) -> Result<T, E>
    where
        F: FnMut(u32) -> Result<T, E>,
        P: Fn(&E) -> bool,
    {
        let max = self.max_attempts().max(1);
        let mut attempt = 0;

        loop {
            match f(attempt) {
                Ok(value) => return Ok(value),
                Err(e) if attempt + 1 < max && retryable(&e) => {
                    if let Some(delay) = self.delay_for_attempt(attempt) {
                        std::thread::sleep(delay);
                    }
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Exponential backoff retry strategy.
///
/// Uses the delays from `config::retry`, repeating the last one when more
/// attempts are configured than delays exist.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    max_attempts: u32,
}

impl ExponentialBackoff {
    /// Create a backoff strategy with the given number of attempts.
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::new(retry_config::DEFAULT_ATTEMPTS)
    }
}

impl RetryStrategy for ExponentialBackoff {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        let delays = &retry_config::RETRY_DELAYS_MS;
        let index = (attempt as usize).min(delays.len() - 1);
        Some(Duration::from_millis(delays[index]))
    }
}

/// Fixed delay retry strategy.
///
/// Waits a constant duration between each attempt.
#[derive(Debug, Clone)]
pub struct FixedDelay {
    max_attempts: u32,
    delay: Duration,
}

impl FixedDelay {
    /// Create a new fixed delay strategy.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl RetryStrategy for FixedDelay {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn delay_for_attempt(&self, _attempt: u32) -> Option<Duration> {
        Some(self.delay)
    }
}

/// No retry strategy - attempt once and return the result.
#[derive(Debug, Clone, Default)]
pub struct NoRetry;

impl NoRetry {
    /// Create a no-retry strategy.
    pub fn new() -> Self {
        Self
    }
}

impl RetryStrategy for NoRetry {
    fn max_attempts(&self) -> u32 {
        1
    }

    fn delay_for_attempt(&self, _attempt: u32) -> Option<Duration> {
        None
    }
}

/// Log a failed attempt before the next try.
pub(crate) fn log_retry(what: &str, attempt: u32, error: &dyn std::fmt::Display) {
    warn!("{} failed (attempt {}): {}, retrying", what, attempt + 1, error);
}
