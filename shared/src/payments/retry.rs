//! Exponential backoff with additive jitter
//!
//! `delay = min(base * exponential_base^(attempt - 1) + U[0, jitter), max)`.
//! Attempts are 1-based: `attempt = 1` is the delay before the first retry.
//! Nothing here sleeps; callers decide what to do with the number.

use rand::Rng;

use super::registry::StripeErrorCode;
use crate::config::RetryConfig;

/// Delay in milliseconds before retrying after `attempt` failed attempts.
///
/// `attempt` must be at least 1. Zero is a caller bug and trips a debug
/// assertion; it is not rounded up.
pub fn compute_delay(attempt: u32, config: &RetryConfig) -> u64 {
    compute_delay_with_rng(attempt, config, &mut rand::thread_rng())
}

/// Same as [`compute_delay`] with an explicit random source
pub fn compute_delay_with_rng<R: Rng + ?Sized>(
    attempt: u32,
    config: &RetryConfig,
    rng: &mut R,
) -> u64 {
    let jitter = if config.jitter_ms > 0 {
        rng.gen_range(0..config.jitter_ms)
    } else {
        0
    };

    let delay = exponential_component(attempt, config) + jitter as f64;
    delay.min(config.max_delay_ms as f64) as u64
}

/// Delay without the jitter term, clamped to `max_delay_ms`
pub fn base_delay(attempt: u32, config: &RetryConfig) -> u64 {
    exponential_component(attempt, config).min(config.max_delay_ms as f64) as u64
}

/// Delay to wait before retrying `code`, or `None` when the code is not
/// retryable or the attempt budget is spent
pub fn retry_delay_for(code: &StripeErrorCode, attempt: u32, config: &RetryConfig) -> Option<u64> {
    if code.is_retryable() && config.should_retry(attempt) {
        Some(compute_delay(attempt, config))
    } else {
        None
    }
}

fn exponential_component(attempt: u32, config: &RetryConfig) -> f64 {
    debug_assert!(attempt >= 1, "retry attempts are 1-based, got {}", attempt);

    let exponent = i32::try_from(i64::from(attempt) - 1).unwrap_or(i32::MAX);
    // powi overflows to +inf, which the max_delay clamp absorbs
    config.base_delay_ms as f64 * config.exponential_base.powi(exponent)
}
