//! Retry policy for page fetches.

use std::future::Future;
use std::time::Duration;

use tokio_retry::strategy::ExponentialBackoff;
use tokio_retry::RetryIf;

use crate::config::{RETRY_FACTOR, RETRY_INITIAL_DELAY_MS, RETRY_MAX_DELAY_SECS};
use crate::error_handling::FetchError;

/// Exponential backoff schedule with a bounded number of attempts.
///
/// With the defaults the waits between attempts are 1s, 2s, 4s, 8s, 8s, ...
/// and at most 3 attempts are made, so a failing URL costs two waits
/// (1s + 2s) before its error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Zero is treated as one.
    pub max_attempts: u32,
    /// Wait before the second attempt.
    pub initial_delay: Duration,
    /// Upper bound for any single wait.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: crate::config::DEFAULT_MAX_RETRIES,
            initial_delay: Duration::from_millis(RETRY_INITIAL_DELAY_MS),
            max_delay: Duration::from_secs(RETRY_MAX_DELAY_SECS),
        }
    }
}

impl RetryPolicy {
    /// Default schedule with a custom attempt budget.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    /// Delays between consecutive attempts.
    ///
    /// `ExponentialBackoff::from_millis(b).factor(f)` yields `f*b, f*b^2, ...`,
    /// so using the doubling factor as base and `initial / 2` as multiplier
    /// gives `initial, 2*initial, 4*initial, ...`.
    pub fn delays(&self) -> impl Iterator<Item = Duration> {
        let initial_ms = u64::try_from(self.initial_delay.as_millis()).unwrap_or(u64::MAX);
        let retries = self.max_attempts.max(1) as usize - 1;
        ExponentialBackoff::from_millis(RETRY_FACTOR)
            .factor(initial_ms / RETRY_FACTOR)
            .max_delay(self.max_delay)
            .take(retries)
    }

    /// Runs `action` until it succeeds, returns a non-transient error, or the
    /// attempt budget is spent. The last error is returned unchanged.
    pub async fn run<T, A, Fut>(&self, mut action: A) -> Result<T, FetchError>
    where
        A: FnMut() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        RetryIf::spawn(
            self.delays(),
            || action(),
            |err: &FetchError| {
                let retry = is_retriable_error(err);
                if retry {
                    log::debug!("Retrying after transient error: {err}");
                }
                retry
            },
        )
        .await
    }
}

/// Determines if a fetch error is worth another attempt.
///
/// Network-level failures (timeouts, refused connections, broken bodies) are
/// retried. Malformed URLs and redirect loops fail the same way every time.
pub(crate) fn is_retriable_error(error: &FetchError) -> bool {
    error.is_transient()
}
