use std::{future::Future, time::Duration};
use tokio::time::sleep;
use tracing::debug;

/// Whether a failed attempt is worth repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDisposition {
    Retry,
    Stop,
}

/// Why a retried operation gave up.
#[derive(Debug)]
pub enum RetryError<E> {
    /// The error was not retryable.
    Fatal(E),
    /// Every attempt failed; holds the last error and the number of attempts made.
    AttemptsExceeded(E, usize),
}

/// Bounded exponential backoff for console lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: usize, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            max_delay: max_delay.max(base_delay),
        }
    }

    /// A single attempt, no backoff.
    pub fn once() -> Self {
        Self::new(1, Duration::ZERO, Duration::ZERO)
    }

    pub async fn run<F, Fut, T, E, Classifier>(
        &self,
        mut op: F,
        classify: Classifier,
    ) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        Classifier: Fn(&E) -> RetryDisposition,
    {
        let mut attempt = 1;

        loop {
            let err = match op().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if classify(&err) == RetryDisposition::Stop {
                return Err(RetryError::Fatal(err));
            }
            if attempt >= self.max_attempts {
                return Err(RetryError::AttemptsExceeded(err, attempt));
            }

            let delay = self.backoff_delay(attempt);
            debug!(attempt, ?delay, "Retrying after backoff");
            sleep(delay).await;
            attempt += 1;
        }
    }

    /// Delay before the attempt following `attempt` (1-based): base, 2×base, 4×base, … capped.
    fn backoff_delay(&self, attempt: usize) -> Duration {
        let factor = 1u32 << (attempt.saturating_sub(1)).min(10);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fast(max_attempts: usize) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::from_millis(1), Duration::from_millis(2))
    }

    #[tokio::test]
    async fn test_succeeds_after_retry() {
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let result: Result<u32, RetryError<&str>> = fast(3)
            .run(
                || async move {
                    if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err("flaky")
                    } else {
                        Ok(7)
                    }
                },
                |_| RetryDisposition::Retry,
            )
            .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fatal_error_stops_immediately() {
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let result: Result<(), RetryError<&str>> = fast(5)
            .run(
                || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err("bad request")
                },
                |_| RetryDisposition::Stop,
            )
            .await;

        assert!(matches!(result, Err(RetryError::Fatal("bad request"))));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_attempts_are_bounded() {
        let counter = AtomicUsize::new(0);
        let calls = &counter;
        let result: Result<(), RetryError<&str>> = fast(3)
            .run(
                || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err("down")
                },
                |_| RetryDisposition::Retry,
            )
            .await;

        assert!(matches!(result, Err(RetryError::AttemptsExceeded("down", 3))));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_backoff_is_capped() {
        let policy = RetryPolicy::new(6, Duration::from_millis(100), Duration::from_millis(350));
        assert_eq!(policy.backoff_delay(1), Duration::from_millis(100));
        assert_eq!(policy.backoff_delay(2), Duration::from_millis(200));
        assert_eq!(policy.backoff_delay(3), Duration::from_millis(350));
    }

    #[test]
    fn test_at_least_one_attempt() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO, Duration::ZERO).max_attempts, 1);
    }
}
