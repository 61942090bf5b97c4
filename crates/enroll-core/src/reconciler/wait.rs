//! Bounded polling for asynchronous page updates.

use std::time::Duration;

use tokio::time::sleep;

use crate::error::Result;

/// How long to wait for the page to catch up: `attempts` sleeps of
/// `interval` each, with a check before every sleep and one after the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl WaitPolicy {
    pub const DEFAULT_ATTEMPTS: u32 = 100;
    pub const DEFAULT_INTERVAL_MS: u64 = 100;
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(Self::DEFAULT_INTERVAL_MS);

    pub fn new(attempts: u32, interval: Duration) -> Self {
        Self { attempts, interval }
    }

    /// Upper bound of the time spent sleeping, saturating at `Duration::MAX`.
    pub fn budget(&self) -> Duration {
        self.interval.saturating_mul(self.attempts)
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ATTEMPTS, Self::DEFAULT_INTERVAL)
    }
}

/// Last observed value of a poll, and whether it satisfied the condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Waited<T> {
    Ready(T),
    TimedOut(T),
}

/// Calls `probe` until `is_ready` accepts its value or the policy's attempts
/// are used up. Errors from `probe` end the wait immediately.
pub async fn poll_until<T, F, P>(policy: &WaitPolicy, mut probe: F, is_ready: P) -> Result<Waited<T>>
where
    F: FnMut() -> Result<T>,
    P: Fn(&T) -> bool,
{
    for _ in 0..policy.attempts {
        let value = probe()?;
        if is_ready(&value) {
            return Ok(Waited::Ready(value));
        }
        sleep(policy.interval).await;
    }

    let value = probe()?;
    if is_ready(&value) {
        Ok(Waited::Ready(value))
    } else {
        Ok(Waited::TimedOut(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnrollError;

    #[test]
    fn test_default_budget_is_ten_seconds() {
        let policy = WaitPolicy::default();
        assert_eq!(policy.attempts, 100);
        assert_eq!(policy.budget(), Duration::from_secs(10));
    }

    #[test]
    fn test_budget_saturates_on_huge_policies() {
        let policy = WaitPolicy::new(u32::MAX, Duration::from_millis(u64::MAX));
        assert_eq!(policy.budget(), Duration::MAX);
    }

    #[tokio::test]
    async fn test_ready_on_first_probe_does_not_sleep() {
        let mut calls = 0;
        let waited = poll_until(
            &WaitPolicy::new(3, Duration::from_secs(3600)),
            || {
                calls += 1;
                Ok(calls)
            },
            |_| true,
        )
        .await
        .unwrap();

        assert_eq!(waited, Waited::Ready(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_after_attempts_plus_final_check() {
        let mut calls = 0;
        let started = tokio::time::Instant::now();
        let waited = poll_until(
            &WaitPolicy::default(),
            || {
                calls += 1;
                Ok(calls)
            },
            |_| false,
        )
        .await
        .unwrap();

        assert_eq!(waited, Waited::TimedOut(101));
        assert!(started.elapsed() >= Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_becomes_ready_midway() {
        let mut calls = 0;
        let waited = poll_until(
            &WaitPolicy::new(10, Duration::from_millis(1)),
            || {
                calls += 1;
                Ok(calls)
            },
            |calls| *calls == 4,
        )
        .await
        .unwrap();

        assert_eq!(waited, Waited::Ready(4));
    }

    #[tokio::test]
    async fn test_probe_error_stops_polling() {
        let result: Result<Waited<()>> = poll_until(
            &WaitPolicy::new(10, Duration::from_millis(1)),
            || Err(EnrollError::element_not_found("#crns")),
            |_| true,
        )
        .await;

        assert!(matches!(result, Err(EnrollError::ElementNotFound { .. })));
    }
}
