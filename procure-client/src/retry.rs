//! Bounded retry loop
//!
//! A fixed number of attempts with a fixed delay between them. Used for
//! document synthesis polling and anywhere else the gateway needs a
//! moment to catch up. No exponential backoff: the budget is small and
//! the delay is part of the service contract.

use std::future::Future;
use std::time::Duration;

/// Outcome of a single attempt
pub enum Attempt<T> {
    /// Done, stop retrying
    Done(T),
    /// Not there yet, try again after the delay
    Again,
}

/// Run `op` up to `max_attempts` times with `delay` between attempts.
///
/// Returns `None` when every attempt came back [`Attempt::Again`];
/// errors from the operation abort the loop immediately.
pub async fn retry_bounded<T, E, F, Fut>(
    max_attempts: u32,
    delay: Duration,
    mut op: F,
) -> Result<Option<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Attempt<T>, E>>,
{
    for attempt in 1..=max_attempts {
        match op(attempt).await? {
            Attempt::Done(value) => return Ok(Some(value)),
            Attempt::Again => {
                tracing::debug!(attempt, max_attempts, "Attempt not ready, retrying");
                if attempt < max_attempts && !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_succeeds_mid_budget() {
        let calls = AtomicU32::new(0);
        let result: Result<Option<u32>, Infallible> =
            retry_bounded(5, Duration::ZERO, |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt >= 3 {
                        Ok(Attempt::Done(attempt))
                    } else {
                        Ok(Attempt::Again)
                    }
                }
            })
            .await;
        assert_eq!(result.unwrap(), Some(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exhausts_budget() {
        let calls = AtomicU32::new(0);
        let result: Result<Option<()>, Infallible> =
            retry_bounded(4, Duration::ZERO, |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(Attempt::Again) }
            })
            .await;
        assert_eq!(result.unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_error_aborts_immediately() {
        let calls = AtomicU32::new(0);
        let result: Result<Option<()>, &str> = retry_bounded(10, Duration::ZERO, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("boom") }
        })
        .await;
        assert_eq!(result.unwrap_err(), "boom");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
