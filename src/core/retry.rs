use std::future::Future;

/// Returned by [`retry_bounded`] when no attempt succeeded.
#[derive(Debug)]
pub struct RetryExhausted<E> {
    pub attempts: usize,
    pub last_error: Option<E>,
}

/// Runs `attempt` up to `max_attempts` times, stopping on the first success or
/// on an error that `should_retry` rejects. Attempts are numbered from 1.
pub async fn retry_bounded<T, E, F, Fut, P>(
    max_attempts: usize,
    should_retry: P,
    mut attempt: F,
) -> Result<T, RetryExhausted<E>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
{
    let mut last_error = None;

    for n in 1..=max_attempts {
        match attempt(n).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                let retry = should_retry(&e);
                last_error = Some(e);
                if !retry {
                    return Err(RetryExhausted { attempts: n, last_error });
                }
            }
        }
    }

    Err(RetryExhausted { attempts: max_attempts, last_error })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stops_on_first_success() {
        let mut calls = Vec::new();
        let result = retry_bounded(3, |_: &String| true, |n| {
            calls.push(n);
            async move { if n == 2 { Ok(n * 10) } else { Err(format!("attempt {n}")) } }
        })
        .await;

        assert_eq!(result.unwrap(), 20);
        assert_eq!(calls, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_exhaustion_reports_last_error() {
        let result: Result<(), _> = retry_bounded(3, |_: &String| true, |n| async move {
            Err(format!("attempt {n}"))
        })
        .await;

        let exhausted = result.unwrap_err();
        assert_eq!(exhausted.attempts, 3);
        assert_eq!(exhausted.last_error.as_deref(), Some("attempt 3"));
    }

    #[tokio::test]
    async fn test_rejected_error_ends_early() {
        let mut calls = 0;
        let result: Result<(), _> = retry_bounded(5, |e: &&str| *e != "fatal", |_| {
            calls += 1;
            async { Err("fatal") }
        })
        .await;

        let exhausted = result.unwrap_err();
        assert_eq!(exhausted.attempts, 1);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_zero_attempts_never_calls() {
        let mut calls = 0;
        let result: Result<(), RetryExhausted<()>> = retry_bounded(0, |_| true, |_| {
            calls += 1;
            async { Err(()) }
        })
        .await;

        let exhausted = result.unwrap_err();
        assert_eq!(calls, 0);
        assert_eq!(exhausted.attempts, 0);
        assert!(exhausted.last_error.is_none());
    }
}
