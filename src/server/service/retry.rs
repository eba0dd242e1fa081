//! Retry wrapper for service operations that touch the database.

use std::{future::Future, pin::Pin, time::Duration};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Context for service methods providing retry logic
pub struct RetryContext<T> {
    /// Cache carried between retries so work done by a failed attempt can be reused
    cache: T,
    /// Max attempts before failure
    max_attempts: u32,
    /// Backoff before the first retry, doubled for every retry after it
    initial_backoff: Duration,
    /// Whether repeating an attempt that may have reached the database is safe
    idempotent: bool,
}

impl<T> RetryContext<T>
where
    T: Clone + Default,
{
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    /// Creates a context for an idempotent operation with 3 attempts and a 1 second backoff
    pub fn new() -> Self {
        Self {
            cache: T::default(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
            idempotent: true,
        }
    }

    /// Sets the number of attempts, at least 1
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the backoff before the first retry
    pub fn with_initial_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    /// Marks the operation as unsafe to repeat once a statement may have been applied
    ///
    /// Only [`ErrorRetryStrategy::Retry`] errors are retried.
    /// [`ErrorRetryStrategy::RetryIdempotent`] errors are returned immediately.
    pub fn non_idempotent(mut self) -> Self {
        self.idempotent = false;
        self
    }

    /// Execute a method with automatic retry logic
    ///
    /// The operation receives the retry cache, which persists across attempts.
    /// Errors classified as [`ErrorRetryStrategy::Retry`] are retried with exponential backoff
    /// until `max_attempts` is reached, all other errors are returned immediately.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "get item ID 1")
    /// - `operation`: Async function performing the work
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: for<'a> Fn(&'a mut T) -> Pin<Box<dyn Future<Output = Result<R, Error>> + Send + 'a>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation(&mut self.cache).await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::RetryIdempotent if !self.idempotent => {
                        tracing::error!(
                            "Not retrying {} as it may already have been applied: {:?}",
                            description,
                            e
                        );
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry | ErrorRetryStrategy::RetryIdempotent => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}
