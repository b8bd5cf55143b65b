use std::future::Future;
use std::time::Duration;

pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Runs `op`, re-invoking it after a fixed delay while the error is
    /// retryable, up to `max_retries` extra attempts. The caller only ever
    /// sees the final outcome.
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        E: Retryable,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        attempt = attempt,
                        max_retries = self.max_retries,
                        "retrying upstream call"
                    );
                    tokio::time::sleep(self.delay).await;
                },
                Err(err) => return Err(err),
            }
        }
    }
}
