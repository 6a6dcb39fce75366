use std::time::Duration;
use std::future::Future;

use super::classification::ErrorClassification;
use super::types::SeoError;
use tracing::warn;

impl ErrorClassification {
    /// Calculate the retry delay for this error classification based on the
    /// current attempt number (0-indexed).
    ///
    /// - RateLimitError: 2s * (attempt + 1), capped at 10s (Shopify refills
    ///   its leaky bucket at 2 requests per second)
    /// - Default: 250ms * 2^attempt + random jitter (0-250ms), capped at 5s
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        match self.error_type {
            "RateLimitError" => {
                let secs = 2 * (attempt as u64 + 1);
                Duration::from_secs(secs.min(10))
            }
            _ => {
                let base: f64 = 0.25 * 2.0_f64.powi(attempt as i32);
                let jitter: f64 = rand::random::<f64>() * 0.25;
                let secs = (base + jitter).min(5.0);
                Duration::from_secs_f64(secs)
            }
        }
    }
}

/// Retry configuration for Shopify API calls.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_retries: 2 }
    }
}

/// Execute an async operation with retry logic.
///
/// Retries only if the error is classified as retryable and we haven't
/// exceeded max_retries.
pub async fn with_retry<F, Fut, T>(
    operation_name: &str,
    config: &RetryConfig,
    mut factory: F,
) -> Result<T, SeoError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SeoError>>,
{
    let max_attempts = config.max_retries + 1;
    let mut last_error = None;

    for attempt in 0..max_attempts {
        match factory().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                let classification = e.classify();

                if !classification.retryable || attempt + 1 >= max_attempts {
                    if !classification.retryable {
                        warn!(
                            operation = operation_name,
                            error_type = classification.error_type,
                            "Non-retryable error, failing immediately"
                        );
                    } else {
                        warn!(
                            operation = operation_name,
                            attempt = attempt + 1,
                            max = max_attempts,
                            "Max retries exhausted"
                        );
                    }
                    return Err(e);
                }

                let delay = classification.retry_delay(attempt);
                warn!(
                    operation = operation_name,
                    attempt = attempt + 1,
                    max = max_attempts,
                    error_type = classification.error_type,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Retrying after error"
                );

                tokio::time::sleep(delay).await;
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| SeoError::Internal("Retry loop exited unexpectedly".into())))
}
