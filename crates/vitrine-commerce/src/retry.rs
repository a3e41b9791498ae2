//! Retry with exponential back-off and jitter for storefront API calls.
//!
//! [`retry_with_backoff`] wraps any fallible async operation and retries on
//! transient errors. Non-transient errors are returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::CommerceError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - [`CommerceError::RateLimited`] — HTTP 429; the backend asked us to back off.
/// - [`CommerceError::Http`] — timeout, connection reset, or a 5xx surfaced
///   through `error_for_status`.
/// - [`CommerceError::UnexpectedStatus`] with a 5xx status.
///
/// **Not retriable (returned immediately):**
/// - [`CommerceError::NotFound`] — retrying returns the same 404.
/// - [`CommerceError::UnexpectedStatus`] with a 4xx status.
/// - [`CommerceError::Deserialize`] / [`CommerceError::Normalization`] —
///   malformed data; retrying won't fix it.
/// - [`CommerceError::InvalidBaseUrl`] — configuration error.
pub(crate) fn is_retriable(err: &CommerceError) -> bool {
    match err {
        CommerceError::RateLimited { .. } => true,
        CommerceError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        CommerceError::UnexpectedStatus { status, .. } => *status >= 500,
        CommerceError::NotFound { .. }
        | CommerceError::Deserialize { .. }
        | CommerceError::Normalization { .. }
        | CommerceError::InvalidBaseUrl { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient
/// errors.
///
/// Back-off before the n-th retry is `backoff_base_ms * 2^(n-1)`, capped at
/// 60 s, with ±25 % jitter so concurrent renders don't retry in lockstep.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, CommerceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CommerceError>>,
{
    const MAX_DELAY_MS: u64 = 60_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient storefront API error — retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
