use thiserror::Error;

/// Errors returned by the storefront API client.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP 429 from the backend.
    #[error("rate limited by storefront API (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    /// HTTP 404 — the endpoint or resource does not exist.
    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    /// Any other non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The configured base URL is not a valid URL.
    #[error("invalid storefront API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// A wire product could not be converted into a domain product.
    #[error("normalization error for product {path}: {reason}")]
    Normalization { path: String, reason: String },
}
