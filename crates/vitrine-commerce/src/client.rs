//! HTTP client for the storefront API.
//!
//! Wraps `reqwest` with typed endpoint methods, token auth, status-code
//! mapping, and retry with back-off. Use [`StorefrontClient::from_config`]
//! in production or [`StorefrontClient::new`] with a custom base URL to
//! point at a mock server in tests.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use vitrine_core::{AppConfig, Page, Product, SiteInfo};

use crate::error::CommerceError;
use crate::normalize::{normalize_page, normalize_product, normalize_site_info};
use crate::retry::retry_with_backoff;
use crate::types::{PagesResponse, ProductsResponse, SiteInfoResponse};

/// Header carrying the storefront API token.
const TOKEN_HEADER: &str = "x-storefront-token";

/// Which curated product list to fetch from the catalog endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Featured,
    BestSelling,
    Newest,
}

impl ProductField {
    /// Value of the `field` query parameter.
    #[must_use]
    pub fn as_query_value(self) -> &'static str {
        match self {
            ProductField::Featured => "featured",
            ProductField::BestSelling => "best-selling",
            ProductField::Newest => "newest",
        }
    }
}

/// Per-request locale and content selection, passed explicitly to every
/// operation.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// BCP 47 locale code, e.g. `"en-US"`.
    pub locale: String,
    /// Select draft content instead of published content.
    pub preview: bool,
    /// Backend channel id for multi-channel stores.
    pub channel_id: Option<String>,
}

impl RequestContext {
    #[must_use]
    pub fn published(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            preview: false,
            channel_id: None,
        }
    }
}

/// Client for the commerce backend's storefront API.
pub struct StorefrontClient {
    client: Client,
    token: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl StorefrontClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CommerceError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, CommerceError> {
        Self::new(
            &config.storefront_api_url,
            &config.storefront_api_token,
            config.fetch_timeout_secs,
            &config.user_agent,
            config.fetch_max_retries,
            config.fetch_retry_backoff_base_ms,
        )
    }

    /// Creates a client with explicit connection settings (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CommerceError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(
        base_url: &str,
        token: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, CommerceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: exactly one trailing slash so Url::join appends path
        // segments instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CommerceError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Fetches one curated product list from `GET /catalog/products`.
    ///
    /// `first` caps the number of returned products. Wire entries that fail
    /// normalization (unparsable price) are skipped with a warning; the rest
    /// of the list is returned.
    ///
    /// # Errors
    ///
    /// - [`CommerceError::RateLimited`] — HTTP 429 after all retries.
    /// - [`CommerceError::NotFound`] — HTTP 404 (not retried).
    /// - [`CommerceError::UnexpectedStatus`] — other non-2xx statuses.
    /// - [`CommerceError::Http`] — network failure after all retries.
    /// - [`CommerceError::Deserialize`] — body does not match the expected shape.
    pub async fn get_all_products(
        &self,
        field: ProductField,
        first: u32,
        ctx: &RequestContext,
    ) -> Result<Vec<Product>, CommerceError> {
        let first_str = first.to_string();
        let url = self.endpoint_url(
            "catalog/products",
            &[("field", field.as_query_value()), ("first", &first_str)],
            ctx,
        )?;
        let response: ProductsResponse = self.fetch_json(&url).await?;

        let products = response
            .products
            .into_iter()
            .filter_map(|api| match normalize_product(api) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping product that failed normalization");
                    None
                }
            })
            .take(first as usize)
            .collect();

        Ok(products)
    }

    /// Fetches category and brand metadata from `GET /site`.
    ///
    /// # Errors
    ///
    /// Same error surface as [`StorefrontClient::get_all_products`].
    pub async fn get_site_info(&self, ctx: &RequestContext) -> Result<SiteInfo, CommerceError> {
        let url = self.endpoint_url("site", &[], ctx)?;
        let response: SiteInfoResponse = self.fetch_json(&url).await?;
        Ok(normalize_site_info(response.categories, response.brands))
    }

    /// Fetches static content pages from `GET /content/pages`.
    ///
    /// # Errors
    ///
    /// Same error surface as [`StorefrontClient::get_all_products`].
    pub async fn get_all_pages(&self, ctx: &RequestContext) -> Result<Vec<Page>, CommerceError> {
        let url = self.endpoint_url("content/pages", &[], ctx)?;
        let response: PagesResponse = self.fetch_json(&url).await?;
        Ok(response.pages.into_iter().map(normalize_page).collect())
    }

    /// Builds the full endpoint URL with locale/preview/channel parameters
    /// appended after any endpoint-specific ones, all percent-encoded via
    /// [`Url::query_pairs_mut`].
    fn endpoint_url(
        &self,
        path: &str,
        extra: &[(&str, &str)],
        ctx: &RequestContext,
    ) -> Result<Url, CommerceError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| CommerceError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("locale", &ctx.locale);
            if ctx.preview {
                pairs.append_pair("preview", "true");
            }
            if let Some(channel) = &ctx.channel_id {
                pairs.append_pair("channel", channel);
            }
        }
        Ok(url)
    }

    /// Sends a GET request with retry, maps 429/404/non-2xx to typed errors,
    /// and parses the body into `T`.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, CommerceError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(url.clone())
                    .header(TOKEN_HEADER, &self.token)
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(CommerceError::RateLimited { retry_after_secs });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(CommerceError::NotFound {
                        url: url.to_string(),
                    });
                }

                if !status.is_success() {
                    return Err(CommerceError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = response.text().await?;
                serde_json::from_str(&body).map_err(|e| CommerceError::Deserialize {
                    context: url.to_string(),
                    source: e,
                })
            }
        })
        .await
    }
}
