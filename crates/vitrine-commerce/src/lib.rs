//! HTTP client for the commerce backend's storefront API.
//!
//! Fetches product lists, site metadata, and static pages, and normalizes
//! the wire payloads into [`vitrine_core`] domain types. Connection details
//! (base URL, token, timeouts, retry policy) are fixed at client
//! construction; per-request locale and preview selection travel in an
//! explicit [`RequestContext`] rather than ambient state.

mod client;
mod error;
mod normalize;
mod retry;
mod types;

pub use client::{ProductField, RequestContext, StorefrontClient};
pub use error::CommerceError;
pub use types::{
    ApiBrand, ApiCategory, ApiImage, ApiMoney, ApiPage, ApiPrices, ApiProduct, PagesResponse,
    ProductsResponse, SiteInfoResponse,
};
