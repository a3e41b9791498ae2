//! Wire types for the commerce backend's storefront API.
//!
//! ## Observed shape
//!
//! ### Prices
//! `prices.price.value` is a decimal **string** (e.g. `"24.99"`), never a
//! float, and never null on a purchasable product. `retail_price` is `null`
//! when the product is not on sale. Values are parsed into
//! `rust_decimal::Decimal` during normalization; products whose price fails
//! to parse are skipped with a warning rather than failing the whole list.
//!
//! ### `path`
//! The product's URL slug with a leading slash (e.g. `"/hi-boy"`). It is the
//! product's identity across lists — the homepage donor-pool invariant keys
//! on it.
//!
//! ### Optional fields
//! `description_html` is `null` (not omitted) when empty. `images` is an
//! empty array for products without photography; the first image is the
//! primary one. Both get `#[serde(default)]` so older backends that omit
//! them entirely still parse.

use serde::Deserialize;

/// Top-level response from `GET /catalog/products`.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ApiProduct>,
}

/// A single product from the storefront catalog endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiProduct {
    /// Backend numeric product ID.
    pub entity_id: i64,

    /// URL path of the product page, with leading slash. Identity key.
    pub path: String,

    pub name: String,

    /// Raw HTML description. `null` when empty.
    #[serde(default)]
    pub description_html: Option<String>,

    pub prices: ApiPrices,

    /// Image gallery; first entry is the primary image.
    #[serde(default)]
    pub images: Vec<ApiImage>,
}

/// Price block of an [`ApiProduct`].
#[derive(Debug, Deserialize)]
pub struct ApiPrices {
    pub price: ApiMoney,
    /// Pre-sale comparison price, `null` when not on sale.
    #[serde(default)]
    pub retail_price: Option<ApiMoney>,
}

/// A monetary amount on the wire: decimal string plus ISO 4217 code.
#[derive(Debug, Deserialize)]
pub struct ApiMoney {
    /// Decimal string exactly as the backend returns it, e.g. `"24.99"`.
    pub value: String,
    pub currency_code: String,
}

/// A product image.
#[derive(Debug, Deserialize)]
pub struct ApiImage {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Response from `GET /site`.
#[derive(Debug, Deserialize)]
pub struct SiteInfoResponse {
    pub categories: Vec<ApiCategory>,
    pub brands: Vec<ApiBrand>,
}

#[derive(Debug, Deserialize)]
pub struct ApiCategory {
    pub entity_id: i64,
    pub name: String,
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiBrand {
    pub entity_id: i64,
    pub name: String,
    pub path: String,
}

/// Response from `GET /content/pages`.
#[derive(Debug, Deserialize)]
pub struct PagesResponse {
    pub pages: Vec<ApiPage>,
}

#[derive(Debug, Deserialize)]
pub struct ApiPage {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}
