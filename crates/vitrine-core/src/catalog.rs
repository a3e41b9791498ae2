use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A storefront product, normalized from the commerce backend for display.
///
/// `path` is the product's URL slug and serves as its identity: two products
/// with the same path are the same product. A product is immutable once
/// fetched; the homepage assembler only copies products into new lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// URL path of the product page, e.g. `"/hi-boy-blood-orange"`. Identity key.
    pub path: String,
    pub name: String,
    /// Display price of the default variant.
    pub price: Money,
    /// Raw HTML description from the backend, if any.
    pub description: Option<String>,
    /// Primary product image.
    pub image: Option<ProductImage>,
}

/// A monetary amount with its ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub value: Decimal,
    /// ISO 4217 code, e.g. `"USD"`.
    pub currency_code: String,
}

/// A product image from the backend CDN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub alt: Option<String>,
}

/// A catalog category, passed through untouched to the all-products grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub entity_id: i64,
    pub name: String,
    pub path: String,
}

/// A product brand, passed through untouched to the all-products grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub entity_id: i64,
    pub name: String,
    pub path: String,
}

/// Category and brand metadata for the storefront, fetched as one unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteInfo {
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
}

/// A static content page. Not used directly by the homepage display logic;
/// carried in the props bundle for layout collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: i64,
    pub name: String,
    pub url: Option<String>,
    pub body: Option<String>,
}

impl Product {
    /// Formatted display price, e.g. `"24.99 USD"`.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("{} {}", self.price.value, self.price.currency_code)
    }
}
