//! Conversion of wire payloads into domain types.

use rust_decimal::Decimal;
use vitrine_core::{Brand, Category, Money, Page, Product, ProductImage, SiteInfo};

use crate::error::CommerceError;
use crate::types::{ApiBrand, ApiCategory, ApiPage, ApiProduct};

/// Converts a wire product into a domain [`Product`].
///
/// The backend's decimal price string is parsed into a `Decimal`; empty
/// descriptions become `None`; the first gallery image becomes the primary
/// image.
///
/// # Errors
///
/// Returns [`CommerceError::Normalization`] if the price string does not
/// parse as a decimal.
pub(crate) fn normalize_product(api: ApiProduct) -> Result<Product, CommerceError> {
    let value: Decimal =
        api.prices
            .price
            .value
            .parse()
            .map_err(|e| CommerceError::Normalization {
                path: api.path.clone(),
                reason: format!("price \"{}\" is not a decimal: {e}", api.prices.price.value),
            })?;

    let description = api
        .description_html
        .filter(|d| !d.trim().is_empty());

    let image = api.images.into_iter().next().map(|img| ProductImage {
        url: img.url,
        alt: img.alt,
    });

    Ok(Product {
        path: api.path,
        name: api.name,
        price: Money {
            value,
            currency_code: api.prices.price.currency_code,
        },
        description,
        image,
    })
}

pub(crate) fn normalize_site_info(
    categories: Vec<ApiCategory>,
    brands: Vec<ApiBrand>,
) -> SiteInfo {
    SiteInfo {
        categories: categories
            .into_iter()
            .map(|c| Category {
                entity_id: c.entity_id,
                name: c.name,
                path: c.path,
            })
            .collect(),
        brands: brands
            .into_iter()
            .map(|b| Brand {
                entity_id: b.entity_id,
                name: b.name,
                path: b.path,
            })
            .collect(),
    }
}

pub(crate) fn normalize_page(api: ApiPage) -> Page {
    Page {
        id: api.id,
        name: api.name,
        url: api.url,
        body: api.body,
    }
}
