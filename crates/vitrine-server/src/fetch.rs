//! Upstream data gathering for a homepage render.
//!
//! The five fetches — three product lists, site info, pages — are
//! independent read-only requests with no ordering dependency, so they are
//! issued concurrently. All must complete before the page can render; any
//! failure fails the whole render (join/barrier, not a pipeline). Retries
//! and back-off belong to the commerce client, not this layer.

use std::sync::Arc;

use vitrine_commerce::{CommerceError, ProductField, RequestContext, StorefrontClient};
use vitrine_core::{
    Brand, Category, Page, Product, BEST_SELLING_FETCH_COUNT, FEATURED_FETCH_COUNT,
    NEWEST_FETCH_COUNT,
};

/// Everything a homepage render needs, fetched in one barrier.
///
/// The three product lists are `Arc`s because their identity is the
/// assembler's memo key: a re-fetch produces new instances and invalidates
/// the memo, an unchanged props bundle reuses the previous assembly.
#[derive(Debug, Clone)]
pub struct HomeProps {
    pub featured_products: Arc<Vec<Product>>,
    pub best_selling_products: Arc<Vec<Product>>,
    pub newest_products: Arc<Vec<Product>>,
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub pages: Vec<Page>,
}

/// Fetches the full props bundle for one locale.
///
/// # Errors
///
/// Propagates the first [`CommerceError`] from any of the five fetches,
/// unmodified — failure handling belongs to the caller's generation path.
pub async fn gather_home_props(
    client: &StorefrontClient,
    ctx: &RequestContext,
) -> Result<HomeProps, CommerceError> {
    let (featured, best_selling, newest, site, pages) = tokio::try_join!(
        client.get_all_products(ProductField::Featured, FEATURED_FETCH_COUNT, ctx),
        client.get_all_products(ProductField::BestSelling, BEST_SELLING_FETCH_COUNT, ctx),
        client.get_all_products(ProductField::Newest, NEWEST_FETCH_COUNT, ctx),
        client.get_site_info(ctx),
        client.get_all_pages(ctx),
    )?;

    Ok(HomeProps {
        featured_products: Arc::new(featured),
        best_selling_products: Arc::new(best_selling),
        newest_products: Arc::new(newest),
        categories: site.categories,
        brands: site.brands,
        pages,
    })
}
