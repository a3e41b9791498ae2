//! Homepage generation: the HTML page itself and its JSON props feed.
//!
//! Both handlers share one generation pipeline: gather props, assemble the
//! display lists through the per-locale memo, render, cache. Cached pages
//! serve immediately; a stale hit additionally kicks off a single background
//! regeneration so the next request after the revalidate window sees fresh
//! data without anyone waiting on the backend.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use vitrine_commerce::{CommerceError, RequestContext};
use vitrine_core::{Brand, Category, Page, Product};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::cache::RenderedHome;
use crate::fetch::gather_home_props;
use crate::middleware::RequestId;
use crate::render::{render_error, render_home};

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    locale: Option<String>,
    preview: Option<bool>,
}

/// Borrowed view of a rendered home, serialized for the JSON feed. The
/// assembled lists sit alongside the raw fetched lists so a consumer sees
/// both what came from the backend and what the page actually shows.
#[derive(Serialize)]
struct HomeData<'a> {
    locale: &'a str,
    featured: &'a [Product],
    best_selling: &'a [Product],
    featured_products: &'a [Product],
    best_selling_products: &'a [Product],
    newest_products: &'a [Product],
    categories: &'a [Category],
    brands: &'a [Brand],
    pages: &'a [Page],
}

impl<'a> HomeData<'a> {
    fn new(rendered: &'a RenderedHome, locale: &'a str) -> Self {
        Self {
            locale,
            featured: &rendered.lists.featured,
            best_selling: &rendered.lists.best_selling,
            featured_products: rendered.props.featured_products.as_slice(),
            best_selling_products: rendered.props.best_selling_products.as_slice(),
            newest_products: rendered.props.newest_products.as_slice(),
            categories: &rendered.props.categories,
            brands: &rendered.props.brands,
            pages: &rendered.props.pages,
        }
    }
}

/// Maps a request's query to a backend context. Unknown locales fall back to
/// the configured default rather than 404ing the storefront's front door.
fn resolve_context(state: &AppState, query: &HomeQuery) -> RequestContext {
    let locale = match &query.locale {
        Some(requested) if state.locales.contains(requested) => requested.clone(),
        Some(requested) => {
            tracing::debug!(
                requested,
                fallback = %state.config.default_locale,
                "unknown locale, serving default"
            );
            state.config.default_locale.clone()
        }
        None => state.config.default_locale.clone(),
    };
    let channel_id = state
        .locales
        .get(&locale)
        .and_then(|l| l.channel_id.clone());
    RequestContext {
        locale,
        preview: query.preview.unwrap_or(false),
        channel_id,
    }
}

/// Runs the full generation pipeline for one locale and stores the result.
pub(crate) async fn regenerate(
    state: &AppState,
    ctx: &RequestContext,
) -> Result<Arc<RenderedHome>, CommerceError> {
    let props = gather_home_props(&state.client, ctx).await?;
    let lists = state.cache.assemble(&ctx.locale, &props).await;
    let html = render_home(&props, &lists, &ctx.locale).into_string();
    let rendered = Arc::new(RenderedHome { props, lists, html });
    state.cache.insert(&ctx.locale, Arc::clone(&rendered)).await;
    Ok(rendered)
}

/// Generates a page without touching the cache or the assembler memo.
/// Preview requests must always reflect the backend's current draft state.
async fn generate_uncached(
    state: &AppState,
    ctx: &RequestContext,
) -> Result<RenderedHome, CommerceError> {
    let props = gather_home_props(&state.client, ctx).await?;
    let lists = Arc::new(vitrine_core::assemble_home(
        &props.featured_products,
        &props.best_selling_products,
        &props.newest_products,
    ));
    let html = render_home(&props, &lists, &ctx.locale).into_string();
    Ok(RenderedHome { props, lists, html })
}

fn spawn_background_refresh(state: AppState, ctx: RequestContext) {
    tokio::spawn(async move {
        if !state.cache.try_begin_refresh(&ctx.locale).await {
            return;
        }
        match regenerate(&state, &ctx).await {
            Ok(_) => tracing::info!(locale = %ctx.locale, "background regeneration complete"),
            Err(e) => {
                // The stale page keeps serving; the next stale hit retries.
                tracing::error!(locale = %ctx.locale, error = %e, "background regeneration failed");
            }
        }
        state.cache.end_refresh(&ctx.locale).await;
    });
}

/// Serves a cached render when one exists, generating inline only on a cold
/// miss. Errors escape only when generation fails with nothing cached to
/// fall back on.
async fn serve_cached(
    state: &AppState,
    ctx: &RequestContext,
) -> Result<Arc<RenderedHome>, CommerceError> {
    if let Some((rendered, stale)) = state.cache.lookup(&ctx.locale).await {
        if stale {
            spawn_background_refresh(state.clone(), ctx.clone());
        }
        return Ok(rendered);
    }
    regenerate(state, ctx).await
}

pub async fn home_page(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Response {
    let ctx = resolve_context(&state, &query);

    if ctx.preview {
        return match generate_uncached(&state, &ctx).await {
            Ok(rendered) => Html(rendered.html).into_response(),
            Err(e) => error_page(&ctx, &e),
        };
    }

    match serve_cached(&state, &ctx).await {
        Ok(rendered) => Html(rendered.html.clone()).into_response(),
        Err(e) => error_page(&ctx, &e),
    }
}

fn error_page(ctx: &RequestContext, error: &CommerceError) -> Response {
    tracing::error!(locale = %ctx.locale, error = %error, "homepage generation failed");
    (
        axum::http::StatusCode::BAD_GATEWAY,
        Html(render_error(&ctx.locale).into_string()),
    )
        .into_response()
}

pub async fn home_props(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<HomeQuery>,
) -> Response {
    let ctx = resolve_context(&state, &query);
    let meta = ResponseMeta::new(req_id.0.clone());

    let result = if ctx.preview {
        generate_uncached(&state, &ctx).await.map(Arc::new)
    } else {
        serve_cached(&state, &ctx).await
    };

    match result {
        Ok(rendered) => Json(ApiResponse {
            data: HomeData::new(&rendered, &ctx.locale),
            meta,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(locale = %ctx.locale, error = %e, "home props generation failed");
            ApiError::new(req_id.0, "bad_gateway", "commerce backend unavailable").into_response()
        }
    }
}
