//! Per-locale page cache with time-based revalidation.
//!
//! A generated homepage stays valid for the configured revalidate interval.
//! After that it is served stale while a single background regeneration
//! task refreshes it — the next request gets the new page. The interval is
//! an explicit configuration value (`VITRINE_REVALIDATE_SECS`), not a
//! constant buried in the render path.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};
use vitrine_core::{HomeAssembler, HomeLists};

use crate::fetch::HomeProps;

/// One fully generated homepage: the props bundle, the assembled display
/// lists, and the rendered HTML.
#[derive(Debug)]
pub struct RenderedHome {
    pub props: HomeProps,
    pub lists: Arc<HomeLists>,
    pub html: String,
}

#[derive(Debug)]
struct Entry {
    rendered: Arc<RenderedHome>,
    generated_at: Instant,
}

/// Cache of generated homepages, keyed by locale.
///
/// Also owns one [`HomeAssembler`] per locale so that assembly is memoized
/// against the identity of the fetched product lists across regenerations.
#[derive(Clone)]
pub struct PageCache {
    revalidate: Duration,
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    assemblers: Arc<Mutex<HashMap<String, HomeAssembler>>>,
    refreshing: Arc<Mutex<HashSet<String>>>,
}

impl PageCache {
    #[must_use]
    pub fn new(revalidate: Duration) -> Self {
        Self {
            revalidate,
            entries: Arc::new(RwLock::new(HashMap::new())),
            assemblers: Arc::new(Mutex::new(HashMap::new())),
            refreshing: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Returns the cached page for `locale` along with whether it is stale,
    /// or `None` on a miss.
    pub async fn lookup(&self, locale: &str) -> Option<(Arc<RenderedHome>, bool)> {
        let entries = self.entries.read().await;
        entries.get(locale).map(|entry| {
            let stale = entry.generated_at.elapsed() >= self.revalidate;
            (Arc::clone(&entry.rendered), stale)
        })
    }

    /// Stores a freshly generated page for `locale`.
    pub async fn insert(&self, locale: &str, rendered: Arc<RenderedHome>) {
        let mut entries = self.entries.write().await;
        entries.insert(
            locale.to_string(),
            Entry {
                rendered,
                generated_at: Instant::now(),
            },
        );
    }

    /// Assembles (or reuses, when the list instances are unchanged) the
    /// homepage lists for `locale`.
    pub async fn assemble(&self, locale: &str, props: &HomeProps) -> Arc<HomeLists> {
        let mut assemblers = self.assemblers.lock().await;
        let assembler = assemblers.entry(locale.to_string()).or_default();
        assembler.assemble(
            &props.featured_products,
            &props.best_selling_products,
            &props.newest_products,
        )
    }

    /// Claims the single refresh slot for `locale`. Returns `false` if a
    /// refresh is already in flight — the caller must not start another.
    pub async fn try_begin_refresh(&self, locale: &str) -> bool {
        self.refreshing.lock().await.insert(locale.to_string())
    }

    /// Releases the refresh slot claimed by [`PageCache::try_begin_refresh`].
    pub async fn end_refresh(&self, locale: &str) {
        self.refreshing.lock().await.remove(locale);
    }
}
