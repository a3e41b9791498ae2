mod api;
mod cache;
mod fetch;
mod middleware;
mod render;
mod scheduler;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};
use crate::cache::PageCache;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(vitrine_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let locales = Arc::new(vitrine_core::load_locales(&config.locales_path)?);
    if !locales.contains(&config.default_locale) {
        anyhow::bail!(
            "default locale {} is not in {}",
            config.default_locale,
            config.locales_path.display()
        );
    }

    let client = Arc::new(vitrine_commerce::StorefrontClient::from_config(&config)?);
    let cache = PageCache::new(Duration::from_secs(config.revalidate_secs));

    let state = AppState {
        config: Arc::clone(&config),
        client,
        locales,
        cache,
    };

    let _scheduler = scheduler::build_scheduler(state.clone()).await?;

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "vitrine listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
