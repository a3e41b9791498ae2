//! Background page prewarming.
//!
//! Initialises a [`JobScheduler`] at server startup and registers a
//! recurring job that regenerates every configured locale's homepage, so
//! pages are warm before the first visitor and stale entries get replaced
//! even on quiet locales.

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use vitrine_commerce::RequestContext;

use crate::api::AppState;

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process — dropping it shuts down all jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the job cannot be registered, or the scheduler fails to start.
pub async fn build_scheduler(state: AppState) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    register_prewarm_job(&scheduler, state).await?;

    scheduler.start().await?;
    Ok(scheduler)
}

/// Register the per-minute prewarm job. One minute is deliberately coarser
/// than the revalidate window: visitor-triggered refreshes cover the hot
/// path, this job only keeps cold locales from serving very old pages.
async fn register_prewarm_job(
    scheduler: &JobScheduler,
    state: AppState,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            run_prewarm_job(&state).await;
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}

/// Regenerate every configured locale, continuing past individual failures.
async fn run_prewarm_job(state: &AppState) {
    for locale in &state.locales.locales {
        if !state.cache.try_begin_refresh(&locale.code).await {
            // A visitor-triggered refresh is already in flight.
            continue;
        }

        let ctx = RequestContext {
            locale: locale.code.clone(),
            preview: false,
            channel_id: locale.channel_id.clone(),
        };
        match crate::api::home::regenerate(state, &ctx).await {
            Ok(_) => tracing::debug!(locale = %locale.code, "scheduler: prewarm complete"),
            Err(e) => {
                tracing::warn!(locale = %locale.code, error = %e, "scheduler: prewarm failed");
            }
        }
        state.cache.end_refresh(&locale.code).await;
    }
}
