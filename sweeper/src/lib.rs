use std::{sync::Arc, time::Duration};

use chrono::Utc;
use sqlx::PgPool;

/// Spawns the background task that expires stale trials.
///
/// Clears `is_trial_active` on every trial whose window has closed. Access
/// checks evaluate the trial window live, so this is bookkeeping rather than
/// gating.
pub fn spawn(pool: Arc<PgPool>, interval_secs: u64) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        // first tick fires immediately; skip it so startup stays quiet
        ticker.tick().await;

        loop {
            ticker.tick().await;
            match db::subscription::expire_stale_trials(&*pool, Utc::now().naive_utc()).await {
                Ok(0) => {}
                Ok(expired) => log::info!("Trial sweep expired {} subscription(s)", expired),
                Err(e) => log::error!("Trial sweep failed: {}", e),
            }
        }
    });
}
