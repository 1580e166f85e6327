use common::error::Res;
use common::misc::SubscriptionStatus;
use sqlx::PgPool;

use crate::dtos::admin::AdminMetrics;

/// Collects the panel counters. Independent count queries; nothing is cached
/// between requests.
pub async fn gather(pool: &PgPool) -> Res<AdminMetrics> {
    let total_users = db::user::count_users(pool).await?;
    let trial_users =
        db::subscription::count_by_status(pool, SubscriptionStatus::TesteGratuito.as_str()).await?;
    let premium_users =
        db::subscription::count_by_status(pool, SubscriptionStatus::Premium.as_str()).await?;
    let released_users = db::access::count_released(pool).await?;
    let partnership_users = db::partnership::count_activations(pool).await?;
    let total_movements = db::movement::count_all(pool).await?;
    let total_pdf_exports = db::export::count_all(pool).await?;

    Ok(AdminMetrics {
        total_users,
        trial_users,
        premium_users,
        released_users,
        partnership_users,
        total_movements,
        total_pdf_exports,
    })
}
