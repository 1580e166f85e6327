use chrono::NaiveDateTime;
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::subscription::Subscription;

pub async fn get_by_user_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<Subscription>> {
    sqlx::query_as::<_, Subscription>("SELECT * FROM assinaturas WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Inserts the trial subscription created on registration.
pub async fn insert_trial<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    trial_start: NaiveDateTime,
    trial_end: NaiveDateTime,
) -> Res<Subscription> {
    sqlx::query_as::<_, Subscription>(
        r#"
        INSERT INTO assinaturas (user_id, status, plano, trial_start, trial_end, is_trial_active)
        VALUES ($1, 'teste_gratuito', 'teste_gratuito', $2, $3, TRUE)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(trial_start)
    .bind(trial_end)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Inserts a subscription with an explicit status/plan, used by the admin
/// manual-creation flow.
pub async fn insert_with_status<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    status: &str,
) -> Res<Subscription> {
    sqlx::query_as::<_, Subscription>(
        r#"
        INSERT INTO assinaturas (user_id, status, plano, is_trial_active, subscription_active)
        VALUES ($1, $2, $2, FALSE, TRUE)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(status)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Sets status and plan, creating the row when the user has none yet.
pub async fn upsert_status<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    status: &str,
) -> Res<Subscription> {
    sqlx::query_as::<_, Subscription>(
        r#"
        INSERT INTO assinaturas (user_id, status, plano, is_trial_active, subscription_active)
        VALUES ($1, $2, $2, FALSE, TRUE)
        ON CONFLICT (user_id) DO UPDATE
        SET status = EXCLUDED.status,
            plano = EXCLUDED.plano,
            subscription_active = TRUE
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(status)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn count_by_status<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    status: &str,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM assinaturas WHERE status = $1")
        .bind(status)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

/// Clears the trial flag on trials whose window has closed. Returns how many
/// rows were touched.
pub async fn expire_stale_trials<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    now: NaiveDateTime,
) -> Res<u64> {
    let result = sqlx::query(
        r#"
        UPDATE assinaturas
        SET is_trial_active = FALSE
        WHERE status = 'teste_gratuito'
          AND is_trial_active
          AND trial_end IS NOT NULL
          AND trial_end < $1
        "#,
    )
    .bind(now)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
