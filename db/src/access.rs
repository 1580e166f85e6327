use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::access::ReleasedUser;

pub async fn get_release_for_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<ReleasedUser>> {
    sqlx::query_as::<_, ReleasedUser>("SELECT * FROM usuarios_liberados WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Grants (or re-grants) manual access. One row per user; releasing again
/// refreshes the reason and timestamp.
pub async fn upsert_release<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    released_by: Option<Uuid>,
    motivo: String,
) -> Res<ReleasedUser> {
    sqlx::query_as::<_, ReleasedUser>(
        r#"
        INSERT INTO usuarios_liberados (user_id, liberado, liberado_por, motivo, data_liberacao)
        VALUES ($1, TRUE, $2, $3, now())
        ON CONFLICT (user_id) DO UPDATE
        SET liberado = TRUE,
            liberado_por = EXCLUDED.liberado_por,
            motivo = EXCLUDED.motivo,
            data_liberacao = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(released_by)
    .bind(motivo)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn revoke_release<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<bool> {
    let result = sqlx::query("UPDATE usuarios_liberados SET liberado = FALSE WHERE user_id = $1")
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_released<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM usuarios_liberados WHERE liberado")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}
