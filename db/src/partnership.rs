use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::partnership::{ActivationCreateRequest, CodeCreateRequest},
    models::partnership::{ActivePartnership, PartnerCode},
};

pub async fn get_code<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    codigo: &str,
) -> Res<Option<PartnerCode>> {
    sqlx::query_as::<_, PartnerCode>("SELECT * FROM codigos_parceria WHERE codigo = $1")
        .bind(codigo)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Atomically claims one use of an active code that still has capacity.
/// Returns `None` when the code is unknown, inactive, or exhausted — the
/// check and the increment are a single statement, so two concurrent
/// activations can never both take the last slot.
pub async fn claim_code_use<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    codigo: &str,
) -> Res<Option<PartnerCode>> {
    sqlx::query_as::<_, PartnerCode>(
        r#"
        UPDATE codigos_parceria
        SET uso_atual = uso_atual + 1
        WHERE codigo = $1
          AND ativo
          AND (uso_maximo IS NULL OR uso_atual < uso_maximo)
        RETURNING *
        "#,
    )
    .bind(codigo)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_activation<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: ActivationCreateRequest,
) -> Res<ActivePartnership> {
    sqlx::query_as::<_, ActivePartnership>(
        r#"
        INSERT INTO parcerias_ativas (user_id, codigo_id, codigo_usado)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.codigo_id)
    .bind(data.codigo_usado)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn exists_activation_for_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM parcerias_ativas WHERE user_id = $1)",
    )
    .bind(user_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_codes<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<PartnerCode>> {
    sqlx::query_as::<_, PartnerCode>("SELECT * FROM codigos_parceria ORDER BY created_at DESC")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_code<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: CodeCreateRequest,
) -> Res<PartnerCode> {
    sqlx::query_as::<_, PartnerCode>(
        r#"
        INSERT INTO codigos_parceria (codigo, descricao, uso_maximo, ativo)
        VALUES ($1, $2, $3, TRUE)
        RETURNING *
        "#,
    )
    .bind(data.codigo)
    .bind(data.descricao)
    .bind(data.uso_maximo)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn set_code_active<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    code_id: Uuid,
    ativo: bool,
) -> Res<Option<PartnerCode>> {
    sqlx::query_as::<_, PartnerCode>(
        "UPDATE codigos_parceria SET ativo = $1 WHERE id = $2 RETURNING *",
    )
    .bind(ativo)
    .bind(code_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn count_activations<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM parcerias_ativas")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}
