use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::export::PdfExport;

pub async fn insert<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    tipo_relatorio: &str,
) -> Res<PdfExport> {
    sqlx::query_as::<_, PdfExport>(
        r#"
        INSERT INTO exportacoes_pdf (user_id, tipo_relatorio)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(tipo_relatorio)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn count_all<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM exportacoes_pdf")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}
