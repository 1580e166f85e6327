use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{dtos::contact::ContactCreateRequest, models::contact::Contact};

/// Which contact table to hit. Table names cannot be bound as parameters, so
/// every query matches on this to pick its SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Cliente,
    Fornecedor,
}

pub async fn list_by_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    kind: ContactKind,
    user_id: Uuid,
) -> Res<Vec<Contact>> {
    let sql = match kind {
        ContactKind::Cliente => {
            "SELECT * FROM clientes WHERE user_id = $1 ORDER BY created_at DESC"
        }
        ContactKind::Fornecedor => {
            "SELECT * FROM fornecedores WHERE user_id = $1 ORDER BY created_at DESC"
        }
    };
    sqlx::query_as::<_, Contact>(sql)
        .bind(user_id)
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    kind: ContactKind,
    data: ContactCreateRequest,
) -> Res<Contact> {
    let sql = match kind {
        ContactKind::Cliente => {
            r#"
            INSERT INTO clientes (user_id, nome, contato, observacoes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        }
        ContactKind::Fornecedor => {
            r#"
            INSERT INTO fornecedores (user_id, nome, contato, observacoes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        }
    };
    sqlx::query_as::<_, Contact>(sql)
        .bind(data.user_id)
        .bind(data.nome)
        .bind(data.contato)
        .bind(data.observacoes)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn update<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    kind: ContactKind,
    id: Uuid,
    user_id: Uuid,
    data: ContactCreateRequest,
) -> Res<Option<Contact>> {
    let sql = match kind {
        ContactKind::Cliente => {
            r#"
            UPDATE clientes SET nome = $1, contato = $2, observacoes = $3
            WHERE id = $4 AND user_id = $5
            RETURNING *
            "#
        }
        ContactKind::Fornecedor => {
            r#"
            UPDATE fornecedores SET nome = $1, contato = $2, observacoes = $3
            WHERE id = $4 AND user_id = $5
            RETURNING *
            "#
        }
    };
    sqlx::query_as::<_, Contact>(sql)
        .bind(data.nome)
        .bind(data.contato)
        .bind(data.observacoes)
        .bind(id)
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn delete<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    kind: ContactKind,
    id: Uuid,
    user_id: Uuid,
) -> Res<bool> {
    let sql = match kind {
        ContactKind::Cliente => "DELETE FROM clientes WHERE id = $1 AND user_id = $2",
        ContactKind::Fornecedor => "DELETE FROM fornecedores WHERE id = $1 AND user_id = $2",
    };
    let result = sqlx::query(sql)
        .bind(id)
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
