use chrono::NaiveDate;
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    dtos::movement::{MovementCreateRequest, MovementUpdateRequest},
    models::movement::Movement,
};

pub async fn list_by_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<Movement>> {
    sqlx::query_as::<_, Movement>(
        "SELECT * FROM movimentacoes WHERE user_id = $1 ORDER BY data DESC, created_at DESC",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_by_user_in_range<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> Res<Vec<Movement>> {
    sqlx::query_as::<_, Movement>(
        r#"
        SELECT * FROM movimentacoes
        WHERE user_id = $1 AND data >= $2 AND data <= $3
        ORDER BY data DESC, created_at DESC
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
) -> Res<Option<Movement>> {
    sqlx::query_as::<_, Movement>("SELECT * FROM movimentacoes WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: MovementCreateRequest,
) -> Res<Movement> {
    sqlx::query_as::<_, Movement>(
        r#"
        INSERT INTO movimentacoes (user_id, tipo, valor, categoria, descricao, status, data)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.tipo)
    .bind(data.valor)
    .bind(data.categoria)
    .bind(data.descricao)
    .bind(data.status)
    .bind(data.data)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Applies only the fields present in the update; scoped to the owner so a
/// user cannot touch someone else's entry.
pub async fn update<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
    user_id: Uuid,
    data: MovementUpdateRequest,
) -> Res<Option<Movement>> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE movimentacoes SET ");
    let mut any = false;

    let mut set = |qb: &mut QueryBuilder<Postgres>, any: &mut bool, column: &str| {
        if *any {
            qb.push(", ");
        }
        qb.push(column).push(" = ");
        *any = true;
    };

    if let Some(tipo) = data.tipo {
        set(&mut qb, &mut any, "tipo");
        qb.push_bind(tipo);
    }
    if let Some(valor) = data.valor {
        set(&mut qb, &mut any, "valor");
        qb.push_bind(valor);
    }
    if let Some(categoria) = data.categoria {
        set(&mut qb, &mut any, "categoria");
        qb.push_bind(categoria);
    }
    if let Some(descricao) = data.descricao {
        set(&mut qb, &mut any, "descricao");
        qb.push_bind(descricao);
    }
    if let Some(status) = data.status {
        set(&mut qb, &mut any, "status");
        qb.push_bind(status);
    }
    if let Some(date) = data.data {
        set(&mut qb, &mut any, "data");
        qb.push_bind(date);
    }

    if !any {
        return get_by_id(executor, id).await;
    }

    qb.push(" WHERE id = ").push_bind(id);
    qb.push(" AND user_id = ").push_bind(user_id);
    qb.push(" RETURNING *");

    qb.build_query_as::<Movement>()
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn delete<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    id: Uuid,
    user_id: Uuid,
) -> Res<bool> {
    let result = sqlx::query("DELETE FROM movimentacoes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_all<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movimentacoes")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}
