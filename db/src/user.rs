use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::user::UserCreateRequest,
    models::user::{AuthCredentials, User, UserWithAccess},
};

pub async fn exists_user_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: String,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_user_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: String,
) -> Res<User> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_user_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<User> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: UserCreateRequest,
) -> Res<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, company_name, role)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.email)
    .bind(data.company_name)
    .bind(data.role)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_user_credentials<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: AuthCredentials,
) -> Res<()> {
    sqlx::query(
        r#"
        INSERT INTO auth_credentials (user_id, password_hash)
        VALUES ($1, $2)
        "#,
    )
    .bind(data.user_id)
    .bind(data.password_hash)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn update_password_hash<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    password_hash: String,
) -> Res<()> {
    sqlx::query("UPDATE auth_credentials SET password_hash = $1 WHERE user_id = $2")
        .bind(password_hash)
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn update_company_name<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    company_name: Option<String>,
) -> Res<User> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET company_name = $1, updated_at = now() WHERE id = $2 RETURNING *",
    )
    .bind(company_name)
    .bind(user_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Promotes the account with the given email to the admin role. No-op when
/// the account does not exist yet.
pub async fn promote_admin_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: String,
) -> Res<bool> {
    let result = sqlx::query("UPDATE users SET role = 'admin' WHERE email = $1")
        .bind(email)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn get_user_with_password_hash<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: String,
) -> Res<(User, AuthCredentials)> {
    #[derive(sqlx::FromRow)]
    struct Row {
        #[sqlx(flatten)]
        user: User,
        password_hash: String,
    }

    sqlx::query_as::<_, Row>(
        r#"
        SELECT u.*, ac.password_hash
        FROM users u
        JOIN auth_credentials ac ON u.id = ac.user_id
        WHERE u.email = $1
        "#,
    )
    .bind(email)
    .fetch_one(executor)
    .await
    .map(|row| {
        let credentials = AuthCredentials {
            user_id: row.user.id,
            password_hash: row.password_hash,
        };
        (row.user, credentials)
    })
    .map_err(AppError::from)
}

pub async fn count_users<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

/// Users joined with subscription status and the manual-release flag, newest
/// first. Feeds the admin management table.
pub async fn list_users_with_access<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<UserWithAccess>> {
    sqlx::query_as::<_, UserWithAccess>(
        r#"
        SELECT u.id, u.email, u.company_name, u.created_at,
               a.status, a.plano, ul.liberado
        FROM users u
        LEFT JOIN assinaturas a ON a.user_id = u.id
        LEFT JOIN usuarios_liberados ul ON ul.user_id = u.id
        ORDER BY u.created_at DESC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
