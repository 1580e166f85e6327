use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::env_config::Config;
use common::error::Res;
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::admin::{AdminUserCreate, ReleaseRequest};
use crate::services;

/// Users joined with their subscription status and release flag, for the
/// management table.
#[get("/users")]
async fn get_users(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let users = services::users::list_users(pg_pool).await?;
    Success::ok(users)
}

/// Manually creates an account with the given plan.
///
/// # Input
/// - `req`: `{ nome, email, password, plano }` where plano is one of
///   `teste_gratuito`, `premium`, `parceiro`, `liberado`
///
/// # Output
/// - Success: the created user with 201 Created
/// - Error: 400 for an unknown plan or duplicate email
#[post("/users")]
async fn post_user(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<AdminUserCreate>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
) -> impl Responder {
    let pg_pool: &PgPool = &**pool;
    let user =
        services::users::create_user(pg_pool, claims.user_id, req.into_inner(), &config).await?;
    Ok::<_, common::error::AppError>(Success::created(user))
}

/// Grants manual access to a user, independent of subscription state.
#[post("/users/{id}/release")]
async fn post_release(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<ReleaseRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let release = services::users::release_user(
        pg_pool,
        claims.user_id,
        path.into_inner(),
        req.into_inner().motivo,
    )
    .await?;
    Success::ok(release)
}

/// Revokes a previously granted manual access.
#[post("/users/{id}/revoke")]
async fn post_revoke(path: web::Path<Uuid>, pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::users::revoke_user(pg_pool, path.into_inner()).await?;
    Success::ok(serde_json::json!({ "message": "Access revoked" }))
}
