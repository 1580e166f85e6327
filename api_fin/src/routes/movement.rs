use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::error::Res;
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::movement::{CategoryCatalog, MovementCreate, MovementQuery, MovementUpdate};
use crate::services;

/// Lists the caller's cash-flow entries, newest first.
///
/// # Input
/// - `query`: optional `start` and `end` dates (inclusive) to filter a period
///
/// # Output
/// - Success: JSON array of entries
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/dashboard/fin/movements?start=2026-03-01&end=2026-03-31', {
///   headers: { 'Authorization': `Bearer ${token}` }
/// });
/// const movements = await response.json();
/// ```
#[get("/movements")]
async fn get_movements(
    claims: web::ReqData<JwtClaims>,
    query: web::Query<MovementQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let movements =
        services::movement::list(pg_pool, claims.user_id, query.start, query.end).await?;
    Success::ok(movements)
}

/// Records a new entry. The category must belong to the catalog for the
/// given direction and the amount must be positive.
#[post("/movements")]
async fn post_movement(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<MovementCreate>,
    pool: web::Data<Arc<PgPool>>,
) -> impl Responder {
    let pg_pool: &PgPool = &**pool;
    let movement = services::movement::create(pg_pool, claims.user_id, req.into_inner()).await?;
    Ok::<_, common::error::AppError>(Success::created(movement))
}

/// Partially updates one of the caller's entries.
#[put("/movements/{id}")]
async fn put_movement(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<MovementUpdate>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let movement =
        services::movement::update(pg_pool, claims.user_id, path.into_inner(), req.into_inner())
            .await?;
    Success::ok(movement)
}

/// Deletes one of the caller's entries.
#[delete("/movements/{id}")]
async fn delete_movement(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::movement::delete(pg_pool, claims.user_id, path.into_inner()).await?;
    Success::ok(serde_json::json!({ "message": "Movement deleted" }))
}

/// The category catalog the entry form renders, one list per direction.
#[get("/categories")]
async fn get_categories() -> Res<impl Responder> {
    Success::ok(CategoryCatalog {
        entrada: services::movement::ENTRADA_CATEGORIES.to_vec(),
        saida: services::movement::SAIDA_CATEGORIES.to_vec(),
    })
}
