use std::sync::Arc;

use actix_web::{Responder, get, post, put, web};
use common::error::Res;
use common::http::Success;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::admin::{CodeCreate, CodeUpdate};
use crate::services;

/// All partnership codes, newest first, with their usage counters.
#[get("/codes")]
async fn get_codes(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let codes = services::codes::list_codes(pg_pool).await?;
    Success::ok(codes)
}

/// Creates a partnership code, optionally capped at a maximum number of
/// activations.
#[post("/codes")]
async fn post_code(
    req: web::Json<CodeCreate>,
    pool: web::Data<Arc<PgPool>>,
) -> impl Responder {
    let pg_pool: &PgPool = &**pool;
    let code = services::codes::create_code(pg_pool, req.into_inner()).await?;
    Ok::<_, common::error::AppError>(Success::created(code))
}

/// Activates or deactivates a code.
#[put("/codes/{id}")]
async fn put_code(
    path: web::Path<Uuid>,
    req: web::Json<CodeUpdate>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let code = services::codes::set_code_active(pg_pool, path.into_inner(), req.ativo).await?;
    Success::ok(code)
}
