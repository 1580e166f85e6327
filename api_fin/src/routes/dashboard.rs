use std::sync::Arc;

use actix_web::{Responder, get, web};
use chrono::Utc;
use common::error::Res;
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;

use crate::services;

/// Dashboard payload: overall totals, the six-month series, top income
/// categories, and the latest entries. Everything is derived from the
/// caller's rows at request time.
#[get("/summary")]
async fn get_summary(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let movements = db::movement::list_by_user(pg_pool, claims.user_id).await?;
    let summary = services::dashboard::summarize(&movements, Utc::now().date_naive());
    Success::ok(summary)
}
