use std::sync::Arc;

use actix_web::{Responder, get, web};
use common::error::Res;
use common::http::Success;
use sqlx::PgPool;

use crate::services;

/// Panel counters: user totals per plan, partnerships, movements, and PDF
/// exports.
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/admin/metrics', {
///   headers: { 'Authorization': `Bearer ${adminToken}` }
/// });
/// const metrics = await response.json();
/// renderCards(metrics);
/// ```
#[get("/metrics")]
async fn get_metrics(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let metrics = services::metrics::gather(pg_pool).await?;
    Success::ok(metrics)
}
