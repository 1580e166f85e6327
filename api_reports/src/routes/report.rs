use std::sync::Arc;

use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Utc;
use common::error::Res;
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;

use crate::dtos::report::ReportQuery;
use crate::services::pdf::{self, ReportData};
use crate::services::period::Period;
use crate::services::report;

const DEFAULT_PERIOD: &str = "mensal";

/// Entries and totals for the selected window.
///
/// # Input
/// - `period`: `semanal`, `mensal` (default), or `anual`
///
/// # Output
/// - Success: `{ period, label, total_entradas, total_saidas, saldo, movements }`
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/dashboard/reports/?period=mensal', {
///   headers: { 'Authorization': `Bearer ${token}` }
/// });
/// const report = await response.json();
/// renderTotals(report.total_entradas, report.total_saidas, report.saldo);
/// ```
#[get("/")]
async fn get_report(
    claims: web::ReqData<JwtClaims>,
    query: web::Query<ReportQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let period = Period::parse(query.period.as_deref().unwrap_or(DEFAULT_PERIOD))?;
    let pg_pool: &PgPool = &**pool;
    let summary =
        report::build_summary(pg_pool, claims.user_id, period, Utc::now().date_naive()).await?;
    Success::ok(summary)
}

/// Generates the financial statement PDF for the selected window and streams
/// it as a download. The export is recorded first, so the admin counter
/// moves even if the user cancels the download.
#[post("/export")]
async fn post_export(
    claims: web::ReqData<JwtClaims>,
    query: web::Query<ReportQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<HttpResponse> {
    let period = Period::parse(query.period.as_deref().unwrap_or(DEFAULT_PERIOD))?;
    let pg_pool: &PgPool = &**pool;
    let now = Utc::now();

    db::export::insert(
        pg_pool,
        claims.user_id,
        &format!("relatorio_{}", period.as_str()),
    )
    .await?;

    let summary =
        report::build_summary(pg_pool, claims.user_id, period, now.date_naive()).await?;
    let bytes = pdf::render(&ReportData {
        label: &summary.label,
        entradas: summary.total_entradas,
        saidas: summary.total_saidas,
        saldo: summary.saldo,
        movements: &summary.movements,
        generated_at: now.naive_utc(),
    })?;

    let filename = format!(
        "relatorio-{}-{}.pdf",
        period.as_str(),
        now.format("%d-%m-%Y")
    );
    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(bytes))
}
