use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use chrono::Utc;
use common::env_config::Config;
use common::error::Res;
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;

use crate::dtos::sub::{CheckoutResponse, PartnerActivationRequest, PartnerActivationResponse};
use crate::services;

/// Returns the caller's access picture: trial state, days remaining, and
/// whether features should be blocked.
///
/// # Output
/// - Success: `{ has_active_trial, has_active_subscription,
///   trial_days_remaining, trial_expired, should_block_access }`
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/dashboard/sub/status', {
///   headers: { 'Authorization': `Bearer ${token}` }
/// });
/// const status = await response.json();
/// if (status.should_block_access) {
///   showUpgradeScreen();
/// } else if (status.has_active_trial && status.trial_days_remaining <= 1) {
///   showTrialEndingBanner(status.trial_days_remaining);
/// }
/// ```
#[get("/status")]
async fn get_status(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let status =
        services::status::check_access(pg_pool, claims.user_id, Utc::now().naive_utc()).await?;
    Success::ok(status)
}

/// Hands the web app the external checkout link for the monthly plan. The
/// link is opened in a new tab; nothing flows back to this server.
#[get("/checkout")]
async fn get_checkout(config: web::Data<Arc<Config>>) -> Res<impl Responder> {
    Success::ok(CheckoutResponse {
        url: config.payment_link_url.clone(),
    })
}

/// Activates a partnership code for the caller, switching the subscription
/// to `parceiro`.
///
/// # Output
/// - Success: confirmation message plus the normalized code
/// - Error: 400 for unknown, inactive, or exhausted codes
#[post("/partner")]
async fn post_partner(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<PartnerActivationRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let code = services::partner::activate_code(pg_pool, claims.user_id, &req.code).await?;
    Success::ok(PartnerActivationResponse {
        message: "Partnership activated".to_string(),
        code: code.codigo,
    })
}
