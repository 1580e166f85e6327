use std::sync::Arc;

use actix_web::{Responder, get, put, web};
use common::error::Res;
use common::http::Success;
use common::jwt::JwtClaims;
use sqlx::PgPool;

use crate::dtos::auth::{PasswordUpdateRequest, ProfileUpdateRequest};
use crate::services;

/// Endpoint to retrieve the current authenticated user's information.
///
/// # Input
/// - `claims`: The JWT claims extracted from the authentication token
/// - `pool`: A database connection pool for retrieving user data
///
/// # Output
/// - Success: Returns a JSON object with the user's profile information
/// - Error: Returns 401 Unauthorized if no valid token is provided or
///   404 Not Found if the user doesn't exist
#[get("/me")]
async fn get_me(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> impl Responder {
    let user_id = claims.user_id;
    let pg_pool: &PgPool = &**pool;
    let user = services::user::get_user_by_id(pg_pool, user_id).await?;
    Success::ok(user)
}

/// Updates the caller's company name.
#[put("/profile")]
async fn put_profile(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<ProfileUpdateRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user =
        services::user::update_profile(pg_pool, claims.user_id, req.into_inner().company_name)
            .await?;
    Success::ok(user)
}

/// Sets a new password for the caller. Requires the new password twice, at
/// least 6 characters.
#[put("/password")]
async fn put_password(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<PasswordUpdateRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let req = req.into_inner();
    if req.password != req.confirm_password {
        return Err(common::error::AppError::BadRequest(
            "Passwords do not match".to_string(),
        ));
    }
    services::auth::validate_password(&req.password)?;

    let pg_pool: &PgPool = &**pool;
    services::user::update_password(pg_pool, claims.user_id, &req.password).await?;
    Success::ok(serde_json::json!({ "message": "Password updated" }))
}
