use actix_session::Session;
use actix_web::{Responder, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::{self, ClaimsSpec};
use sqlx::PgPool;
use std::sync::Arc;

use crate::dtos::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::services;

/// Registers a new user with email and password authentication and starts
/// the free trial.
///
/// # Input
/// - `req`: JSON payload containing email, password, and optional company name
/// - `pool`: Database connection pool
/// - `config`: Application configuration
///
/// # Output
/// - Success: Returns a token plus the created user with 201 Created status
/// - Error: Returns 400 Bad Request if the email already exists or the
///   password is shorter than 6 characters
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/auth/register', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json'
///   },
///   body: JSON.stringify({
///     email: 'user@example.com',
///     password: 'securepassword',
///     company_name: 'Doces da Maria' // Optional
///   })
/// });
///
/// if (response.ok) {
///   const { token, user } = await response.json();
///   localStorage.setItem('authToken', token);
/// }
/// ```
#[post("/register")]
async fn post_register(
    req: web::Json<RegisterRequest>,
    pool: web::Data<Arc<sqlx::PgPool>>,
    config: web::Data<Arc<Config>>,
) -> impl Responder {
    let pg_pool: &PgPool = &**pool;

    services::auth::validate_password(&req.password)?;
    let email_exists = services::user::exists_user_by_email(pg_pool, req.email.clone()).await?;
    if email_exists {
        return Err(AppError::BadRequest(
            "User with this email already exists".to_string(),
        ));
    }

    let user =
        services::user::create_user_with_credentials(pg_pool, &req.into_inner(), &config).await?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            role: user.role.clone(),
        },
        &config.jwt_config,
    )?;
    Ok(Success::created(AuthResponse { token, user }))
}

/// Authenticates a user with email and password.
///
/// # Input
/// - `login_data`: JSON payload containing email and password
/// - `config`: Application configuration for JWT generation
/// - `pool`: Database connection pool
/// - `session`: Cookie session mirroring the auth state for reload restore
///
/// # Output
/// - Success: Returns an auth response with JWT token and user details
/// - Error: Returns 401 Unauthorized for invalid credentials
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/auth/login', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json'
///   },
///   body: JSON.stringify({
///     email: 'user@example.com',
///     password: 'securepassword'
///   })
/// });
///
/// if (response.ok) {
///   const authData = await response.json();
///   localStorage.setItem('authToken', authData.token);
/// }
/// ```
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
    session: Session,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = services::auth::authenticate_user(pg_pool, &login_data.into_inner()).await?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            role: user.role.clone(),
        },
        &config.jwt_config,
    )?;

    let user_string = serde_json::to_string(&user).unwrap();
    session
        .insert("token", &token)
        .map_err(|_| AppError::Internal("Failed to insert token cookie".to_string()))?;
    session
        .insert("user", &user_string)
        .map_err(|_| AppError::Internal("Failed to insert user cookie".to_string()))?;

    Success::ok(AuthResponse { token, user })
}

/// Signs the user out by purging the whole session.
#[post("/logout")]
pub async fn post_logout(session: Session) -> Res<impl Responder> {
    session.purge();
    Success::ok(serde_json::json!({ "message": "Signed out" }))
}
