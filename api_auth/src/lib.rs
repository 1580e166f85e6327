use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{
    cookie::{Key, SameSite},
    web,
};

use middleware::{admin::AdminMiddleware, auth::AuthMiddleware};

pub mod routes {
    pub mod auth;
    pub mod session;
    pub mod user;
}

pub mod middleware {
    pub mod admin;
    pub mod auth;
}

mod services {
    pub(crate) mod auth;
    pub(crate) mod user;
}

mod dtos {
    pub(crate) mod auth;
}

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_register)
        .service(routes::auth::post_login)
        .service(routes::auth::post_logout)
        .service(routes::session::get_session)
}

pub fn mount_user() -> actix_web::Scope {
    web::scope("/user")
        .service(routes::user::get_me)
        .service(routes::user::put_profile)
        .service(routes::user::put_password)
}

/// Requires a valid JWT (extracted earlier in the chain) and exposes the
/// claims to handlers via `web::ReqData<JwtClaims>`.
pub fn auth_middleware() -> AuthMiddleware {
    AuthMiddleware::new()
}

/// Requires the `admin` role on top of a valid JWT.
pub fn admin_middleware() -> AdminMiddleware {
    AdminMiddleware::new()
}

/// Cookie session used by the web app to restore its auth state after a
/// reload. Signing out purges it wholesale.
pub fn session_middleware(
    cookie_secure: bool,
    is_production: bool,
    secret: &[u8],
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::derive_from(secret))
        .cookie_secure(cookie_secure)
        .cookie_same_site(if is_production {
            SameSite::None
        } else {
            SameSite::Lax
        })
        .build()
}
