use actix_web::web;

use middleware::guard::SubscriptionGuard;

pub mod routes {
    pub mod sub;
}

pub mod services {
    pub mod partner;
    pub mod status;
}

pub mod models {
    pub mod status;
}

mod dtos {
    pub(crate) mod sub;
}

pub mod middleware {
    pub mod guard;
}

pub fn mount_subs() -> actix_web::Scope {
    web::scope("/sub")
        .service(routes::sub::get_status)
        .service(routes::sub::get_checkout)
        .service(routes::sub::post_partner)
}

/// Blocks feature scopes for users whose trial ran out without a
/// subscription. Evaluation errors fail open.
pub fn guard_middleware() -> SubscriptionGuard {
    SubscriptionGuard::new()
}
