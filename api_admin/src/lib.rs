use actix_web::web;

pub mod routes {
    pub mod codes;
    pub mod metrics;
    pub mod users;
}

mod services {
    pub(crate) mod codes;
    pub(crate) mod metrics;
    pub(crate) mod users;
}

mod dtos {
    pub(crate) mod admin;
}

pub fn mount_admin() -> actix_web::Scope {
    web::scope("/admin")
        .service(routes::metrics::get_metrics)
        .service(routes::users::get_users)
        .service(routes::users::post_user)
        .service(routes::users::post_release)
        .service(routes::users::post_revoke)
        .service(routes::codes::get_codes)
        .service(routes::codes::post_code)
        .service(routes::codes::put_code)
}
