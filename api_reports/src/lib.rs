use actix_web::web;

pub mod routes {
    pub mod report;
}

pub mod services {
    pub mod pdf;
    pub mod period;
    pub mod report;
}

mod dtos {
    pub(crate) mod report;
}

pub fn mount_reports() -> actix_web::Scope {
    web::scope("/reports")
        .service(routes::report::get_report)
        .service(routes::report::post_export)
}
