use actix_web::web;

pub mod routes {
    pub mod contact;
    pub mod dashboard;
    pub mod movement;
}

pub mod services {
    pub mod dashboard;
    pub mod movement;
}

mod dtos {
    pub(crate) mod contact;
    pub(crate) mod dashboard;
    pub(crate) mod movement;
}

pub fn mount_fin() -> actix_web::Scope {
    web::scope("/fin")
        .service(routes::movement::get_movements)
        .service(routes::movement::post_movement)
        .service(routes::movement::put_movement)
        .service(routes::movement::delete_movement)
        .service(routes::movement::get_categories)
        .service(routes::dashboard::get_summary)
        .service(routes::contact::get_clients)
        .service(routes::contact::post_client)
        .service(routes::contact::put_client)
        .service(routes::contact::delete_client)
        .service(routes::contact::get_suppliers)
        .service(routes::contact::post_supplier)
        .service(routes::contact::put_supplier)
        .service(routes::contact::delete_supplier)
}
