mod cors;

use actix_web::{
    App, HttpServer,
    web::{self},
};
use common::env_config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();
    let cookie_secure = !origin.contains("localhost");

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    // promote the configured admin account, if any
    if let Some(admin_email) = config.admin_email.clone() {
        match db::user::promote_admin_by_email(&*pool, admin_email.clone()).await {
            Ok(true) => log::info!("Admin role active for {}", admin_email),
            Ok(false) => log::warn!("ADMIN_EMAIL is set but no account matches {}", admin_email),
            Err(e) => log::error!("Failed to promote admin account: {}", e),
        }
    }

    // background trial expiry
    sweeper::spawn(pool.clone(), config.sweep_interval_secs);

    HttpServer::new(move || {
        let secret = config_data.jwt_config.secret.as_bytes();
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .wrap(limiter::global_middleware(10)) // max 10 requests per second
            .wrap(logger::middleware()) // 4th
            .wrap(extractor::middleware()) // 3rd
            .wrap(cors::middleware(&origin)) // 2nd
            .wrap(api_auth::session_middleware(
                cookie_secure,
                is_production,
                secret,
            )) // 1st
            .service(
                web::scope("/api")
                    .service(api_auth::mount_auth())
                    .service(
                        web::scope("/dashboard")
                            .wrap(api_auth::auth_middleware())
                            .service(api_auth::mount_user())
                            .service(api_subs::mount_subs())
                            .service(
                                // feature scopes sit behind the subscription guard
                                web::scope("")
                                    .wrap(api_subs::guard_middleware())
                                    .service(api_fin::mount_fin())
                                    .service(api_reports::mount_reports()),
                            ),
                    )
                    .service(api_admin::mount_admin().wrap(api_auth::admin_middleware())),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
