use std::{env, sync::Arc};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// Holds everything needed to initialize and run the service: database
/// connection details, JWT configuration, server host and port, worker count,
/// CORS settings, logging preferences, the external payment link handed to
/// blocked users, and the trial/sweeper parameters.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The URL of the database to connect to.
    pub database_url: String,
    /// Configuration for JWT (JSON Web Token) authentication.
    pub jwt_config: JwtConfig,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS (Cross-Origin Resource Sharing).
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// External checkout link opened by the web app when a blocked user
    /// decides to subscribe. No webhook flows back from it.
    pub payment_link_url: String,
    /// Email promoted to the admin role at startup, if present.
    pub admin_email: Option<String>,
    /// Length of the free trial granted on registration, in days.
    pub trial_days: i64,
    /// How often the background sweeper expires stale trials, in seconds.
    pub sweep_interval_secs: u64,
}

#[derive(Clone, Debug)]
/// Configuration for JSON Web Token (JWT) authentication.
pub struct JwtConfig {
    /// The secret key used to sign and verify JWTs.
    pub secret: String,
    /// The expiration time for JWTs in hours.
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// Creates a new `JwtConfig` instance from environment variables.
    ///
    /// - `JWT_SECRET`: Required. The secret key for JWT signing.
    /// - `JWT_EXPIRATION_HOURS`: Optional. Defaults to 24 hours.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or `JWT_EXPIRATION_HOURS` is set but
    /// not a valid number.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        JwtConfig {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("JWT_EXPIRATION_HOURS must be a valid number"),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// Required:
    /// - `ENVIRONMENT`: "development" or "production"
    /// - `DATABASE_URL`: Connection string for the database
    /// - `JWT_SECRET`: Secret key for JWT signing (via `JwtConfig::from_env()`)
    ///
    /// Optional (with defaults):
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "http://localhost:3000")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `PAYMENT_LINK_URL`: Checkout link for blocked users
    /// - `ADMIN_EMAIL`: Account promoted to the admin role at startup
    /// - `TRIAL_DAYS`: Free trial length (default: 3)
    /// - `SWEEP_INTERVAL_SECS`: Trial sweeper cadence (default: 300)
    ///
    /// # Panics
    ///
    /// Panics if required environment variables are missing or numeric values
    /// cannot be parsed.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        Arc::new(Config {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_config: JwtConfig::from_env(),
            server_host: env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            num_workers: env::var("WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            console_logging_enabled: env::var("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                == "true",
            payment_link_url: env::var("PAYMENT_LINK_URL").unwrap_or_else(|_| {
                "mailto:meifinancebr@gmail.com?subject=Quero assinar o MEI Finance".to_string()
            }),
            admin_email: env::var("ADMIN_EMAIL").ok(),
            trial_days: env::var("TRIAL_DAYS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .expect("TRIAL_DAYS must be a valid number"),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .expect("SWEEP_INTERVAL_SECS must be a valid number"),
        })
    }
}
