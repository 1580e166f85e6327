use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, password_hash::PasswordHasher};
use chrono::{Duration, Utc};
use common::env_config::Config;
use common::error::Res;
use common::misc;
use db::dtos::user::UserCreateRequest;
use db::models::user::{AuthCredentials, User};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::auth::RegisterRequest;

pub async fn exists_user_by_email(pool: &PgPool, email: String) -> Res<bool> {
    db::user::exists_user_by_email(pool, email).await
}
pub async fn get_user_by_id(pool: &PgPool, user_id: Uuid) -> Res<User> {
    db::user::get_user_by_id(pool, user_id).await
}

pub fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

/// Inserts the user record, credentials, and the trial subscription in one
/// transaction. A failure after the user insert rolls everything back, so no
/// half-created account can be left behind.
pub async fn create_user_with_credentials(
    pool: &PgPool,
    req: &RegisterRequest,
    config: &Config,
) -> Res<User> {
    let mut tx = pool.begin().await?;

    // insert user
    let user = db::user::insert_user(
        &mut *tx,
        UserCreateRequest {
            email: req.email.clone(),
            company_name: req.company_name.clone(),
            role: misc::ROLE_USER.to_string(),
        },
    )
    .await?;

    // insert credentials
    db::user::insert_user_credentials(
        &mut *tx,
        AuthCredentials {
            user_id: user.id,
            password_hash: hash_password(&req.password),
        },
    )
    .await?;

    // start the free trial
    let trial_start = Utc::now().naive_utc();
    let trial_end = trial_start + Duration::days(config.trial_days);
    db::subscription::insert_trial(&mut *tx, user.id, trial_start, trial_end).await?;

    tx.commit().await?;
    Ok(user)
}

pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    company_name: Option<String>,
) -> Res<User> {
    db::user::update_company_name(pool, user_id, company_name).await
}

pub async fn update_password(pool: &PgPool, user_id: Uuid, password: &str) -> Res<()> {
    db::user::update_password_hash(pool, user_id, hash_password(password)).await
}
