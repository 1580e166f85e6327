use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, password_hash::PasswordHasher};
use chrono::{Duration, Utc};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::misc::{self, SubscriptionStatus};
use db::dtos::user::UserCreateRequest;
use db::models::access::ReleasedUser;
use db::models::user::{AuthCredentials, User, UserWithAccess};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::admin::AdminUserCreate;

const MANUAL_CREATION_REASON: &str = "Manually created by administrator";
const DEFAULT_RELEASE_REASON: &str = "Released by administrator";

pub async fn list_users(pool: &PgPool) -> Res<Vec<UserWithAccess>> {
    db::user::list_users_with_access(pool).await
}

/// Creates an account on behalf of a user: user row, credentials, and the
/// subscription for the chosen plan, all in one transaction — a failure
/// halfway leaves nothing behind. `liberado` plans additionally get an
/// allow-list entry.
pub async fn create_user(
    pool: &PgPool,
    admin_id: Uuid,
    req: AdminUserCreate,
    config: &Config,
) -> Res<User> {
    let status = SubscriptionStatus::from_str(&req.plano)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown plan: {}", req.plano)))?;

    if db::user::exists_user_by_email(pool, req.email.clone()).await? {
        return Err(AppError::BadRequest(
            "User with this email already exists".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    let user = db::user::insert_user(
        &mut *tx,
        UserCreateRequest {
            email: req.email,
            company_name: Some(req.nome),
            role: misc::ROLE_USER.to_string(),
        },
    )
    .await?;

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(req.password.as_bytes(), &salt)
        .unwrap()
        .to_string();
    db::user::insert_user_credentials(
        &mut *tx,
        AuthCredentials {
            user_id: user.id,
            password_hash,
        },
    )
    .await?;

    match status {
        SubscriptionStatus::TesteGratuito => {
            let trial_start = Utc::now().naive_utc();
            let trial_end = trial_start + Duration::days(config.trial_days);
            db::subscription::insert_trial(&mut *tx, user.id, trial_start, trial_end).await?;
        }
        other => {
            db::subscription::insert_with_status(&mut *tx, user.id, other.as_str()).await?;
        }
    }

    if status == SubscriptionStatus::Liberado {
        db::access::upsert_release(
            &mut *tx,
            user.id,
            Some(admin_id),
            MANUAL_CREATION_REASON.to_string(),
        )
        .await?;
    }

    tx.commit().await?;
    Ok(user)
}

pub async fn release_user(
    pool: &PgPool,
    admin_id: Uuid,
    user_id: Uuid,
    motivo: Option<String>,
) -> Res<ReleasedUser> {
    // make sure the target exists so the allow-list cannot collect strays
    db::user::get_user_by_id(pool, user_id)
        .await
        .map_err(|_| AppError::NotFound("User not found".to_string()))?;

    db::access::upsert_release(
        pool,
        user_id,
        Some(admin_id),
        motivo.unwrap_or_else(|| DEFAULT_RELEASE_REASON.to_string()),
    )
    .await
}

pub async fn revoke_user(pool: &PgPool, user_id: Uuid) -> Res<()> {
    let revoked = db::access::revoke_release(pool, user_id).await?;
    if !revoked {
        return Err(AppError::NotFound(
            "User has no manual release to revoke".to_string(),
        ));
    }
    Ok(())
}
