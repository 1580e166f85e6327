use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use common::error::{AppError, Res};
use db::models::user::User;
use sqlx::PgPool;

use crate::dtos::auth::LoginRequest;

/// Minimum accepted password length, matching the web app's form rule.
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_password(password: &str) -> Res<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Authenticates existing user.
/// If user does not exist, returns 400.
/// If the password does not match the stored hash, returns 401.
///
/// # Arguments
///
/// * `pool` - A reference to the database connection pool.
/// * `login_data` - The login data.
///
/// # Returns
///
/// A `Result` containing the `User` object or an `AppError` if an error occurs.
pub async fn authenticate_user(pool: &PgPool, login_data: &LoginRequest) -> Res<User> {
    let (user, credentials) = db::user::get_user_with_password_hash(pool, login_data.email.clone())
        .await
        .map_err(|_| AppError::BadRequest("User with this email does not exist".to_string()))?;

    let parsed_hash = PasswordHash::new(&credentials.password_hash).unwrap();
    let is_valid = Argon2::default()
        .verify_password(login_data.password.as_bytes(), &parsed_hash)
        .is_ok();

    if is_valid {
        Ok(user)
    } else {
        Err(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_passwords_are_rejected() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn six_characters_is_enough() {
        assert!(validate_password("123456").is_ok());
    }
}
