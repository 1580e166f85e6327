use actix_web::{HttpMessage, HttpResponse, dev::ServiceRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    env_config::JwtConfig,
    error::{AppError, Res},
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JwtClaims {
    pub user_id: Uuid,
    pub role: String,
    pub exp: usize,
}

impl JwtClaims {
    pub fn is_admin(&self) -> bool {
        self.role == crate::misc::ROLE_ADMIN
    }
}

pub struct ClaimsSpec {
    pub user_id: Uuid,
    pub role: String,
}

/// Generates JWT token based on user object and JWT configuration options
pub fn generate_jwt(spec: ClaimsSpec, config: &JwtConfig) -> Res<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(config.expiration_hours))
        .expect("valid timestamp")
        .timestamp();

    let claims = JwtClaims {
        user_id: spec.user_id,
        role: spec.role,
        exp: expiration as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(AppError::from)
}

/// Extracts claims object from JWT token.
/// Requires JWT secret.
pub fn validate_jwt(token: &str, secret: &str) -> Res<JwtClaims> {
    let token_data = jsonwebtoken::decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

pub fn get_jwt_claims_or_error(req: &ServiceRequest) -> Result<JwtClaims, HttpResponse> {
    if let Some(jwt_claims_res) = req.extensions().get::<Res<JwtClaims>>() {
        match jwt_claims_res {
            Ok(claims) => Ok(claims.clone()),
            Err(app_error) => Err(app_error.to_http_response()),
        }
    } else {
        Err(
            AppError::Unauthorized("No authorization token provided".to_string())
                .to_http_response(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-for-unit-tests-only".to_string(),
            expiration_hours: 24,
        }
    }

    #[test]
    fn roundtrip_preserves_claims() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let token = generate_jwt(
            ClaimsSpec {
                user_id,
                role: crate::misc::ROLE_ADMIN.to_string(),
            },
            &config,
        )
        .unwrap();

        let claims = validate_jwt(&token, &config.secret).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert!(claims.is_admin());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = test_config();
        let token = generate_jwt(
            ClaimsSpec {
                user_id: Uuid::new_v4(),
                role: crate::misc::ROLE_USER.to_string(),
            },
            &config,
        )
        .unwrap();

        assert!(validate_jwt(&token, "another-secret").is_err());
    }
}
