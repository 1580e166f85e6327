use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub company_name: Option<String>,
    pub role: String,
    pub verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct AuthCredentials {
    pub user_id: Uuid,
    pub password_hash: String,
}

/// Row for the admin management table: user joined with its subscription
/// state and manual-release flag.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct UserWithAccess {
    pub id: Uuid,
    pub email: String,
    pub company_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub status: Option<String>,
    pub plano: Option<String>,
    pub liberado: Option<bool>,
}
