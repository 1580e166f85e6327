use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client or supplier record; both tables share this shape.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub user_id: Uuid,
    pub nome: String,
    pub contato: Option<String>,
    pub observacoes: Option<String>,
    pub created_at: NaiveDateTime,
}
