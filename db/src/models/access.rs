use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// Manual allow-list entry granting access independent of subscription.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ReleasedUser {
    pub id: Uuid,
    pub user_id: Uuid,
    pub liberado: bool,
    pub liberado_por: Option<Uuid>,
    pub motivo: Option<String>,
    pub data_liberacao: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}
