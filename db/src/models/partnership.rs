use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct PartnerCode {
    pub id: Uuid,
    pub codigo: String,
    pub descricao: Option<String>,
    pub ativo: bool,
    pub uso_atual: i32,
    pub uso_maximo: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ActivePartnership {
    pub id: Uuid,
    pub user_id: Uuid,
    pub codigo_id: Option<Uuid>,
    pub codigo_usado: String,
    pub data_ativacao: NaiveDateTime,
}
