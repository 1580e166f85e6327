use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Movement {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tipo: String,
    pub valor: Decimal,
    pub categoria: String,
    pub descricao: Option<String>,
    pub status: String,
    pub data: NaiveDate,
    pub created_at: NaiveDateTime,
}
