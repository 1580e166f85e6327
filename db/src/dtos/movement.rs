use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

pub struct MovementCreateRequest {
    pub user_id: Uuid,
    pub tipo: String,
    pub valor: Decimal,
    pub categoria: String,
    pub descricao: Option<String>,
    pub status: String,
    pub data: NaiveDate,
}

/// Partial update; `None` fields keep their current value.
#[derive(Default)]
pub struct MovementUpdateRequest {
    pub tipo: Option<String>,
    pub valor: Option<Decimal>,
    pub categoria: Option<String>,
    pub descricao: Option<String>,
    pub status: Option<String>,
    pub data: Option<NaiveDate>,
}
