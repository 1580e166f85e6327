use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct MovementCreate {
    pub tipo: String,
    pub valor: Decimal,
    pub categoria: String,
    pub descricao: Option<String>,
    pub status: String,
    pub data: NaiveDate,
}

/// Partial update; omitted fields stay as they are.
#[derive(Debug, Deserialize)]
pub struct MovementUpdate {
    pub tipo: Option<String>,
    pub valor: Option<Decimal>,
    pub categoria: Option<String>,
    pub descricao: Option<String>,
    pub status: Option<String>,
    pub data: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct MovementQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCatalog {
    pub entrada: Vec<&'static str>,
    pub saida: Vec<&'static str>,
}
