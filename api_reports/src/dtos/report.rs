use db::models::movement::Movement;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub period: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub period: String,
    pub label: String,
    pub total_entradas: Decimal,
    pub total_saidas: Decimal,
    pub saldo: Decimal,
    pub movements: Vec<Movement>,
}
