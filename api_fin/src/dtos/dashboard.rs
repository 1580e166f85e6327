use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_entradas: Decimal,
    pub total_saidas: Decimal,
    pub saldo: Decimal,
    pub monthly: Vec<MonthlyPoint>,
    pub categories: Vec<CategorySlice>,
    pub recent: Vec<RecentEntry>,
}

/// One bar pair of the six-month chart.
#[derive(Debug, Serialize, PartialEq)]
pub struct MonthlyPoint {
    pub month: &'static str,
    pub entradas: Decimal,
    pub saidas: Decimal,
}

/// One slice of the income-by-category chart (top four).
#[derive(Debug, Serialize, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub value: Decimal,
}

#[derive(Debug, Serialize)]
pub struct RecentEntry {
    pub id: Uuid,
    pub description: String,
    pub tipo: String,
    pub valor: Decimal,
    pub data: NaiveDate,
    pub status: String,
}
