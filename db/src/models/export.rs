use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct PdfExport {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tipo_relatorio: String,
    pub data_exportacao: NaiveDateTime,
}
