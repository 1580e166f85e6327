use serde::{Deserialize, Serialize};

/// Counters for the admin panel header cards.
#[derive(Debug, Serialize)]
pub struct AdminMetrics {
    pub total_users: i64,
    pub trial_users: i64,
    pub premium_users: i64,
    pub released_users: i64,
    pub partnership_users: i64,
    pub total_movements: i64,
    pub total_pdf_exports: i64,
}

#[derive(Debug, Deserialize)]
pub struct AdminUserCreate {
    pub nome: String,
    pub email: String,
    pub password: String,
    pub plano: String,
}

#[derive(Debug, Deserialize)]
pub struct ReleaseRequest {
    pub motivo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CodeCreate {
    pub codigo: String,
    pub descricao: Option<String>,
    pub uso_maximo: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct CodeUpdate {
    pub ativo: bool,
}
