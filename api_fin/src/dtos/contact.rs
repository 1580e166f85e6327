use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub nome: String,
    pub contato: Option<String>,
    pub observacoes: Option<String>,
}
