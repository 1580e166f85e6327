use uuid::Uuid;

pub struct ContactCreateRequest {
    pub user_id: Uuid,
    pub nome: String,
    pub contato: Option<String>,
    pub observacoes: Option<String>,
}
