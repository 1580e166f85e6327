use uuid::Uuid;

pub struct CodeCreateRequest {
    pub codigo: String,
    pub descricao: Option<String>,
    pub uso_maximo: Option<i32>,
}

pub struct ActivationCreateRequest {
    pub user_id: Uuid,
    pub codigo_id: Uuid,
    pub codigo_usado: String,
}
