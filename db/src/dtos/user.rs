pub struct UserCreateRequest {
    pub email: String,
    pub company_name: Option<String>,
    pub role: String,
}
