use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PartnerActivationRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct PartnerActivationResponse {
    pub message: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}
