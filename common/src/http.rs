use actix_web::{HttpRequest, HttpResponse, Responder, body::BoxBody, http::StatusCode};
use serde::Serialize;

use crate::error::Res;

/// JSON success envelope used by route handlers. Serializes the payload
/// as-is and sets the matching status code.
pub struct Success<T> {
    status: StatusCode,
    body: T,
}

impl<T: Serialize> Success<T> {
    /// 200 OK, pre-wrapped in `Res` so it can sit in tail position of a
    /// handler that propagates errors with `?`.
    pub fn ok(body: T) -> Res<Self> {
        Ok(Success {
            status: StatusCode::OK,
            body,
        })
    }

    /// 201 Created.
    pub fn created(body: T) -> Self {
        Success {
            status: StatusCode::CREATED,
            body,
        }
    }
}

impl<T: Serialize> Responder for Success<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(self.status).json(&self.body)
    }
}
