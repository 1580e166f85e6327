use std::{future::Future, pin::Pin, sync::Arc};

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures::future::{Ready, ok};

use common::{error::AppError, jwt::get_jwt_claims_or_error};

/// Admin gate: a valid JWT whose role claim is `admin`. The role lives in the
/// token, so no per-request user lookup is needed.
pub struct AdminMiddleware {}

impl AdminMiddleware {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = AdminMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminMiddlewareService {
            service: Arc::new(service),
        })
    }
}

pub struct AdminMiddlewareService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            match get_jwt_claims_or_error(&req) {
                Ok(claims) if claims.is_admin() => {
                    req.extensions_mut().insert(claims);
                    srv.call(req).await.map(|res| res.map_into_boxed_body())
                }
                Ok(_) => {
                    let response = AppError::Forbidden(
                        "Administrator access required".to_string(),
                    )
                    .to_http_response();
                    Ok(req.into_response(response))
                }
                Err(response) => Ok(req.into_response(response)),
            }
        })
    }
}
