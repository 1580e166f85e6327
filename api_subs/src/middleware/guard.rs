use std::{future::Future, pin::Pin, sync::Arc};

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use chrono::Utc;
use futures::future::{Ready, ok};
use sqlx::PgPool;

use common::{error::AppError, jwt::get_jwt_claims_or_error};

use crate::services::status;

/// Feature gate for subscription-bound scopes. A blocked user (expired trial,
/// nothing else granting access) gets 403 before the handler runs. When the
/// evaluation itself fails the request is let through; an outage must not
/// lock paying users out.
pub struct SubscriptionGuard {}

impl SubscriptionGuard {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, B> Transform<S, ServiceRequest> for SubscriptionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = SubscriptionGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SubscriptionGuardService {
            service: Arc::new(service),
        })
    }
}

pub struct SubscriptionGuardService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for SubscriptionGuardService<S>
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
            let claims = match get_jwt_claims_or_error(&req) {
                Ok(claims) => claims,
                Err(response) => return Ok(req.into_response(response)),
            };

            let pool = &***req.app_data::<web::Data<Arc<PgPool>>>().unwrap().clone();
            let pool = pool.clone();

            match status::check_access(&pool, claims.user_id, Utc::now().naive_utc()).await {
                Ok(access) if access.should_block_access => {
                    let response = AppError::Forbidden(
                        "Your free trial has expired. Subscribe to keep using MEI Finance."
                            .to_string(),
                    )
                    .to_http_response();
                    Ok(req.into_response(response))
                }
                Ok(_) => srv.call(req).await.map(|res| res.map_into_boxed_body()),
                Err(e) => {
                    log::warn!("Access check failed, letting request through: {}", e);
                    srv.call(req).await.map(|res| res.map_into_boxed_body())
                }
            }
        })
    }
}
