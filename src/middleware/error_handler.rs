use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::{JsonPayloadError, QueryPayloadError},
    Error, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::core::AppError;

/// Middleware that logs failed requests for monitoring
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let method = req.method().clone();
        let path = req.path().to_string();

        Box::pin(async move {
            let result = service.call(req).await;

            match &result {
                Err(err) => {
                    tracing::error!(method = %method, path = %path, "Request error: {:?}", err);
                }
                Ok(res) => {
                    if let Some(err) = res.response().error() {
                        let status = res.status();
                        if status.is_server_error() {
                            tracing::error!(method = %method, path = %path, status = %status, "{}", err);
                        } else {
                            tracing::warn!(method = %method, path = %path, status = %status, "{}", err);
                        }
                    }
                }
            }

            result
        })
    }
}

/// Map malformed JSON bodies to a 400 in the standard error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    AppError::validation(format!("Invalid JSON body: {}", err)).into()
}

/// Map malformed query strings to a 400 in the standard error shape
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    AppError::validation(format!("Invalid query string: {}", err)).into()
}
