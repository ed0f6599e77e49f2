use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{header, StatusCode};
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{debug, error, info, warn, Level};

/// What a request is for, as far as logging cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    /// Liveness polls; logged at debug when healthy.
    Health,
    /// WebSocket handshake. Logged when the upgrade completes, not when the
    /// socket closes.
    Upgrade,
    Api,
}

impl RequestKind {
    fn classify(path: &str, upgrade: Option<&str>) -> Self {
        if upgrade.is_some_and(|value| value.eq_ignore_ascii_case("websocket")) {
            RequestKind::Upgrade
        } else if path == "/health" {
            RequestKind::Health
        } else {
            RequestKind::Api
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            RequestKind::Health => "health",
            RequestKind::Upgrade => "ws_upgrade",
            RequestKind::Api => "api",
        }
    }
}

fn level_for(kind: RequestKind, status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else if kind == RequestKind::Health {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// One log line per request, levelled by status class and request kind.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let kind = RequestKind::classify(
            &path,
            req.headers()
                .get(header::UPGRADE)
                .and_then(|value| value.to_str().ok()),
        );
        let peer = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            let level = level_for(kind, status);
            let duration_us = start.elapsed().as_micros() as u64;

            macro_rules! request_completed {
                ($log:ident) => {
                    $log!(
                        http.method = %method,
                        url.path = %path,
                        http.status_code = status.as_u16(),
                        request.kind = kind.as_str(),
                        duration_us,
                        client.address = %peer,
                        "request_completed"
                    )
                };
            }

            if level == Level::ERROR {
                request_completed!(error);
            } else if level == Level::WARN {
                request_completed!(warn);
            } else if level == Level::INFO {
                request_completed!(info);
            } else {
                request_completed!(debug);
            }

            result
        })
    }
}
