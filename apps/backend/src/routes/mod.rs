use actix_web::{web, HttpRequest};

use crate::error::AppError;

pub mod health;
pub mod realtime;
pub mod session;

/// Configure application routes.
///
/// `main.rs` and the integration tests share this so both serve the same
/// paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Session status: /api/session
    cfg.service(web::scope("/api").configure(session::configure_routes));

    // WebSocket upgrade: /ws
    cfg.configure(realtime::configure_routes);

    cfg.default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::not_found(format!("No route for {}", req.path())))
}
