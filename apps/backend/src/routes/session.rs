use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::ws::hub::GetSummary;

/// Viewer-independent status of the running session.
async fn session_summary(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let summary = app_state.hub().send(GetSummary).await?;
    Ok(HttpResponse::Ok().json(summary))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/session", web::get().to(session_summary));
}
