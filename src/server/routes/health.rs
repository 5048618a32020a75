//! Health check endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    database: &'static str,
    timestamp: String,
}

/// Basic health check endpoint
///
/// 200 when the data store answers, 503 otherwise.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let timestamp = chrono::Utc::now().to_rfc3339();
    if state.catalog.is_reachable().await {
        Ok(HttpResponse::Ok().json(HealthStatus {
            status: "healthy",
            database: "connected",
            timestamp,
        }))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(HealthStatus {
            status: "unhealthy",
            database: "disconnected",
            timestamp,
        }))
    }
}
