//! Health check endpoint.

use std::time::Duration;

use actix_web::{HttpResponse, http::StatusCode, web};
use serde::Serialize;

use crate::state::AppState;

const STORE_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub store: &'static str,
}

/// Health check endpoint - returns server and store status.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store_ok = match tokio::time::timeout(STORE_CHECK_TIMEOUT, state.posts.count()).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            tracing::warn!("Store health check failed: {}", e);
            false
        }
        Err(_) => {
            tracing::warn!("Store health check timed out");
            false
        }
    };

    let (status_code, status, store) = if store_ok {
        (StatusCode::OK, "ok", "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
    };

    HttpResponse::build(status_code).json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        store,
    })
}
