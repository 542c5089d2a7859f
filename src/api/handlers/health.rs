//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store probe failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "backend": "postgres",
///   "checks": {
///     "store": { "status": "ok", "message": "postgres reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let service = &state.resolver_service;
    let backend = service.backend();

    let store = if service.store_healthy().await {
        CheckStatus::ok(format!("{} reachable", backend))
    } else {
        CheckStatus::error(format!("{} unreachable", backend))
    };

    let checks = HealthChecks { store };
    let status = if checks.store.ok { "healthy" } else { "degraded" };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        backend,
        checks,
    };

    if response.is_healthy() {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
