//! API route configuration.
//!
//! All routes are public; there is no authentication layer.

use crate::api::handlers::{health_handler, resolve_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Resolver and health routes.
///
/// # Endpoints
///
/// - `GET /`         - Resolve `?query=` to a redirect or JSON
/// - `GET /resolve`  - Same as `/`
/// - `GET /health`   - Store connectivity check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(resolve_handler))
        .route("/resolve", get(resolve_handler))
        .route("/health", get(health_handler))
}
