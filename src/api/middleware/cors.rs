//! Cross-origin headers.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS layer.
///
/// Every response, errors included, carries `Access-Control-Allow-Origin: *`
/// so browser clients can call the resolver in JSON mode from any page.
/// Preflight requests are answered for `GET`.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
