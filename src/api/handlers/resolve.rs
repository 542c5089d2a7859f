//! Handler for tunnel name resolution.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::api::dto::resolve::{ResolveQuery, ResolveResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::redirect_params::{append_query, decode_params, flatten_params};

const MISSING_QUERY: &str = "Invalid parameters provided. Requires query parameter";
const MALFORMED_QUERY: &str = "Invalid parameters provided. Malformed query string";
const INVALID_PARAMS: &str =
    "Invalid JSON encountered. params requires base64 encoded JSON object";

/// Resolves a tunnel name and redirects to (or describes) its proxy URL.
///
/// # Endpoint
///
/// `GET /?query=<name>[&params=<base64 json>][&redirect=<true|yes|...>]`
/// (also served at `/resolve`)
///
/// # Request Flow
///
/// 1. Require a non-empty `query` (a repeated key keeps its last value)
/// 2. Decode `params` (base64 JSON object) into a query string, if given
/// 3. Look up the first tunnel matching `query`
/// 4. Return 302 to the proxy URL (extra params appended), or 200 JSON
///    `{"proxyUrl": ...}` when redirect mode is off
///
/// # Errors
///
/// - 400 Bad Request: missing `query`, or `params` is not a base64 JSON object
/// - 404 Not Found: no tunnel matches
/// - 503 Service Unavailable: tunnel is under maintenance
/// - 500 Internal Server Error: stored proxy URL is malformed, or store failure
pub async fn resolve_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(pairs) = query.map_err(|e| {
        warn!("Rejected query string: {}", e);
        AppError::bad_request(MALFORMED_QUERY)
    })?;
    let request: ResolveQuery = pairs.into_iter().collect();

    let Some(name) = request.query() else {
        return Err(AppError::bad_request(MISSING_QUERY));
    };

    let extra_query = match request.encoded_params() {
        Some(encoded) => {
            let params = decode_params(encoded).map_err(|e| {
                warn!("Rejected params for query {}: {}", name, e);
                AppError::bad_request(INVALID_PARAMS)
            })?;
            Some(flatten_params(&params))
        }
        None => None,
    };

    let proxy_url = state.resolver_service.resolve(name).await?;

    if !request.should_redirect() {
        debug!("Resolved {} -> {} (json)", name, proxy_url);
        return Ok(Json(ResolveResponse { proxy_url }).into_response());
    }

    let location = match extra_query {
        Some(extra) => append_query(&proxy_url, &extra),
        None => proxy_url,
    };

    let location = HeaderValue::from_str(&location).map_err(|e| {
        warn!("Proxy url {:?} is not a valid header value: {}", location, e);
        AppError::internal("Failed to parse proxy url")
    })?;

    debug!("Resolved {} -> {:?} (redirect)", name, location);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
