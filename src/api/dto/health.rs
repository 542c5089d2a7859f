//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
///
/// `status` is `healthy` when every check is `ok`, `degraded` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Which tunnel store serves lookups (`postgres` or `redis`).
    pub backend: &'static str,
    pub checks: HealthChecks,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.checks.store.ok
    }
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: CheckStatus,
}

/// Result of a single component probe.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    #[serde(skip)]
    pub ok: bool,
    pub status: &'static str,
    pub message: String,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            status: "ok",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            status: "error",
            message: message.into(),
        }
    }
}
