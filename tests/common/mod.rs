#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Request;
use axum::routing::IntoMakeService;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use std::sync::Arc;
use tower_http::normalize_path::NormalizePath;
use tunnel_resolver::domain::entities::TunnelRecord;
use tunnel_resolver::domain::repositories::TunnelRepository;
use tunnel_resolver::error::AppError;
use tunnel_resolver::routes::app_router;
use tunnel_resolver::state::AppState;

/// Substring-matching store kept in memory, records checked in insertion order.
pub struct InMemoryTunnelRepository {
    records: Vec<TunnelRecord>,
    healthy: bool,
    failing: bool,
}

impl InMemoryTunnelRepository {
    pub fn new(records: Vec<TunnelRecord>) -> Self {
        Self {
            records,
            healthy: true,
            failing: false,
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            records: Vec::new(),
            healthy: false,
            failing: true,
        }
    }
}

#[async_trait]
impl TunnelRepository for InMemoryTunnelRepository {
    async fn find_by_query(&self, query: &str) -> Result<Option<TunnelRecord>, AppError> {
        if self.failing {
            return Err(AppError::internal("Database error"));
        }

        Ok(self
            .records
            .iter()
            .find(|record| record.name.contains(query))
            .cloned())
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

pub fn tunnel(name: &str, url: &str) -> TunnelRecord {
    TunnelRecord::new(name, Some(url.to_string()))
}

/// The production router (CORS, tracing, path normalization) over `repository`.
pub fn create_test_app(
    repository: InMemoryTunnelRepository,
) -> IntoMakeService<NormalizePath<Router>> {
    let state = AppState::new(Arc::new(repository));

    ServiceExt::<Request>::into_make_service(app_router(state))
}

pub fn create_test_server(records: Vec<TunnelRecord>) -> TestServer {
    TestServer::new(create_test_app(InMemoryTunnelRepository::new(records))).unwrap()
}
