//! Tunnel resolution service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::repositories::TunnelRepository;
use crate::error::AppError;
use crate::utils::url_check::check_proxy_url;

/// Resolves a query string to the proxy URL of a registered tunnel.
///
/// Classifies lookup outcomes into the error taxonomy the API exposes:
/// unknown name, tunnel under maintenance, or a corrupted stored URL.
pub struct ResolverService {
    repository: Arc<dyn TunnelRepository>,
}

impl ResolverService {
    /// Creates a new resolver service over any tunnel store.
    pub fn new(repository: Arc<dyn TunnelRepository>) -> Self {
        Self { repository }
    }

    /// Looks up `query` and returns the proxy URL of the first matching tunnel.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no tunnel matches
    /// - [`AppError::Unavailable`] if the tunnel has an empty or missing proxy URL
    /// - [`AppError::Internal`] if the stored URL is not a valid HTTP(S) URL,
    ///   or on store errors
    pub async fn resolve(&self, query: &str) -> Result<String, AppError> {
        let record = self
            .repository
            .find_by_query(query)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Query ({}) was not found", query)))?;

        debug!(
            "Query {} matched tunnel {} ({})",
            query,
            record.name,
            self.repository.backend()
        );

        let Some(proxy_url) = record.active_url() else {
            warn!("Tunnel {} is under maintenance", record.name);
            return Err(AppError::unavailable("Service is undergoing maintenance"));
        };

        if let Err(e) = check_proxy_url(proxy_url) {
            warn!(
                "Tunnel {} has a malformed proxy url {:?}: {}",
                record.name, proxy_url, e
            );
            return Err(AppError::internal("Failed to parse proxy url"));
        }

        Ok(proxy_url.to_string())
    }

    /// Checks if the underlying store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    /// Name of the configured store backend.
    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TunnelRecord;
    use crate::domain::repositories::MockTunnelRepository;

    fn service_with(record: Option<TunnelRecord>) -> ResolverService {
        let mut mock_repo = MockTunnelRepository::new();
        mock_repo
            .expect_find_by_query()
            .times(1)
            .returning(move |_| Ok(record.clone()));
        mock_repo.expect_backend().return_const("mock");

        ResolverService::new(Arc::new(mock_repo))
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let service = service_with(Some(TunnelRecord::new(
            "demo-app",
            Some("https://demo.tunnel.example.com".to_string()),
        )));

        let url = service.resolve("demo").await.unwrap();
        assert_eq!(url, "https://demo.tunnel.example.com");
    }

    #[tokio::test]
    async fn test_resolve_passes_query_through() {
        let mut mock_repo = MockTunnelRepository::new();
        mock_repo
            .expect_find_by_query()
            .withf(|query| query == "my-app")
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_backend().return_const("mock");

        let service = ResolverService::new(Arc::new(mock_repo));
        let _ = service.resolve("my-app").await;
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let service = service_with(None);

        let result = service.resolve("ghost").await;

        match result {
            Err(AppError::NotFound { message }) => {
                assert_eq!(message, "Query (ghost) was not found");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_maintenance_on_empty_url() {
        let service = service_with(Some(TunnelRecord::new("demo", Some(String::new()))));

        let result = service.resolve("demo").await;
        assert!(matches!(result, Err(AppError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn test_resolve_maintenance_on_missing_url() {
        let service = service_with(Some(TunnelRecord::new("demo", None)));

        let result = service.resolve("demo").await;
        assert!(matches!(result, Err(AppError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn test_resolve_malformed_url() {
        let service = service_with(Some(TunnelRecord::new(
            "demo",
            Some("not-a-url".to_string()),
        )));

        let result = service.resolve("demo").await;

        match result {
            Err(AppError::Internal { message }) => {
                assert_eq!(message, "Failed to parse proxy url");
            }
            other => panic!("expected Internal, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_rejects_non_http_scheme() {
        let service = service_with(Some(TunnelRecord::new(
            "demo",
            Some("ftp://demo.example.com".to_string()),
        )));

        let result = service.resolve("demo").await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_resolve_store_error() {
        let mut mock_repo = MockTunnelRepository::new();
        mock_repo
            .expect_find_by_query()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error")));

        let service = ResolverService::new(Arc::new(mock_repo));

        let result = service.resolve("demo").await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_store_healthy_delegates() {
        let mut mock_repo = MockTunnelRepository::new();
        mock_repo.expect_health_check().times(1).returning(|| false);

        let service = ResolverService::new(Arc::new(mock_repo));
        assert!(!service.store_healthy().await);
    }
}
