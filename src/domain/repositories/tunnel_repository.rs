//! Repository trait for tunnel lookups.

use crate::domain::entities::TunnelRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to registered tunnels.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTunnelRepository`] - substring match in PostgreSQL
/// - [`crate::infrastructure::persistence::RedisTunnelRepository`] - prefix scan in Redis
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TunnelRepository: Send + Sync {
    /// Finds the first tunnel whose name matches `query`.
    ///
    /// Matching is backend-specific: the relational store matches `query` anywhere
    /// in the name, the cache store matches names starting with `query`. When several
    /// records match, whichever the store yields first is returned.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(TunnelRecord))` if a record matched
    /// - `Ok(None)` if nothing matched
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_query(&self, query: &str) -> Result<Option<TunnelRecord>, AppError>;

    /// Checks if the backing store is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name used in logs and health output.
    fn backend(&self) -> &'static str;
}
