//! Shared application state.

use std::sync::Arc;

use crate::application::services::ResolverService;
use crate::domain::repositories::TunnelRepository;

/// State injected into every handler.
///
/// Cloning is cheap: the service and the store connection behind it are shared.
#[derive(Clone)]
pub struct AppState {
    pub resolver_service: Arc<ResolverService>,
}

impl AppState {
    /// Builds the state around a tunnel store.
    pub fn new(repository: Arc<dyn TunnelRepository>) -> Self {
        Self {
            resolver_service: Arc::new(ResolverService::new(repository)),
        }
    }
}
