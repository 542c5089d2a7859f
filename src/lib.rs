//! # Tunnel Resolver
//!
//! Resolves short, human-memorable tunnel names to their public proxy URLs and
//! redirects callers there, backed by PostgreSQL or Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Tunnel entity and repository trait
//! - **Application Layer** ([`application`]) - Resolution rules
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and Redis stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Request
//!
//! ```text
//! GET /?query=demo                         -> 302 Location: https://demo.tunnel.example.com
//! GET /?query=demo&redirect=no             -> 200 {"proxyUrl":"https://demo.tunnel.example.com"}
//! GET /?query=demo&params=eyJhIjoiMSJ9     -> 302 Location: https://demo.tunnel.example.com?a=1
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_HOST="localhost" DB_USER="tunnel" DB_PASS="secret"
//! cargo run
//!
//! # or, against Redis
//! STORE_BACKEND=redis cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::ResolverService;
    pub use crate::domain::entities::TunnelRecord;
    pub use crate::domain::repositories::TunnelRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
