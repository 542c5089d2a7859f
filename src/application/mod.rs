//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Query to proxy URL resolution

pub mod services;
