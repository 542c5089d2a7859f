//! HTTP request handlers for API endpoints.

pub mod health;
pub mod resolve;

pub use health::health_handler;
pub use resolve::resolve_handler;
