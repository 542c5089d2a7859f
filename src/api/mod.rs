//! HTTP layer for request/response handling.
//!
//! Translates query strings into resolver calls and shapes the responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and tracing layers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
