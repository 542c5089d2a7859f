//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and Redis tunnel stores

pub mod persistence;
