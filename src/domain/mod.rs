//! Domain layer containing the tunnel entity and repository contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Resolution rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
