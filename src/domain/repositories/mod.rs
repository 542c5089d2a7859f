//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`TunnelRepository`] - Tunnel lookup by (partial) name

pub mod tunnel_repository;

pub use tunnel_repository::TunnelRepository;

#[cfg(test)]
pub use tunnel_repository::MockTunnelRepository;
