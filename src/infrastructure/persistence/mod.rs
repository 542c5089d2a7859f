//! Tunnel store implementations.
//!
//! Both stores implement [`crate::domain::repositories::TunnelRepository`]; which one
//! serves requests is chosen by `STORE_BACKEND` at startup.
//!
//! # Repositories
//!
//! - [`PgTunnelRepository`] - Substring match over a PostgreSQL table
//! - [`RedisTunnelRepository`] - Prefix scan over a namespaced Redis set

pub mod pg_tunnel_repository;
pub mod redis_tunnel_repository;

pub use pg_tunnel_repository::PgTunnelRepository;
pub use redis_tunnel_repository::RedisTunnelRepository;
