//! Core domain entities.
//!
//! - [`TunnelRecord`] - A tunnel name and its public proxy URL
//!
//! Records are owned by an external registration system; this crate only reads them.

pub mod tunnel;

pub use tunnel::TunnelRecord;
