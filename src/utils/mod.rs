//! Helpers used by the resolver handler and service.
//!
//! - [`redirect_params`] - Decoding and flattening of the `params` blob
//! - [`url_check`] - Proxy URL validation

pub mod redirect_params;
pub mod url_check;
