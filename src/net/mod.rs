//! REST API client for the LinkBin server.
//!
//! `types` holds the wire shapes, `api` the request plumbing and the
//! error-normalization rules shared by every operation.

pub mod api;
pub mod types;
