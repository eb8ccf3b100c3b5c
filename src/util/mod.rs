//! Browser-boundary utilities: session persistence, URL callback handling,
//! and display formatting.

pub mod auth_callback;
pub mod format;
pub mod session_store;
