//! Top-level pages.

pub mod dashboard;
pub mod login;
