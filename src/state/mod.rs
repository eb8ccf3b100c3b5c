//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `links`, `profile`) so
//! individual pages and components can depend on small focused models.
//! Only the session lives at the app root; form and feed state are scoped
//! to the page that owns them.

pub mod auth;
pub mod links;
pub mod profile;
pub mod session;
