//! Wire types for the LinkBin REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User profile summary as returned by the server and stored in a session.
///
/// Only `email` is interpreted client-side; any other fields the server
/// returns are carried through opaquely so a persisted session survives
/// server-side profile additions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionUser {
    /// Build a minimal profile from just an email address.
    pub fn from_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// A saved link. Owned entirely by the server; the client never mutates
/// one locally, it only re-fetches the authoritative list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Raw `GET /api/links` response body before normalization.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawLinkList {
    #[serde(default)]
    pub items: Vec<Link>,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// One fetched page of links plus pagination metadata.
///
/// Recomputed wholesale on every fetch; never incrementally patched.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkPage {
    pub items: Vec<Link>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl LinkPage {
    /// Normalize a raw list response for the page that was requested.
    ///
    /// Missing `items` become an empty list and a missing `total_pages`
    /// becomes 1, so the pagination guards always have sane bounds.
    pub fn from_raw(raw: RawLinkList, page: u32, page_size: u32) -> Self {
        Self {
            items: raw.items,
            page,
            page_size,
            total_items: raw.total_items,
            total_pages: raw.total_pages.unwrap_or(1).max(1),
        }
    }
}

/// `POST /auth/login` response body. Both fields are optional on the wire;
/// a missing `access_token` is rejected when the session is built.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}
