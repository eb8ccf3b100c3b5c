//! REST API operations and shared response handling.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into a single human-readable message. Non-success
//! responses are parsed as JSON when the `content-type` says so (plain text
//! otherwise) and the message is derived from `detail` / `message` fields
//! with a status-code fallback. No structured error codes leak upward.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{LinkPage, LoginResponse, SessionUser};

/// Error surfaced by any API operation. Displays as exactly one message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// Non-success HTTP status; message derived per the normalization rules.
    #[error("{0}")]
    Server(String),
    /// A success response whose body is not in the expected shape.
    #[error("Invalid response from server")]
    InvalidResponse,
    /// Browser-only operation invoked outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Remote API base URL, fixed at build time via `LINKBIN_API_BASE`.
pub fn base_url() -> &'static str {
    option_env!("LINKBIN_API_BASE").unwrap_or("http://localhost:8000")
}

/// Interpret a response body: JSON when the `content-type` indicates it,
/// otherwise the raw text wrapped as `{"message": text}`.
pub fn parse_body(content_type: Option<&str>, text: &str) -> Value {
    if content_type.is_some_and(|ct| ct.contains("application/json")) {
        if let Ok(value) = serde_json::from_str(text) {
            return value;
        }
    }
    serde_json::json!({ "message": text })
}

/// Derive the user-facing message for a non-success response.
///
/// Priority: joined `detail[].msg` entries, then a `detail` string, then a
/// non-empty `message` string, then the status-code fallback.
pub fn error_message(status: u16, body: &Value) -> String {
    if let Some(detail) = body.get("detail") {
        if let Some(entries) = detail.as_array() {
            let joined = entries
                .iter()
                .map(|entry| {
                    entry
                        .get("msg")
                        .and_then(Value::as_str)
                        .map_or_else(|| entry.to_string(), str::to_owned)
                })
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return joined;
            }
        } else if let Some(text) = detail.as_str() {
            return text.to_owned();
        }
    }

    if let Some(message) = body.get("message").and_then(Value::as_str) {
        if !message.is_empty() {
            return message.to_owned();
        }
    }

    format!("Request failed with status {status}")
}

/// Send a built request and normalize the response per the module rules.
#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<Value, ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let content_type = resp.headers().get("content-type");
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = parse_body(content_type.as_deref(), &text);

    if resp.ok() {
        Ok(body)
    } else {
        Err(ApiError::Server(error_message(resp.status(), &body)))
    }
}

/// Register a new account via `POST /auth/signup`.
///
/// The success body is server-defined (it may carry an `error` field even on
/// a 2xx status); callers inspect it rather than this layer.
///
/// # Errors
///
/// Transport failures and non-success statuses, normalized to one message.
pub async fn signup(email: &str, password: &str) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let request = gloo_net::http::Request::post(&format!("{}/auth/signup", base_url()))
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        send(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Authenticate via `POST /auth/login`.
///
/// # Errors
///
/// Transport failures, non-success statuses, and bodies that are not a JSON
/// object (`ApiError::InvalidResponse`).
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let request = gloo_net::http::Request::post(&format!("{}/auth/login", base_url()))
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let value = send(request).await?;
        serde_json::from_value(value).map_err(|_| ApiError::InvalidResponse)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the current user's profile via `GET /me`.
///
/// # Errors
///
/// Transport failures, non-success statuses, and non-object bodies.
pub async fn get_me(token: &str) -> Result<SessionUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&format!("{}/me", base_url()))
            .header("Authorization", &format!("Bearer {token}"))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let value = send(request).await?;
        serde_json::from_value(value).map_err(|_| ApiError::InvalidResponse)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of links via `GET /api/links`, normalized into a
/// [`LinkPage`] for the page that was requested.
///
/// # Errors
///
/// Transport failures, non-success statuses, and non-object bodies.
pub async fn get_links(token: &str, page: u32, page_size: u32) -> Result<LinkPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/api/links?page={page}&page_size={page_size}",
            base_url()
        );
        let request = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let value = send(request).await?;
        let raw: super::types::RawLinkList =
            serde_json::from_value(value).map_err(|_| ApiError::InvalidResponse)?;
        Ok(LinkPage::from_raw(raw, page, page_size))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, page, page_size);
        Err(ApiError::Unavailable)
    }
}

/// Create a link via `POST /api/links`. Returns the created resource as the
/// server represents it; callers re-fetch the list rather than trusting it.
///
/// # Errors
///
/// Transport failures and non-success statuses, normalized to one message.
pub async fn create_link(token: &str, title: &str, url: &str) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "title": title, "url": url });
        let request = gloo_net::http::Request::post(&format!("{}/api/links", base_url()))
            .header("Authorization", &format!("Bearer {token}"))
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        send(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, title, url);
        Err(ApiError::Unavailable)
    }
}
