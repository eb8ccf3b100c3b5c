//! Durable session persistence backed by a single localStorage slot.
//!
//! The slot holds the serialized `Session` as JSON. It is read once at
//! startup, written on every successful authentication, and removed on
//! logout. Storage failures are logged and swallowed; persistence problems
//! never surface in the UI and the app carries on with in-memory state.

use crate::state::session::Session;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "linkbin_auth";

/// Read and parse the stored session.
///
/// Returns `None` outside the browser, when the slot is empty, or when the
/// stored value fails to parse (the failure is logged, never thrown).
pub fn restore() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("failed to parse stored session: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write the session to the slot.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Ok(json) = serde_json::to_string(session) else {
            return;
        };
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Err(err) = storage.set_item(STORAGE_KEY, &json) {
                log::warn!("failed to persist session: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove the slot.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Err(err) = storage.remove_item(STORAGE_KEY) {
                log::warn!("failed to clear persisted session: {err:?}");
            }
        }
    }
}
