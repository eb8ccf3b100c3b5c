#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::SessionUser;
use crate::util::session_store;

/// The authenticated identity of the current user: a bearer token plus a
/// profile summary.
///
/// A session is either fully present or absent; `Option<Session>` at the app
/// root is the only representation of "not logged in", so partial state is
/// unrepresentable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn new(token: impl Into<String>, user: SessionUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// Handle for the app-wide session slot, provided via context from the root.
///
/// Both authentication producers (form submit and the URL-callback path)
/// write through [`SessionHandle::establish`] and logout goes through
/// [`SessionHandle::sign_out`], so the in-memory signal and the persisted
/// slot never diverge.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    signal: RwSignal<Option<Session>>,
}

impl SessionHandle {
    /// Create the handle at startup, restoring any persisted session so a
    /// page reload stays logged in.
    pub fn restore() -> Self {
        Self {
            signal: RwSignal::new(session_store::restore()),
        }
    }

    /// Reactive read of the current session.
    pub fn get(&self) -> Option<Session> {
        self.signal.get()
    }

    /// Non-reactive read, for capturing the token at mount time.
    pub fn get_untracked(&self) -> Option<Session> {
        self.signal.get_untracked()
    }

    /// Persist a freshly produced session and make it current.
    pub fn establish(&self, session: Session) {
        session_store::save(&session);
        self.signal.set(Some(session));
    }

    /// Clear the persisted slot and drop the in-memory session, returning
    /// the UI to the auth page.
    pub fn sign_out(&self) {
        session_store::clear();
        self.signal.set(None);
    }
}
