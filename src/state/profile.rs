#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::SessionUser;

/// Profile slice of the dashboard: who to show in the header.
///
/// Seeded from the session's user so something sensible renders while the
/// best-effort `GET /me` fetch is in flight.
#[derive(Clone, Debug)]
pub struct ProfileState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl ProfileState {
    pub fn from_session_user(user: Option<SessionUser>) -> Self {
        Self {
            user,
            loading: true,
        }
    }

    /// Email shown in the header pill, with fallbacks: the freshest profile,
    /// then the email captured at login, then a loading placeholder, then
    /// a generic label.
    pub fn display_email(&self, login_email: Option<&str>) -> String {
        if let Some(user) = &self.user {
            if !user.email.is_empty() {
                return user.email.clone();
            }
        }
        if let Some(email) = login_email {
            if !email.is_empty() {
                return email.to_owned();
            }
        }
        if self.loading {
            "Loading…".to_owned()
        } else {
            "User".to_owned()
        }
    }
}
