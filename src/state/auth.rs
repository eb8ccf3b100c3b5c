#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiError;
use crate::net::types::{LoginResponse, SessionUser};
use crate::state::session::Session;

/// Info copy shown after a successful signup, which requires an email
/// confirmation step before a session can exist.
pub const SIGNUP_CONFIRMATION_INFO: &str = "Almost done! We just sent you a confirmation link. \
     Open your email and click the link to finish creating your account.";

/// Which form the auth page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Transient state for the login/signup form. Scoped to the auth page and
/// discarded once a session is established.
#[derive(Clone, Debug, Default)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub submitting: bool,
    pub error: Option<String>,
    pub info: Option<String>,
}

impl AuthFormState {
    /// Switch between login and signup. Ignored mid-submit.
    pub fn toggle_mode(&mut self, mode: AuthMode) {
        if !self.submitting {
            self.mode = mode;
        }
    }

    /// Enter the submitting state, clearing any previous messages.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
        self.info = None;
    }

    /// Leave the submitting state with an error, staying on the same form.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    /// Signup accepted: back to the login form with the confirmation notice.
    /// No session exists yet; the user must follow the emailed link.
    pub fn signup_succeeded(&mut self) {
        self.submitting = false;
        self.mode = AuthMode::Login;
        self.password.clear();
        self.info = Some(SIGNUP_CONFIRMATION_INFO.to_owned());
    }
}

/// Build a session from a login response, falling back to the form email
/// when the server omits the user object.
///
/// # Errors
///
/// `ApiError::InvalidResponse` when the response carries no usable
/// `access_token`.
pub fn session_from_login(resp: LoginResponse, form_email: &str) -> Result<Session, ApiError> {
    let token = resp
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::InvalidResponse)?;
    let user = resp
        .user
        .unwrap_or_else(|| SessionUser::from_email(form_email));
    Ok(Session::new(token, user))
}

/// Build a session from a URL-callback token, preferring the email carried
/// in the callback over whatever is currently typed into the form.
pub fn session_from_callback(token: String, email: Option<String>, form_email: &str) -> Session {
    let email = email.unwrap_or_else(|| form_email.to_owned());
    Session::new(token, SessionUser::from_email(email))
}
