use super::*;

// =============================================================
// AuthFormState transitions
// =============================================================

#[test]
fn auth_form_defaults_to_login_mode() {
    let state = AuthFormState::default();
    assert_eq!(state.mode, AuthMode::Login);
    assert!(!state.submitting);
    assert!(state.error.is_none());
    assert!(state.info.is_none());
}

#[test]
fn toggle_mode_switches_forms() {
    let mut state = AuthFormState::default();
    state.toggle_mode(AuthMode::Signup);
    assert_eq!(state.mode, AuthMode::Signup);
    state.toggle_mode(AuthMode::Login);
    assert_eq!(state.mode, AuthMode::Login);
}

#[test]
fn toggle_mode_ignored_while_submitting() {
    let mut state = AuthFormState::default();
    state.begin_submit();
    state.toggle_mode(AuthMode::Signup);
    assert_eq!(state.mode, AuthMode::Login);
}

#[test]
fn begin_submit_clears_previous_messages() {
    let mut state = AuthFormState {
        error: Some("old error".to_owned()),
        info: Some("old info".to_owned()),
        ..AuthFormState::default()
    };
    state.begin_submit();
    assert!(state.submitting);
    assert!(state.error.is_none());
    assert!(state.info.is_none());
}

#[test]
fn fail_returns_to_pre_submit_state_with_error() {
    let mut state = AuthFormState::default();
    state.begin_submit();
    state.fail("wrong password");
    assert!(!state.submitting);
    assert_eq!(state.error.as_deref(), Some("wrong password"));
    assert_eq!(state.mode, AuthMode::Login);
}

#[test]
fn signup_success_returns_to_login_with_info_and_no_password() {
    let mut state = AuthFormState {
        mode: AuthMode::Signup,
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
        ..AuthFormState::default()
    };
    state.begin_submit();
    state.signup_succeeded();

    assert!(!state.submitting);
    assert_eq!(state.mode, AuthMode::Login);
    assert!(state.password.is_empty());
    assert_eq!(state.email, "a@b.com");
    assert_eq!(state.info.as_deref(), Some(SIGNUP_CONFIRMATION_INFO));
}

// =============================================================
// Session construction
// =============================================================

#[test]
fn login_response_with_user_builds_full_session() {
    let resp = LoginResponse {
        access_token: Some("abc".to_owned()),
        user: Some(SessionUser::from_email("a@b.com")),
    };
    let session = session_from_login(resp, "form@b.com").unwrap();
    assert_eq!(session.token, "abc");
    assert_eq!(session.user.email, "a@b.com");
}

#[test]
fn login_response_without_user_falls_back_to_form_email() {
    let resp = LoginResponse {
        access_token: Some("abc".to_owned()),
        user: None,
    };
    let session = session_from_login(resp, "a@b.com").unwrap();
    assert_eq!(session.user.email, "a@b.com");
}

#[test]
fn login_response_without_token_is_invalid() {
    let resp = LoginResponse::default();
    assert_eq!(
        session_from_login(resp, "a@b.com").unwrap_err(),
        ApiError::InvalidResponse
    );
}

#[test]
fn login_response_with_empty_token_is_invalid() {
    let resp = LoginResponse {
        access_token: Some(String::new()),
        user: None,
    };
    assert!(session_from_login(resp, "a@b.com").is_err());
}

#[test]
fn callback_session_prefers_callback_email() {
    let session =
        session_from_callback("tok123".to_owned(), Some("u@v.com".to_owned()), "form@b.com");
    assert_eq!(session.token, "tok123");
    assert_eq!(session.user.email, "u@v.com");
}

#[test]
fn callback_session_falls_back_to_form_email() {
    let session = session_from_callback("tok123".to_owned(), None, "form@b.com");
    assert_eq!(session.user.email, "form@b.com");
}
