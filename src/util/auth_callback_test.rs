use super::*;

// =============================================================
// Token extraction
// =============================================================

#[test]
fn fragment_token_and_email() {
    let outcome = parse_params("access_token=tok123&email=u%40v.com");
    assert_eq!(
        outcome,
        Some(CallbackOutcome::Token {
            token: "tok123".to_owned(),
            email: Some("u@v.com".to_owned()),
        })
    );
}

#[test]
fn token_without_email() {
    let outcome = parse_params("token=abc");
    assert_eq!(
        outcome,
        Some(CallbackOutcome::Token {
            token: "abc".to_owned(),
            email: None,
        })
    );
}

#[test]
fn accepts_all_token_parameter_names() {
    for name in ["access_token", "token", "session", "login"] {
        let raw = format!("{name}=t1");
        assert_eq!(
            parse_params(&raw),
            Some(CallbackOutcome::Token {
                token: "t1".to_owned(),
                email: None,
            }),
            "parameter name {name} not accepted"
        );
    }
}

#[test]
fn access_token_takes_priority_over_other_names() {
    let outcome = parse_params("session=low&access_token=high");
    assert_eq!(
        outcome,
        Some(CallbackOutcome::Token {
            token: "high".to_owned(),
            email: None,
        })
    );
}

#[test]
fn empty_token_value_is_ignored() {
    assert_eq!(parse_params("access_token="), None);
}

// =============================================================
// Error indicators
// =============================================================

#[test]
fn error_description_is_surfaced() {
    let outcome = parse_params("error=access_denied&error_description=Link+expired");
    assert_eq!(
        outcome,
        Some(CallbackOutcome::Error("Link expired".to_owned()))
    );
}

#[test]
fn error_without_description_uses_fallback_copy() {
    let outcome = parse_params("error_code=otp_expired");
    assert_eq!(
        outcome,
        Some(CallbackOutcome::Error(
            "Login link is invalid or has expired. Please request a new one.".to_owned()
        ))
    );
}

#[test]
fn error_wins_over_token() {
    let outcome = parse_params("access_token=tok&error=denied");
    assert!(matches!(outcome, Some(CallbackOutcome::Error(_))));
}

// =============================================================
// Nothing actionable
// =============================================================

#[test]
fn empty_string_yields_none() {
    assert_eq!(parse_params(""), None);
}

#[test]
fn unrelated_params_yield_none() {
    assert_eq!(parse_params("utm_source=mail&ref=campaign"), None);
}

#[test]
fn percent_encoded_components_are_decoded() {
    let outcome = parse_params("access_token=a%2Bb%3D&email=x%2By%40z.com");
    assert_eq!(
        outcome,
        Some(CallbackOutcome::Token {
            token: "a+b=".to_owned(),
            email: Some("x+y@z.com".to_owned()),
        })
    );
}
