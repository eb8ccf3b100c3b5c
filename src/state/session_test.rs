use serde_json::json;

use super::*;
use crate::net::types::SessionUser;

// =============================================================
// Session persistence round-trip
// =============================================================

#[test]
fn session_serde_round_trip() {
    let session = Session::new("abc", SessionUser::from_email("a@b.com"));
    let stored = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&stored).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn session_round_trip_preserves_opaque_user_fields() {
    let user: SessionUser =
        serde_json::from_value(json!({ "email": "a@b.com", "id": "u-1" })).unwrap();
    let session = Session::new("tok", user);

    let stored = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&stored).unwrap();

    assert_eq!(restored.token, "tok");
    assert_eq!(restored.user.email, "a@b.com");
    assert_eq!(restored.user.extra.get("id"), Some(&json!("u-1")));
}

#[test]
fn session_parses_the_original_storage_shape() {
    let raw = r#"{"token":"abc","user":{"email":"a@b.com"}}"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.token, "abc");
    assert_eq!(session.user.email, "a@b.com");
}
