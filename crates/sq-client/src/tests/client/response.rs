use crate::client::client::{api_error_from_body, parse_sign_up};

use serde_json::{Value, json};
use uuid::Uuid;

const USER_ID: &str = "6f1c3c52-7a0e-4d0b-9b53-2b7f3f0f4a11";

#[test]
fn test_gotrue_error_body_prefers_error_code_and_msg() {
    let err = api_error_from_body(
        422,
        &json!({"code": 422, "error_code": "user_already_exists", "msg": "User already registered"}),
    );

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.code(), Some("user_already_exists"));
    assert_eq!(err.user_message(), "User already registered");
}

#[test]
fn test_oauth_style_error_body_uses_description() {
    let err = api_error_from_body(
        400,
        &json!({"error": "invalid_grant", "error_description": "Invalid login credentials"}),
    );

    assert_eq!(err.code(), None);
    assert_eq!(err.user_message(), "Invalid login credentials");
}

#[test]
fn test_postgrest_error_body_keeps_details_and_hint() {
    let err = api_error_from_body(
        403,
        &json!({
            "code": "42501",
            "message": "new row violates row-level security policy for table \"user_profiles\"",
            "details": null,
            "hint": "Check policies"
        }),
    );

    assert!(err.is_access_policy_violation());
    match err {
        crate::ClientError::Api { details, hint, .. } => {
            assert!(details.is_none());
            assert_eq!(hint.as_deref(), Some("Check policies"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn test_plain_text_error_body_becomes_message() {
    let err = api_error_from_body(502, &Value::String(String::from("Bad gateway")));
    assert_eq!(err.user_message(), "Bad gateway");

    let err = api_error_from_body(500, &Value::Null);
    assert_eq!(err.user_message(), "Unknown error");
}

#[test]
fn test_sign_up_with_session_yields_identity_and_session() {
    let body = json!({
        "access_token": "jwt",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh",
        "user": {"id": USER_ID, "email": "kid@school.org", "role": "authenticated"}
    });

    let (identity, session) = parse_sign_up(body).unwrap();

    let id = Uuid::parse_str(USER_ID).unwrap();
    assert_eq!(identity.unwrap().id, id);
    let session = session.unwrap();
    assert_eq!(session.access_token, "jwt");
    assert_eq!(session.user.email, "kid@school.org");
}

#[test]
fn test_sign_up_pending_confirmation_yields_identity_only() {
    let body = json!({"id": USER_ID, "email": "kid@school.org", "confirmation_sent_at": "2026-01-01T00:00:00Z"});

    let (identity, session) = parse_sign_up(body).unwrap();

    assert_eq!(identity.unwrap().email, "kid@school.org");
    assert!(session.is_none());
}

#[test]
fn test_sign_up_wrapped_user_with_null_session() {
    let body = json!({"user": {"id": USER_ID, "email": "kid@school.org"}, "session": null});

    let (identity, session) = parse_sign_up(body).unwrap();

    assert!(identity.is_some());
    assert!(session.is_none());
}

#[test]
fn test_sign_up_without_user_yields_nothing() {
    let (identity, session) = parse_sign_up(json!({})).unwrap();

    assert!(identity.is_none());
    assert!(session.is_none());
}
