use super::*;
use serde_json::json;

#[test]
fn credentials_serialize_as_login_body() {
    let body = serde_json::to_value(Credentials::new("e@x.com", "pw")).unwrap();
    assert_eq!(body, json!({ "email": "e@x.com", "password": "pw" }));
}

#[test]
fn auth_response_keeps_user_verbatim() {
    let data = json!({
        "access_token": "t1",
        "token_type": "bearer",
        "user": { "id": 1, "email": "e@x.com", "avatar": "a.png" }
    });
    let resp = AuthResponse::from_value(data).unwrap();
    assert_eq!(resp.access_token, "t1");
    assert_eq!(resp.user, json!({ "id": 1, "email": "e@x.com", "avatar": "a.png" }));
}

#[test]
fn auth_response_requires_token_and_user() {
    assert!(matches!(
        AuthResponse::from_value(json!({ "user": {} })),
        Err(AuthError::MalformedResponse(_))
    ));
    assert!(matches!(
        AuthResponse::from_value(json!({ "access_token": "t" })),
        Err(AuthError::MalformedResponse(_))
    ));
    assert!(matches!(
        AuthResponse::from_value(json!({ "access_token": 5, "user": {} })),
        Err(AuthError::MalformedResponse(_))
    ));
    assert!(matches!(AuthResponse::from_value(json!([1, 2])), Err(AuthError::MalformedResponse(_))));
}

#[test]
fn login_user_forwards_exactly_five_fields() {
    let user = json!({
        "id": 1,
        "email": "e@x.com",
        "full_name": "E",
        "role": "staff",
        "subscription_tier": "gold",
        "password_hash": "secret",
        "created_at": "2024-01-01"
    });
    let normalized = LoginUser::from_user_value(&user);
    assert_eq!(
        serde_json::to_value(&normalized).unwrap(),
        json!({ "id": 1, "email": "e@x.com", "full_name": "E", "role": "staff", "subscription_tier": "gold" })
    );
}

#[test]
fn login_user_accepts_string_ids_and_missing_fields() {
    let normalized = LoginUser::from_user_value(&json!({ "id": "u-7", "email": "g@x.com" }));
    assert_eq!(normalized.id, Some(UserId::Text("u-7".to_owned())));
    assert_eq!(normalized.role, None);
    assert_eq!(normalized.display_name(), "g@x.com");
}

#[test]
fn display_name_prefers_full_name() {
    let normalized = LoginUser::from_user_value(&json!({ "full_name": "Eve", "email": "e@x.com" }));
    assert_eq!(normalized.display_name(), "Eve");
}

#[test]
fn error_body_reads_optional_detail() {
    let body: ErrorBody = serde_json::from_value(json!({ "detail": "bad creds" })).unwrap();
    assert_eq!(body.detail.as_deref(), Some("bad creds"));
    let empty: ErrorBody = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty.detail, None);
}
