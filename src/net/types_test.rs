use super::*;

fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "u-1",
        "username": "jsmith",
        "email": "j@example.com",
        "full_name": "Jo Smith",
        "role": "supervisor",
        "phone": "555-0100",
        "crew": { "id": 7 }
    })
}

#[test]
fn user_deserializes_known_fields() {
    let user: User = serde_json::from_value(user_json()).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.username, "jsmith");
    assert_eq!(user.email.as_deref(), Some("j@example.com"));
    assert_eq!(user.role.as_deref(), Some("supervisor"));
}

#[test]
fn user_keeps_unknown_profile_fields() {
    let user: User = serde_json::from_value(user_json()).unwrap();
    assert_eq!(user.profile.get("phone"), Some(&serde_json::json!("555-0100")));
    assert_eq!(user.profile.get("crew"), Some(&serde_json::json!({ "id": 7 })));
    assert!(!user.profile.contains_key("username"));
}

#[test]
fn user_optional_fields_default_to_none() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": "u-2", "username": "ops" })).unwrap();
    assert!(user.email.is_none());
    assert!(user.full_name.is_none());
    assert!(user.role.is_none());
    assert!(user.profile.is_empty());
}

#[test]
fn display_name_prefers_full_name() {
    let user: User = serde_json::from_value(user_json()).unwrap();
    assert_eq!(user.display_name(), "Jo Smith");
}

#[test]
fn display_name_falls_back_to_username_when_blank() {
    let mut user: User = serde_json::from_value(user_json()).unwrap();
    user.full_name = Some("  ".to_owned());
    assert_eq!(user.display_name(), "jsmith");
    user.full_name = None;
    assert_eq!(user.display_name(), "jsmith");
}

#[test]
fn login_request_serializes_username_and_password() {
    let body = LoginRequest { username: "u", password: "p" };
    assert_eq!(serde_json::to_value(body).unwrap(), serde_json::json!({ "username": "u", "password": "p" }));
}

#[test]
fn login_response_flattens_tokens_next_to_user() {
    let raw = serde_json::json!({
        "access_token": "a1",
        "refresh_token": "r1",
        "user": { "id": "u-1", "username": "jsmith" }
    });
    let resp: LoginResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(resp.tokens.access_token, "a1");
    assert_eq!(resp.tokens.refresh_token.as_deref(), Some("r1"));
    assert_eq!(resp.user.username, "jsmith");
}

#[test]
fn token_pair_allows_missing_refresh_token() {
    let pair: TokenPair = serde_json::from_value(serde_json::json!({ "access_token": "a2" })).unwrap();
    assert_eq!(pair.access_token, "a2");
    assert!(pair.refresh_token.is_none());
}
