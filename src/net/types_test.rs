use super::*;

#[test]
fn user_state_parses_camel_case_payload() {
    let user: UserState = serde_json::from_str(r#"{"username":"alice","displayName":"Alice A."}"#).unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.display_name, "Alice A.");
}

#[test]
fn user_state_serializes_camel_case_keys() {
    let user = UserState {
        username: "alice".to_owned(),
        display_name: "Alice A.".to_owned(),
    };
    let json = serde_json::to_string(&user).unwrap();
    assert_eq!(json, r#"{"username":"alice","displayName":"Alice A."}"#);
}

#[test]
fn session_check_parses_validity_flag() {
    let check: SessionCheck =
        serde_json::from_str(r#"{"isValid":true,"username":"alice","displayName":"Alice A."}"#).unwrap();
    assert!(check.is_valid);
    assert_eq!(check.user().display_name, "Alice A.");
}

#[test]
fn session_check_user_ignores_validity() {
    let check: SessionCheck =
        serde_json::from_str(r#"{"isValid":false,"username":"bob","displayName":"Bob B."}"#).unwrap();
    assert!(!check.is_valid);
    assert_eq!(check.user().username, "bob");
}

#[test]
fn login_payload_serializes_both_fields() {
    let payload = LoginPayload {
        username: "alice".to_owned(),
        password: "correct123".to_owned(),
    };
    let json = serde_json::to_string(&payload).unwrap();
    assert_eq!(json, r#"{"username":"alice","password":"correct123"}"#);
}
