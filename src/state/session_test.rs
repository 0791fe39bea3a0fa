use super::*;

fn sample_user() -> UserState {
    UserState {
        username: "alice".to_owned(),
        display_name: "Alice A.".to_owned(),
    }
}

#[test]
fn default_state_is_anonymous_and_idle() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(!state.is_logged_in());
}

#[test]
fn seeded_state_carries_stored_identity() {
    let state = SessionState::seeded(Some(sample_user()));
    assert!(state.is_logged_in());
    assert_eq!(state.user.unwrap().username, "alice");
}

#[test]
fn seeded_state_without_identity_is_anonymous() {
    let state = SessionState::seeded(None);
    assert!(!state.is_logged_in());
    assert!(!state.loading);
}
