use super::*;
use crate::net::types::UserState;

#[test]
fn login_redirect_encodes_return_target() {
    assert_eq!(login_redirect_url("/dashboard"), "/login?returnUrl=%2Fdashboard");
}

#[test]
fn expired_redirect_appends_reason() {
    assert_eq!(
        expired_redirect_url("/dashboard"),
        "/login?returnUrl=%2Fdashboard&reason=expired"
    );
}

#[test]
fn redirect_urls_survive_query_bearing_targets() {
    assert_eq!(
        login_redirect_url("/dashboard?tab=activity"),
        "/login?returnUrl=%2Fdashboard%3Ftab%3Dactivity"
    );
}

#[test]
fn should_redirect_unauth_when_settled_and_user_missing() {
    let state = SessionState { user: None, loading: false, error: None };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_login_in_flight() {
    let state = SessionState { user: None, loading: true, error: None };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = SessionState {
        user: Some(UserState {
            username: "alice".to_owned(),
            display_name: "Alice A.".to_owned(),
        }),
        loading: false,
        error: None,
    };
    assert!(!should_redirect_unauth(&state));
}
