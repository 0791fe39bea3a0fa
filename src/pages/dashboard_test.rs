use super::*;

#[test]
fn greeting_uses_display_name() {
    let user = UserState {
        username: "alice".to_owned(),
        display_name: "Alice A.".to_owned(),
    };
    assert_eq!(greeting(Some(&user)), "Hola, Alice A.");
}

#[test]
fn greeting_without_user_stays_generic() {
    assert_eq!(greeting(None), "Hola");
}

#[test]
fn guard_target_is_the_dashboard_route() {
    assert_eq!(DASHBOARD_URL, "/dashboard");
}
