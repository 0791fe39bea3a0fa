//! Session guard for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages install this guard with their own URL so every entry
//! applies the same decision table: no user → login redirect carrying the
//! intended URL; user present → backend revalidation, with a failed check
//! forcing logout and redirecting with an expired marker. Local state is
//! never trusted alone for protected navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::auth_client::AuthClient;
use crate::state::session::SessionState;

/// Login redirect preserving the intended URL as a return target.
pub fn login_redirect_url(target: &str) -> String {
    format!("/login?returnUrl={}", urlencoding::encode(target))
}

/// Login redirect after a failed revalidation of an existing session.
pub fn expired_redirect_url(target: &str) -> String {
    format!("{}&reason=expired", login_redirect_url(target))
}

/// Whether a settled session with no user should bounce to login.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_logged_in()
}

/// Install the guard for the protected route at `target`.
///
/// Two layers: a reactive redirect whenever the session settles with no
/// user (covers logout and forced expiry while the page is open), and a
/// one-shot backend revalidation on entry when a local user exists.
pub fn install_session_guard<F>(client: AuthClient, target: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let session = client.session();

    let navigate_unauth = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if should_redirect_unauth(&state) {
            navigate_unauth(&login_redirect_url(target), NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        if session.get_untracked().is_logged_in() {
            leptos::task::spawn_local(async move {
                let valid = matches!(client.validate_session().await, Ok(true));
                if !valid {
                    client.force_logout();
                    navigate(&expired_redirect_url(target), NavigateOptions::default());
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = navigate;
    }
}
