//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard, the login form, and the dashboard header to
//! coordinate redirects and identity-dependent rendering. Only the auth
//! client writes to it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserState;

/// Session state tracking the current user, login progress, and the last
/// login error.
///
/// `loading` is true only while a login call is in flight. `error` holds
/// the user-facing message for the most recent failed login and is
/// cleared at the start of every new attempt. `user` presence drives UI
/// and guard decisions; the actual security boundary is the server's
/// HttpOnly session cookie, which this code never sees.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserState>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// Build the startup state, optionally seeded with a locally stored
    /// identity. The seed is advisory; protected routes revalidate it
    /// against the backend before trusting it.
    pub fn seeded(user: Option<UserState>) -> Self {
        Self { user, loading: false, error: None }
    }

    /// Whether a user identity is currently present.
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
