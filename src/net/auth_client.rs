//! Auth client: the four auth REST operations and session-state ownership.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `AuthClient` is provided via context at the application root.
//! It is the only writer of `SessionState`; pages and the route guard get
//! a read-only view through [`AuthClient::session`]. Navigation is an
//! injected callback so the client stays independent of router wiring.
//!
//! ERROR HANDLING
//! ==============
//! Login failures are recovered into `SessionState.error` as user-facing
//! text and also returned to the caller. Logout never surfaces an error:
//! local state clears once the call settles either way, since the server
//! cookie, not this state, is the real session boundary.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{LoginPayload, SessionCheck, UserState};
use crate::state::session::SessionState;
use crate::util::storage;

#[cfg(feature = "hydrate")]
use crate::net::error::ErrorBody;
#[cfg(feature = "hydrate")]
use crate::net::interceptor;

/// Base path of the backend auth surface.
pub const API_BASE: &str = "/api/auth";

/// Route navigated to after a successful login.
pub const LANDING_ROUTE: &str = "/dashboard";

/// Route navigated to when the server signals an invalid session.
pub const EXPIRED_ROUTE: &str = "/login?reason=expired";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(operation: &str) -> String {
    format!("{API_BASE}/{operation}")
}

/// Handle over the session signal plus the navigation callback.
///
/// Cheap to copy; every clone refers to the same session state.
#[derive(Clone, Copy)]
pub struct AuthClient {
    session: RwSignal<SessionState>,
    navigate: Callback<String>,
}

impl AuthClient {
    pub fn new(session: RwSignal<SessionState>, navigate: Callback<String>) -> Self {
        Self { session, navigate }
    }

    /// Read-only view of the session state.
    pub fn session(&self) -> ReadSignal<SessionState> {
        self.session.read_only()
    }

    /// Prime the CSRF cookie with a credentialed GET.
    ///
    /// No state mutation on success; the visible effect is the backend
    /// setting the `XSRF-TOKEN` cookie. The bootstrap wrapper bounds and
    /// swallows failures, so errors only propagate to the caller here.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure of the priming request.
    pub async fn initialize_csrf(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = endpoint("csrf");
            let response = interceptor::incoming(
                &url,
                interceptor::outgoing(Request::get(&url)).send().await,
                || self.force_logout(),
            )?;
            if response.ok() {
                Ok(())
            } else {
                Err(ApiError::Server {
                    status: response.status(),
                    message: None,
                })
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }

    /// Submit credentials to the backend.
    ///
    /// `loading` is observably true before the request is dispatched and
    /// false once the call settles, on both outcomes. On success the
    /// identity is persisted, the session updated, and navigation moves
    /// to the landing route; on failure the mapped message lands in
    /// `SessionState.error`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure (also recorded in session state).
    pub async fn login(&self, payload: &LoginPayload) -> Result<UserState, ApiError> {
        self.session.update(apply_login_start);
        let outcome = self.request_login(payload).await;
        match &outcome {
            Ok(user) => {
                storage::save_identity(user);
                self.session.update(|state| apply_login_success(state, user.clone()));
                self.navigate.run(LANDING_ROUTE.to_owned());
            }
            Err(error) => {
                self.session.update(|state| apply_login_failure(state, error.user_message()));
            }
        }
        outcome
    }

    #[cfg(feature = "hydrate")]
    async fn request_login(&self, payload: &LoginPayload) -> Result<UserState, ApiError> {
        use gloo_net::http::Request;

        let url = endpoint("login");
        let request = interceptor::outgoing(Request::post(&url))
            .json(payload)
            .map_err(|_| ApiError::Unreachable)?;
        let response = interceptor::incoming(&url, request.send().await, || self.force_logout())?;
        if response.ok() {
            return response.json::<UserState>().await.map_err(|_| ApiError::Server {
                status: response.status(),
                message: None,
            });
        }
        let retry_after = response.headers().get("Retry-After");
        let message = response.json::<ErrorBody>().await.ok().and_then(|body| body.message);
        Err(ApiError::from_login_status(response.status(), retry_after.as_deref(), message))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn request_login(&self, _payload: &LoginPayload) -> Result<UserState, ApiError> {
        Err(ApiError::Unreachable)
    }

    /// Log out against the backend, then clear the local session.
    ///
    /// Fire-and-forget from the caller's perspective: the stored identity
    /// and the in-memory user are cleared once the call settles whether
    /// or not the server acknowledged it, and no error is surfaced.
    pub async fn logout(&self) {
        self.request_logout().await;
        storage::clear_identity();
        self.session.update(apply_session_cleared);
    }

    #[cfg(feature = "hydrate")]
    async fn request_logout(&self) {
        use gloo_net::http::Request;

        let url = endpoint("logout");
        let _ = interceptor::incoming(
            &url,
            interceptor::outgoing(Request::post(&url)).send().await,
            || self.force_logout(),
        );
    }

    #[cfg(not(feature = "hydrate"))]
    async fn request_logout(&self) {}

    /// Tear down the local session without a network round trip.
    ///
    /// Used when the server has already signaled the session is invalid
    /// (a 401 outside login), so a second round trip would be pointless.
    pub fn force_logout(&self) {
        storage::clear_identity();
        self.session.update(apply_session_cleared);
        self.navigate.run(EXPIRED_ROUTE.to_owned());
    }

    /// Ask the backend whether the cookie-backed session is still valid.
    ///
    /// On a valid session the identity from the response refreshes both
    /// the stored copy and the in-memory user. Callers decide what an
    /// invalid or failed check means (the route guard forces logout).
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP failure of the check.
    pub async fn validate_session(&self) -> Result<bool, ApiError> {
        let check = self.request_session_check().await?;
        if check.is_valid {
            let user = check.user();
            storage::save_identity(&user);
            self.session.update(|state| apply_user_refresh(state, user));
        }
        Ok(check.is_valid)
    }

    #[cfg(feature = "hydrate")]
    async fn request_session_check(&self) -> Result<SessionCheck, ApiError> {
        use gloo_net::http::Request;

        let url = endpoint("session");
        let response = interceptor::incoming(
            &url,
            interceptor::outgoing(Request::get(&url)).send().await,
            || self.force_logout(),
        )?;
        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
                message: None,
            });
        }
        response.json::<SessionCheck>().await.map_err(|_| ApiError::Server {
            status: response.status(),
            message: None,
        })
    }

    #[cfg(not(feature = "hydrate"))]
    async fn request_session_check(&self) -> Result<SessionCheck, ApiError> {
        Err(ApiError::Unreachable)
    }

    /// Drop the last login error, typically before a new attempt.
    pub fn clear_error(&self) {
        self.session.update(apply_error_cleared);
    }
}

fn apply_login_start(state: &mut SessionState) {
    state.loading = true;
    state.error = None;
}

fn apply_login_success(state: &mut SessionState, user: UserState) {
    state.user = Some(user);
    state.loading = false;
}

fn apply_login_failure(state: &mut SessionState, message: String) {
    state.error = Some(message);
    state.loading = false;
}

fn apply_user_refresh(state: &mut SessionState, user: UserState) {
    state.user = Some(user);
}

fn apply_session_cleared(state: &mut SessionState) {
    state.user = None;
}

fn apply_error_cleared(state: &mut SessionState) {
    state.error = None;
}
