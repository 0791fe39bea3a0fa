//! Wire DTOs for the client/backend auth boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (camelCase keys) so
//! serde round-trips stay lossless and handlers can stay schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials submitted to `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    /// Account name as typed into the login form.
    pub username: String,
    /// Plaintext password; travels only inside the login request body.
    pub password: String,
}

/// The authenticated identity as returned by login and session checks.
///
/// Replaced wholesale on every successful login or validation; never
/// patched field-by-field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    /// Account name.
    pub username: String,
    /// Human-facing name shown in the dashboard header.
    pub display_name: String,
}

/// Response payload of `GET /api/auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCheck {
    /// Server-side verdict on the cookie-backed session.
    pub is_valid: bool,
    /// Account name.
    pub username: String,
    /// Human-facing name.
    pub display_name: String,
}

impl SessionCheck {
    /// The identity carried by this check, independent of validity.
    pub fn user(&self) -> UserState {
        UserState {
            username: self.username.clone(),
            display_name: self.display_name.clone(),
        }
    }
}
