//! Failure taxonomy for the auth REST surface.
//!
//! ERROR HANDLING
//! ==============
//! Every networking call resolves to `Result<_, ApiError>`. Login-time
//! errors are recovered into `SessionState.error` as user-facing text;
//! `SessionExpired` never renders inline and instead drives a forced
//! logout with a redirect.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;
use thiserror::Error;

/// Seconds to suggest when a 429 carries no usable `Retry-After` header.
pub const DEFAULT_RETRY_AFTER_SECS: u32 = 300;

/// Failures observed while talking to the auth backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 on the login endpoint: the submitted credentials were rejected.
    #[error("login rejected")]
    InvalidCredentials,
    /// 429: throttled by the backend.
    #[error("rate limited, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },
    /// The request never produced a response (network down, CORS, DNS).
    #[error("backend unreachable")]
    Unreachable,
    /// Any other non-2xx response, with the server message when present.
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    /// 401 on an authenticated endpoint: the cookie session is gone.
    #[error("session expired")]
    SessionExpired,
}

/// JSON body the backend attaches to non-2xx auth responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

impl ApiError {
    /// Classify a non-2xx login response.
    pub fn from_login_status(status: u16, retry_after: Option<&str>, message: Option<String>) -> Self {
        match status {
            401 => Self::InvalidCredentials,
            429 => Self::RateLimited {
                retry_after_secs: parse_retry_after(retry_after),
            },
            _ => Self::Server { status, message },
        }
    }

    /// User-facing message for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Usuario o contraseña incorrectos.".to_owned(),
            Self::RateLimited { retry_after_secs } => {
                format!("Demasiados intentos. Intenta en {retry_after_secs} segundos.")
            }
            Self::Unreachable => "No se puede conectar al servidor.".to_owned(),
            Self::Server { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Error inesperado.".to_owned()),
            Self::SessionExpired => "Tu sesión expiró. Inicia sesión de nuevo.".to_owned(),
        }
    }
}

/// Parse a `Retry-After` header value, falling back to
/// [`DEFAULT_RETRY_AFTER_SECS`] when the header is absent or not a
/// plain seconds count.
pub fn parse_retry_after(header: Option<&str>) -> u32 {
    header
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
