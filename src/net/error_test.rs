use super::*;

#[test]
fn login_401_maps_to_invalid_credentials() {
    let err = ApiError::from_login_status(401, None, None);
    assert_eq!(err, ApiError::InvalidCredentials);
    assert_eq!(err.user_message(), "Usuario o contraseña incorrectos.");
}

#[test]
fn login_429_uses_retry_after_header() {
    let err = ApiError::from_login_status(429, Some("120"), None);
    assert_eq!(err, ApiError::RateLimited { retry_after_secs: 120 });
    assert_eq!(err.user_message(), "Demasiados intentos. Intenta en 120 segundos.");
}

#[test]
fn login_429_without_header_defaults_to_300_seconds() {
    let err = ApiError::from_login_status(429, None, None);
    assert_eq!(err.user_message(), "Demasiados intentos. Intenta en 300 segundos.");
}

#[test]
fn retry_after_ignores_non_numeric_values() {
    assert_eq!(parse_retry_after(Some("Wed, 21 Oct 2026 07:28:00 GMT")), DEFAULT_RETRY_AFTER_SECS);
    assert_eq!(parse_retry_after(Some(" 45 ")), 45);
    assert_eq!(parse_retry_after(None), DEFAULT_RETRY_AFTER_SECS);
}

#[test]
fn unreachable_maps_to_connectivity_message() {
    assert_eq!(ApiError::Unreachable.user_message(), "No se puede conectar al servidor.");
}

#[test]
fn server_error_prefers_backend_message() {
    let err = ApiError::from_login_status(500, None, Some("Mantenimiento programado.".to_owned()));
    assert_eq!(err.user_message(), "Mantenimiento programado.");
}

#[test]
fn server_error_without_message_falls_back_to_generic_text() {
    let err = ApiError::from_login_status(503, None, None);
    assert_eq!(err.user_message(), "Error inesperado.");
}

#[test]
fn error_body_parses_optional_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Cuenta bloqueada."}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Cuenta bloqueada."));
    let empty: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(empty.message.is_none());
}
