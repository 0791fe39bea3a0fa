//! Request interceptor: CSRF cookie mirroring and session-expiry watch.
//!
//! Client-side (hydrate): every credentialed request picks up the
//! `XSRF-TOKEN` cookie as an `X-XSRF-TOKEN` header and sends cookies
//! along; a 401 on anything but the login endpoint force-logs-out via
//! the injected callback. Server-side (SSR): cookie access does not
//! exist, and the networking stubs never reach this module, so requests
//! pass through untouched.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use crate::net::error::ApiError;

/// Cookie the backend sets on `GET /api/auth/csrf`.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";
/// Header the backend expects the cookie value mirrored into.
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Extract a named cookie from a `document.cookie` string.
///
/// Values are percent-decoded; a value that fails to decode is returned
/// as-is so a malformed token still reaches the server unchanged.
#[cfg(any(test, feature = "hydrate"))]
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim_start).find_map(|pair| {
        let value = pair.strip_prefix(name)?.strip_prefix('=')?;
        match urlencoding::decode(value) {
            Ok(decoded) => Some(decoded.into_owned()),
            Err(_) => Some(value.to_owned()),
        }
    })
}

/// Whether `url` targets the login endpoint, where a 401 means bad
/// credentials rather than an expired session.
#[cfg(any(test, feature = "hydrate"))]
pub fn is_login_request(url: &str) -> bool {
    url.contains("/auth/login")
}

/// Read `document.cookie`, if a browser document is available.
#[cfg(feature = "hydrate")]
fn browser_cookies() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    html_document.cookie().ok()
}

/// Decorate an outgoing request: include cookies and mirror the CSRF
/// cookie into its header when one is present.
#[cfg(feature = "hydrate")]
pub fn outgoing(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let builder = builder.credentials(web_sys::RequestCredentials::Include);
    match browser_cookies().and_then(|cookies| cookie_value(&cookies, XSRF_COOKIE)) {
        Some(token) => builder.header(XSRF_HEADER, &token),
        None => builder,
    }
}

/// Inspect the settled response for `url`.
///
/// Transport failures become [`ApiError::Unreachable`]. A 401 anywhere
/// but the login endpoint runs `on_unauthorized` (wired to the auth
/// client's forced logout) and yields [`ApiError::SessionExpired`];
/// every other response is handed back for the caller to interpret, so
/// downstream error mapping still sees the original status.
///
/// # Errors
///
/// `Unreachable` when the request never settled; `SessionExpired` on a
/// 401 outside the login endpoint.
#[cfg(feature = "hydrate")]
pub fn incoming(
    url: &str,
    result: Result<gloo_net::http::Response, gloo_net::Error>,
    on_unauthorized: impl FnOnce(),
) -> Result<gloo_net::http::Response, ApiError> {
    let response = result.map_err(|_| ApiError::Unreachable)?;
    if response.status() == 401 && !is_login_request(url) {
        leptos::logging::warn!("session expired: 401 from {url}");
        on_unauthorized();
        return Err(ApiError::SessionExpired);
    }
    Ok(response)
}
