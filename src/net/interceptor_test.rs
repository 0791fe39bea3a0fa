use super::*;

#[test]
fn cookie_value_finds_token_among_other_cookies() {
    let cookies = "theme=dark; XSRF-TOKEN=abc123; lang=es";
    assert_eq!(cookie_value(cookies, XSRF_COOKIE), Some("abc123".to_owned()));
}

#[test]
fn cookie_value_percent_decodes() {
    let cookies = "XSRF-TOKEN=a%2Bb%3D";
    assert_eq!(cookie_value(cookies, XSRF_COOKIE), Some("a+b=".to_owned()));
}

#[test]
fn cookie_value_missing_cookie_is_none() {
    assert_eq!(cookie_value("theme=dark", XSRF_COOKIE), None);
    assert_eq!(cookie_value("", XSRF_COOKIE), None);
}

#[test]
fn cookie_value_does_not_match_name_prefixes() {
    let cookies = "XSRF-TOKEN-OLD=stale; XSRF-TOKEN=fresh";
    assert_eq!(cookie_value(cookies, XSRF_COOKIE), Some("fresh".to_owned()));
}

#[test]
fn cookie_value_allows_empty_value() {
    assert_eq!(cookie_value("XSRF-TOKEN=", XSRF_COOKIE), Some(String::new()));
}

#[test]
fn login_endpoint_is_recognized() {
    assert!(is_login_request("/api/auth/login"));
    assert!(!is_login_request("/api/auth/session"));
    assert!(!is_login_request("/api/auth/logout"));
    assert!(!is_login_request("/api/boards"));
}
