//! Session cookie helpers.
//!
//! The session token rides in an HttpOnly cookie. Signup, signin and
//! password reset all (re-)issue it; signout clears it.

use axum::http::header::{HeaderValue, COOKIE};
use axum::http::HeaderMap;

use super::state::SessionCookieSettings;

/// Builds the `Set-Cookie` value carrying a freshly issued token.
pub fn issue_cookie(settings: &SessionCookieSettings, token: &str) -> HeaderValue {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        settings.name, token, settings.max_age_secs
    );
    HeaderValue::from_str(&cookie).expect("cookie value is ASCII")
}

/// Builds the `Set-Cookie` value that clears the session.
pub fn clear_cookie(settings: &SessionCookieSettings) -> HeaderValue {
    let cookie = format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", settings.name);
    HeaderValue::from_str(&cookie).expect("cookie value is ASCII")
}

/// Extracts the session token from the request's `Cookie` header, if any.
pub fn token_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let header = headers.get(COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == cookie_name).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SessionCookieSettings {
        SessionCookieSettings {
            name: "token".into(),
            max_age_secs: 31_449_600,
        }
    }

    #[test]
    fn issue_cookie_is_http_only_with_max_age() {
        let value = issue_cookie(&settings(), "abc.def.ghi");
        let s = value.to_str().unwrap();
        assert!(s.starts_with("token=abc.def.ghi;"));
        assert!(s.contains("HttpOnly"));
        assert!(s.contains("SameSite=Lax"));
        assert!(s.contains("Max-Age=31449600"));
    }

    #[test]
    fn clear_cookie_zeroes_max_age() {
        let value = clear_cookie(&settings());
        let s = value.to_str().unwrap();
        assert!(s.starts_with("token=;"));
        assert!(s.contains("Max-Age=0"));
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; token=abc.def; lang=en"),
        );
        assert_eq!(token_from_headers(&headers, "token").as_deref(), Some("abc.def"));
    }

    #[test]
    fn missing_cookie_header_yields_none() {
        let headers = HeaderMap::new();
        assert!(token_from_headers(&headers, "token").is_none());
    }

    #[test]
    fn other_cookies_do_not_match() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("nottoken=abc"));
        assert!(token_from_headers(&headers, "token").is_none());
    }
}
