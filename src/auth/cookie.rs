// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session cookie lookup.

use axum::http::{header::COOKIE, HeaderMap};

/// Name of the cookie carrying the session JWT.
pub const SESSION_COOKIE: &str = "jwt-netflix";

/// Return the value of cookie `name`, searching every `Cookie` header.
///
/// Empty values are treated as absent.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// The session token from the request cookies.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    cookie_value(headers, SESSION_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(cookies: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for c in cookies {
            headers.append(COOKIE, HeaderValue::from_str(c).unwrap());
        }
        headers
    }

    #[test]
    fn finds_session_cookie_among_others() {
        let headers = headers_with(&["theme=dark; jwt-netflix=abc.def.ghi; lang=en"]);
        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn searches_multiple_cookie_headers() {
        let headers = headers_with(&["theme=dark", "jwt-netflix=tok"]);
        assert_eq!(session_token(&headers).as_deref(), Some("tok"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        let headers = headers_with(&["jwt-netflix-old=tok"]);
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn empty_cookie_is_none() {
        let headers = headers_with(&["jwt-netflix="]);
        assert_eq!(session_token(&headers), None);
    }
}
