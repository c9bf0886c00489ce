//! Reading the session cookie from requests and writing `Set-Cookie` values.
//!
//! Only the tiny slice of RFC 6265 Latchkey needs: find one cookie by
//! name, set it, clear it.

use axum::http::{HeaderMap, header};

use crate::CookieConfig;

/// `Expires` value that tells the browser to drop a cookie right away.
const EPOCH: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Returns the value of cookie `name`, if the request carries it.
///
/// Looks through every `Cookie` header; the first match wins. Each
/// `name=value` pair is decoded on its own, so a sibling cookie with
/// non-UTF-8 bytes doesn't hide the session cookie next to it.
pub(crate) fn read<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .flat_map(|value| value.as_bytes().split(|b| *b == b';'))
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"'))
}

impl CookieConfig {
    /// Builds the `Set-Cookie` value that hands `value` to the browser.
    pub(crate) fn set(&self, value: &str) -> String {
        let mut cookie = format!("{}={}", self.name, value);
        self.push_attributes(&mut cookie);
        cookie
    }

    /// Builds the `Set-Cookie` value that removes the cookie.
    pub(crate) fn clear(&self) -> String {
        let mut cookie = format!("{}=; Max-Age=0; Expires={EPOCH}", self.name);
        self.push_attributes(&mut cookie);
        cookie
    }

    fn push_attributes(&self, cookie: &mut String) {
        cookie.push_str("; Path=");
        cookie.push_str(&self.path);
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        if let Some(same_site) = self.same_site {
            cookie.push_str(&format!("; SameSite={same_site}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;
    use crate::SameSite;

    fn headers(cookies: &[&'static str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for c in cookies {
            map.append(header::COOKIE, HeaderValue::from_static(c));
        }
        map
    }

    // =====================================================================
    // read()
    // =====================================================================

    #[test]
    fn test_read_single_cookie_returns_value() {
        let h = headers(&["session=abc123"]);
        assert_eq!(read(&h, "session"), Some("abc123"));
    }

    #[test]
    fn test_read_among_several_cookies_returns_named_one() {
        let h = headers(&["theme=dark; session=abc123; lang=en"]);
        assert_eq!(read(&h, "session"), Some("abc123"));
        assert_eq!(read(&h, "lang"), Some("en"));
    }

    #[test]
    fn test_read_across_multiple_headers() {
        let h = headers(&["theme=dark", "session=xyz"]);
        assert_eq!(read(&h, "session"), Some("xyz"));
    }

    #[test]
    fn test_read_missing_cookie_returns_none() {
        assert_eq!(read(&headers(&["theme=dark"]), "session"), None);
        assert_eq!(read(&HeaderMap::new(), "session"), None);
    }

    #[test]
    fn test_read_does_not_match_name_prefix() {
        let h = headers(&["sessionid=nope"]);
        assert_eq!(read(&h, "session"), None);
    }

    #[test]
    fn test_read_next_to_non_ascii_cookie_returns_value() {
        // `theme=café` as UTF-8, so `to_str()` on the whole header fails.
        let mut h = HeaderMap::new();
        h.insert(
            header::COOKIE,
            HeaderValue::from_bytes(b"theme=caf\xc3\xa9; session=abc").unwrap(),
        );

        assert_eq!(read(&h, "session"), Some("abc"));
        assert_eq!(read(&h, "theme"), Some("café"));
    }

    #[test]
    fn test_read_skips_only_undecodable_pair() {
        let mut h = HeaderMap::new();
        h.insert(
            header::COOKIE,
            HeaderValue::from_bytes(b"junk=\xff\xfe; session=abc").unwrap(),
        );

        assert_eq!(read(&h, "session"), Some("abc"));
        assert_eq!(read(&h, "junk"), None);
    }

    #[test]
    fn test_read_empty_value_returns_empty_str() {
        let h = headers(&["session="]);
        assert_eq!(read(&h, "session"), Some(""));
    }

    #[test]
    fn test_read_strips_quotes() {
        let h = headers(&["session=\"abc\""]);
        assert_eq!(read(&h, "session"), Some("abc"));
    }

    // =====================================================================
    // set() / clear()
    // =====================================================================

    #[test]
    fn test_set_default_config_is_http_only_lax() {
        let cookie = CookieConfig::default().set("tok");
        assert_eq!(cookie, "session=tok; Path=/; HttpOnly; SameSite=Lax");
    }

    #[test]
    fn test_set_secure_strict_config() {
        let config = CookieConfig {
            secure: true,
            same_site: Some(SameSite::Strict),
            ..CookieConfig::default()
        };
        assert_eq!(
            config.set("tok"),
            "session=tok; Path=/; HttpOnly; Secure; SameSite=Strict"
        );
    }

    #[test]
    fn test_set_without_flags() {
        let config = CookieConfig {
            name: "sid".into(),
            http_only: false,
            same_site: None,
            ..CookieConfig::default()
        };
        assert_eq!(config.set("tok"), "sid=tok; Path=/");
    }

    #[test]
    fn test_clear_expires_immediately() {
        let cookie = CookieConfig::default().clear();
        assert!(cookie.starts_with("session=; Max-Age=0; Expires=Thu, 01 Jan 1970"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("HttpOnly"));
    }
}
