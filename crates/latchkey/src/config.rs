//! Cookie configuration.

use std::fmt;

// ---------------------------------------------------------------------------
// SameSite
// ---------------------------------------------------------------------------

/// The `SameSite` attribute sent with the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        };
        f.write_str(value)
    }
}

// ---------------------------------------------------------------------------
// CookieConfig
// ---------------------------------------------------------------------------

/// How the session cookie is named and flagged.
///
/// The defaults suit a local demo over plain HTTP: `HttpOnly` so scripts
/// can't read the token, `SameSite=Lax`, and no `Secure` flag. Turn
/// `secure` on when serving behind TLS.
///
/// No expiry is ever set, so browsers treat it as a session cookie.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    /// Cookie name. Default: `session`.
    pub name: String,

    /// `Path` attribute. Default: `/`.
    pub path: String,

    /// Whether to send `HttpOnly`. Default: `true`.
    pub http_only: bool,

    /// Whether to send `Secure`. Default: `false`.
    pub secure: bool,

    /// `SameSite` attribute, or `None` to omit it. Default: `Lax`.
    pub same_site: Option<SameSite>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            path: "/".to_string(),
            http_only: true,
            secure: false,
            same_site: Some(SameSite::Lax),
        }
    }
}
