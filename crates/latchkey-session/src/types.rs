//! Identity types shared by the credential and session stores.

use std::borrow::Borrow;
use std::fmt;

use rand::Rng;

// ---------------------------------------------------------------------------
// Username
// ---------------------------------------------------------------------------

/// The name a user logs in with.
///
/// A newtype over `String` so a username can't be passed where a password
/// or a token is expected, even though all three are strings underneath.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Wraps a raw username.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Username {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// SessionToken
// ---------------------------------------------------------------------------

/// Number of random bytes behind every session token (128 bits).
const TOKEN_BYTES: usize = 16;

/// How much of a token `Display`/`Debug` reveal.
const TOKEN_LOG_PREFIX: usize = 8;

/// An opaque, random session identifier.
///
/// The client holds it in the `session` cookie; the server uses it as the
/// key into the [`SessionStore`](crate::SessionStore).
///
/// `Display` and `Debug` only print the first few characters, so a token
/// logged with `%token` can't be replayed from the logs.
///
/// `Borrow<str>` lets the store look tokens up straight from a cookie
/// value (`&str`) without allocating a `SessionToken` first.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh token: 16 random bytes as 32 lowercase hex chars.
    ///
    /// Uses the thread-local CSPRNG from `rand`, so guessing a live token
    /// means searching a 2^128 space.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let bytes: [u8; TOKEN_BYTES] = rng.random();
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Returns the full token, e.g. for writing it into a cookie.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn prefix(&self) -> &str {
        self.0.get(..TOKEN_LOG_PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}…", self.prefix())
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({}…)", self.prefix())
    }
}

impl Borrow<str> for SessionToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}
