//! The session store: which tokens are logged in, and as whom.
//!
//! This is the only piece of runtime state in Latchkey. It's responsible for:
//! - Issuing a fresh random token when a user logs in
//! - Resolving a token from a cookie back to its user
//! - Forgetting a token when the user logs out
//!
//! # Concurrency note
//!
//! `SessionStore` is NOT thread-safe by itself: it is a plain `HashMap`.
//! The server owns one store behind a `tokio::sync::Mutex`, and every
//! handler locks it for exactly one call. That keeps each `create`,
//! `lookup` and `delete` atomic without hiding a lock in here.
//!
//! Sessions never expire. Every successful login adds an entry that only
//! a logout removes.

use std::collections::HashMap;

use crate::{SessionToken, Username};

/// Maps live session tokens to the user they were issued to.
///
/// ## Lifecycle
///
/// ```text
/// create(user) ──→ token ──→ lookup(token) = Some(user) ──→ delete(token)
///                                                               │
///                                                               ▼
///                                                  lookup(token) = None
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionToken, Username>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session for `username` and returns its new token.
    ///
    /// Tokens are random; there is no collision check.
    pub fn create(&mut self, username: Username) -> SessionToken {
        let token = SessionToken::generate();

        tracing::info!(%username, %token, "session created");
        self.sessions.insert(token.clone(), username);

        token
    }

    /// Returns the user a token belongs to, or `None` if it isn't live.
    ///
    /// An unknown token is the ordinary "not logged in" case, not an error.
    pub fn lookup(&self, token: &str) -> Option<Username> {
        let username = self.sessions.get(token).cloned();
        tracing::debug!(found = username.is_some(), "session lookup");
        username
    }

    /// Ends the session for `token`, returning who it belonged to.
    ///
    /// Deleting an unknown (or already deleted) token does nothing, so
    /// calling this twice is the same as calling it once.
    pub fn delete(&mut self, token: &str) -> Option<Username> {
        let removed = self.sessions.remove(token);
        if let Some(username) = &removed {
            tracing::info!(%username, "session deleted");
        }
        removed
    }

    /// Returns the number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if nobody is logged in.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

// =========================================================================
// Tests
// =========================================================================
