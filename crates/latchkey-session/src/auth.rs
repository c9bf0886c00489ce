//! Credential checking: is this username/password pair allowed in?
//!
//! The server never checks passwords itself. It asks an [`Authenticator`],
//! a single async method that takes the submitted username and password
//! and answers with a [`Username`] or an error.
//!
//! [`CredentialStore`] is the built-in implementation: a fixed table of
//! plaintext passwords, loaded once at startup and never changed.
//! Tests and other deployments can plug in their own authenticator
//! without touching the HTTP layer.

use std::collections::HashMap;
use std::fmt;

use crate::{SessionError, Username};

/// Validates a submitted username and password.
///
/// # Trait bounds
///
/// - `Send + Sync` → the authenticator is shared by every request task
///   (Tokio may call it from several threads at once).
/// - `'static` → it lives as long as the server.
///
/// # Example
///
/// ```rust
/// use latchkey_session::{Authenticator, SessionError, Username};
///
/// /// Lets in anyone whose password is their name reversed.
/// struct MirrorAuthenticator;
///
/// impl Authenticator for MirrorAuthenticator {
///     async fn authenticate(
///         &self,
///         username: &str,
///         password: &str,
///     ) -> Result<Username, SessionError> {
///         let reversed: String = username.chars().rev().collect();
///         if !username.is_empty() && reversed == password {
///             Ok(Username::new(username))
///         } else {
///             Err(SessionError::InvalidCredentials)
///         }
///     }
/// }
/// ```
pub trait Authenticator: Send + Sync + 'static {
    /// Checks the credentials and returns who they belong to.
    ///
    /// # Returns
    /// - `Ok(Username)`: the pair matched
    /// - `Err(SessionError::InvalidCredentials)`: unknown user or wrong
    ///   password (the two are not distinguished)
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<Username, SessionError>> + Send;
}

/// A read-only table of usernames and their passwords.
///
/// Passwords are stored and compared as plain strings. There is no
/// hashing and no constant-time comparison.
#[derive(Clone, Default)]
pub struct CredentialStore {
    users: HashMap<Username, String>,
}

impl CredentialStore {
    /// Builds a store from `(username, password)` pairs.
    ///
    /// If a username appears twice, the last password wins.
    pub fn new<U, P>(users: impl IntoIterator<Item = (U, P)>) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        let users = users
            .into_iter()
            .map(|(u, p)| (Username::new(u), p.into()))
            .collect();
        Self { users }
    }

    /// The two built-in demo accounts.
    pub fn demo() -> Self {
        Self::new([("john", "1234567890"), ("jane", "0987654321")])
    }

    /// Returns `true` iff `username` exists and its password is exactly
    /// `password`.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|stored| stored == password)
    }

    /// Returns `true` if `username` has an entry.
    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if no users are registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Lists usernames only; passwords stay out of debug output.
impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("users", &self.users.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Authenticator for CredentialStore {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Username, SessionError> {
        if self.verify(username, password) {
            Ok(Username::new(username))
        } else {
            Err(SessionError::InvalidCredentials)
        }
    }
}
