//! Error types for the session layer.

/// Errors that can occur while authenticating a user.
///
/// Looking up or deleting a session never fails: an unknown token is a
/// normal "not logged in" answer, reported as `None`.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The username is unknown or the password does not match.
    ///
    /// Covers both cases, so callers cannot tell them apart.
    #[error("invalid credentials")]
    InvalidCredentials,
}
