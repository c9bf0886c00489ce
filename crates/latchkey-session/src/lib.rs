//! Credential checking and session tracking for Latchkey.
//!
//! This crate owns the two stores behind a cookie login:
//!
//! 1. **Credentials**: who is allowed in ([`CredentialStore`], behind the
//!    [`Authenticator`] trait)
//! 2. **Sessions**: who is logged in right now ([`SessionStore`])
//!
//! # How it fits in the stack
//!
//! ```text
//! HTTP Layer (above)  ← reads the session cookie, calls into the stores
//!     ↕
//! Session Layer (this crate)  ← verifies passwords, issues and resolves tokens
//! ```
//!
//! Nothing here knows about HTTP. Both stores are plain values that the
//! server owns and hands to its request handlers.

mod auth;
mod error;
mod store;
mod types;

pub use auth::{Authenticator, CredentialStore};
pub use error::SessionError;
pub use store::SessionStore;
pub use types::{SessionToken, Username};
