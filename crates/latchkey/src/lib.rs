//! # Latchkey
//!
//! A small session-cookie login server.
//!
//! Users log in with a username and password, get a random token in a
//! `session` cookie, and can then see the protected home page until they
//! log out. Credentials are checked by an
//! [`Authenticator`](latchkey_session::Authenticator); sessions live in an
//! in-memory [`SessionStore`](latchkey_session::SessionStore).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use latchkey::prelude::*;
//!
//! # async fn start() -> Result<(), LatchkeyError> {
//! let server = LatchkeyServer::builder()
//!     .bind("127.0.0.1:3000")
//!     .build(CredentialStore::demo())
//!     .await?;
//! server.run().await
//! # }
//! ```
//!
//! ## Routes
//!
//! - `GET /`: home page if logged in, else clear the cookie and go to `/login`
//! - `GET /login`: login form, or straight to `/` if already logged in
//! - `POST /login`: on a match set the cookie and go to `/`, else back to `/login`
//! - `GET /logout`: clear the cookie, end the session, go to `/`

mod config;
mod cookie;
mod error;
mod handler;
mod server;

pub use config::{CookieConfig, SameSite};
pub use error::LatchkeyError;
pub use server::{LatchkeyServer, LatchkeyServerBuilder, MAX_BODY_SIZE, app};

pub mod prelude {
    pub use crate::{
        CookieConfig, LatchkeyError, LatchkeyServer, LatchkeyServerBuilder,
        SameSite, app,
    };
    pub use latchkey_session::{
        Authenticator, CredentialStore, SessionError, SessionStore,
        SessionToken, Username,
    };
}
