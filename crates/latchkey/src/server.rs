//! `LatchkeyServer` builder, router, and serve loop.
//!
//! This is the entry point for running a Latchkey server. It ties the
//! layers together: socket → axum router → handlers → session stores.

use std::future::Future;
use std::sync::Arc;

use axum::{Router, routing::get};
use latchkey_session::{Authenticator, SessionStore};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handler::{home, login_page, login_submit, logout};
use crate::{CookieConfig, LatchkeyError};

/// Largest request body accepted (64 KiB). Login forms are tiny.
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Shared server state passed to every request handler.
///
/// Wrapped in `Arc` so it can be cheaply cloned across tasks. The
/// session store sits behind a `Mutex` because it's the only thing
/// handlers write to; the authenticator and cookie config are read-only.
pub(crate) struct ServerState<A: Authenticator> {
    pub(crate) sessions: Mutex<SessionStore>,
    pub(crate) auth: A,
    pub(crate) cookie: CookieConfig,
}

/// Builds the Latchkey router around the given authenticator.
///
/// The session store starts empty. Useful on its own for driving the app
/// in-process (e.g. with `tower::ServiceExt::oneshot`) without a socket.
pub fn app<A: Authenticator>(auth: A, cookie: CookieConfig) -> Router {
    let state = Arc::new(ServerState {
        sessions: Mutex::new(SessionStore::new()),
        auth,
        cookie,
    });

    Router::new()
        .route("/", get(home::<A>))
        .route("/login", get(login_page::<A>).post(login_submit::<A>))
        .route("/logout", get(logout::<A>))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
}

/// Builder for configuring and starting a Latchkey server.
///
/// # Example
///
/// ```rust,no_run
/// use latchkey::prelude::*;
///
/// # async fn start() -> Result<(), LatchkeyError> {
/// let server = LatchkeyServer::builder()
///     .bind("127.0.0.1:3000")
///     .build(CredentialStore::demo())
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct LatchkeyServerBuilder {
    bind_addr: String,
    cookie_config: CookieConfig,
}

impl LatchkeyServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            cookie_config: CookieConfig::default(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the session cookie configuration.
    pub fn cookie_config(mut self, config: CookieConfig) -> Self {
        self.cookie_config = config;
        self
    }

    /// Binds the listener and wires up the router with `auth`.
    ///
    /// # Errors
    /// Returns [`LatchkeyError::Bind`] if the address can't be bound.
    pub async fn build<A: Authenticator>(
        self,
        auth: A,
    ) -> Result<LatchkeyServer, LatchkeyError> {
        let listener = TcpListener::bind(&self.bind_addr).await.map_err(|source| {
            LatchkeyError::Bind {
                addr: self.bind_addr.clone(),
                source,
            }
        })?;
        tracing::info!(addr = %self.bind_addr, "Latchkey listening");

        Ok(LatchkeyServer {
            listener,
            router: app(auth, self.cookie_config),
        })
    }
}

impl Default for LatchkeyServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Latchkey server.
///
/// Call [`run()`](Self::run) to start serving requests.
pub struct LatchkeyServer {
    listener: TcpListener,
    router: Router,
}

impl LatchkeyServer {
    /// Creates a new builder.
    pub fn builder() -> LatchkeyServerBuilder {
        LatchkeyServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until the process is terminated.
    pub async fn run(self) -> Result<(), LatchkeyError> {
        tracing::info!("Latchkey server running");
        axum::serve(self.listener, self.router)
            .await
            .map_err(LatchkeyError::Serve)
    }

    /// Serves requests until `signal` completes, then stops accepting and
    /// lets in-flight requests finish.
    pub async fn run_until<F>(self, signal: F) -> Result<(), LatchkeyError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Latchkey server running");
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
            .map_err(LatchkeyError::Serve)?;
        tracing::info!("Latchkey server stopped");
        Ok(())
    }
}
