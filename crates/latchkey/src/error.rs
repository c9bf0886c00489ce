//! Unified error type for the Latchkey server.

/// Top-level error for starting and running the server.
///
/// Request handling itself never fails: every bad cookie or bad password
/// ends in a redirect. What's left is the listener and the serve loop.
#[derive(Debug, thiserror::Error)]
pub enum LatchkeyError {
    /// Binding the listening socket failed (port in use, bad address, ...).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept/serve loop stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
