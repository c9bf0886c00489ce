use clap::Parser;
use latchkey::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Demo login server with two built-in accounts (john, jane).
#[derive(Debug, Parser)]
#[command(name = "login-server", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "LATCHKEY_BIND", default_value = "127.0.0.1:3000")]
    bind: String,

    /// Mark the session cookie `Secure` (only sent over HTTPS).
    #[arg(long, env = "LATCHKEY_SECURE_COOKIE")]
    secure_cookie: bool,
}

impl Args {
    fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            secure: self.secure_cookie,
            ..CookieConfig::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,latchkey=debug,tower_http=debug")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), LatchkeyError> {
    let server = LatchkeyServer::builder()
        .bind(&args.bind)
        .cookie_config(args.cookie_config())
        .build(CredentialStore::demo())
        .await?;

    server
        .run_until(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("shutdown signal received");
            }
        })
        .await
}
