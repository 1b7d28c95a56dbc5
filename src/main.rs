//! URL shortener server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ listener ──▶ request ID / trace / timeout layers
//!                                         │
//!                                         ▼
//!                          ┌──────────────────────────────┐
//!                          │ RedirectService (file table) │──hit──▶ 307
//!                          └──────────────┬───────────────┘
//!                                    miss │
//!                                         ▼
//!                          ┌──────────────────────────────┐
//!                          │ RedirectService (built-ins)  │──hit──▶ 307
//!                          └──────────────┬───────────────┘
//!                                    miss │
//!                                         ▼
//!                               default router ──▶ 200 "Hello, world!"
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;

use urlshort::config::{load_config, ServerConfig};
use urlshort::lifecycle::{signals, startup, Shutdown};
use urlshort::mapping::Format;
use urlshort::observability::logging;

#[derive(Parser)]
#[command(name = "urlshort")]
#[command(about = "Redirect mapped request paths, fall back to a default handler", long_about = None)]
struct Cli {
    /// Redirect table file (JSON or YAML) [default: paths.json]
    #[arg(short, long, visible_alias = "yaml")]
    mapping: Option<PathBuf>,

    /// Encoding of the redirect table; inferred from the extension if omitted
    #[arg(short, long)]
    format: Option<Format>,

    /// Optional TOML file with server settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("urlshort v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(mapping) = cli.mapping {
        config.mapping.path = mapping.display().to_string();
    }
    if let Some(format) = cli.format {
        config.mapping.format = Some(format);
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        mapping = %config.mapping.path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let bind_address = config.listener.bind_address.clone();
    let server = startup::build_server(config)?;

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;
    Ok(())
}
