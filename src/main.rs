//! Translation Gateway
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────────┐
//!                      │               TRANSLATION GATEWAY              │
//!                      │                                                │
//!   POST /translate    │  ┌─────────┐    ┌───────────┐    ┌──────────┐  │
//!   ───────────────────┼─▶│  http   │───▶│  gateway  │───▶│ payload  │  │
//!                      │  │ server  │    │ translate │    │ builder  │  │
//!                      │  └─────────┘    └─────┬─────┘    └──────────┘  │
//!                      │                       │                        │
//!                      │                       ▼                        │
//!   TranslateResult    │  ┌─────────┐    ┌───────────┐                  │
//!   ◀──────────────────┼──│response │◀───│ upstream  │◀─────────────────┼──── JSON-RPC
//!                      │  │ mapping │    │  client   │                  │     backend
//!                      │  └─────────┘    └───────────┘                  │
//!                      │                                                │
//!                      │   config · observability · lifecycle           │
//!                      └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use translate_gateway::config::load_or_default;
use translate_gateway::observability::{logging, metrics};
use translate_gateway::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "translate-gateway")]
#[command(about = "HTTP gateway to a JSON-RPC translation backend", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!("translate-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.endpoint,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
