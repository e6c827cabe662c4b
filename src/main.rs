//! Text Embedding Service
//!
//! Entry point for the embedding server.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use embedding_service::config::DEFAULT_PORT;
use embedding_service::server::{init_metrics, init_tracing, App, ServerConfig};
use embedding_service::{embeddings, Config, Result};

/// Text Embedding Service - turns text into embedding vectors over HTTP
#[derive(Parser, Debug)]
#[command(name = "embedding-service")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_json);

    tracing::info!(
        "Text Embedding Service v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config {
        port: cli.port,
        log_level: cli.log_level,
        log_json: cli.log_json,
        ..Config::default()
    };

    tracing::debug!(?config, "Configuration loaded");

    config.validate()?;

    init_metrics();

    // Loading can hit the network and the filesystem; a failure ends startup here.
    let model = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || embeddings::initialize(&config))
            .await
            .map_err(|e| embedding_service::Error::internal(format!("model loader panicked: {e}")))??
    };

    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };

    App::new(server_config, model).run().await
}
