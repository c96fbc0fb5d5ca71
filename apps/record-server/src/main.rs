//! REST API server for student test records.
//!
//! Wires configuration parsing, logging, the record store and the
//! HTTP server, and shuts down on Ctrl+C.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use record_store_api::{router::Router, server::Server};
use record_store_core::{config::StoreConfig, RecordStore};
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the record server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Request body read timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    request_timeout_ms: u64,

    /// Initial capacity of the student collection
    #[arg(long, default_value_t = 256)]
    initial_student_capacity: usize,

    /// Initial capacity of the test collection
    #[arg(long, default_value_t = 64)]
    initial_test_capacity: usize,

    /// Initial capacity of the result collection
    #[arg(long, default_value_t = 1024)]
    initial_result_capacity: usize,
}

impl Args {
    fn store_config(&self) -> StoreConfig {
        StoreConfig {
            initial_student_capacity: self.initial_student_capacity,
            initial_test_capacity: self.initial_test_capacity,
            initial_result_capacity: self.initial_result_capacity,
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG controls filtering, info by default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Arc::new(args.store_config());
    let store = Arc::new(RecordStore::with_config(&config));
    let router = Router::new(store, config);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", args.host, args.port))?;
    let server = Server::new(addr, router);

    tracing::info!(
        host = %args.host,
        port = args.port,
        request_timeout_ms = args.request_timeout_ms,
        "Starting record server"
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.serve().await {
            tracing::error!("Server error: {}", e);
        }
    });

    signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl_c")?;
    tracing::info!("Shutting down server");
    server_handle.abort();

    Ok(())
}
