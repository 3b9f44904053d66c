//! Ollabench daemon - tool-call benchmark server.
//!
//! Serves the benchmark UI and scores the tool-calling behavior of
//! locally-hosted chat models against caller-declared expectations.

use anyhow::Result;
use clap::Parser;
use ollabenchd::server;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "ollabenchd", version, about = "Tool-call benchmark daemon")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8090")]
    bind: String,

    /// Directory holding the single-page UI
    #[arg(long, default_value = "static")]
    static_dir: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let args = Args::parse();

    info!("Ollabench daemon v{} starting", env!("CARGO_PKG_VERSION"));

    server::run(&args.bind, &args.static_dir).await
}
