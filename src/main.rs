// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use gusteau::ServerConfig;
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "gusteau")]
#[command(author, version, about = "In-memory cookbook service with recipe resolution", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the cookbook HTTP server
    Serve {
        /// Address to bind to
        #[arg(short, long, default_value = "0.0.0.0:8080")]
        bind: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => {
            let config = ServerConfig { bind_addr: bind };
            gusteau::run_server(config).await
        }
    }
}
