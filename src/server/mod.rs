// src/server/mod.rs
//! Gusteau HTTP server
//!
//! This module maps the three cookbook operations onto HTTP:
//! - `POST /parse` canonicalizes a raw name
//! - `POST /entry` registers an ingredient or recipe
//! - `GET /summary` resolves a recipe into flattened ingredient totals
//!
//! The cookbook lives behind a read-write lock: resolutions take the
//! read side and run concurrently, registrations take the write side
//! and are exclusive. A registration is therefore never observable
//! half-applied.

mod handlers;
mod routes;

pub use routes::create_router;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::cookbook::Cookbook;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    /// The cookbook, created empty and living for the process lifetime
    pub cookbook: Cookbook,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            cookbook: Cookbook::new(),
        }
    }
}

/// Start the cookbook server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting gusteau server on {}", config.bind_addr);

    let state = Arc::new(RwLock::new(ServerState::new(config.clone())));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Cookbook is open for business");

    axum::serve(listener, app).await?;
    Ok(())
}
