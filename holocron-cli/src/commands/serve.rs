//! HTTP server command
//!
//! Runs the holocron HTTP server with all routes.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use holocron_server::db::create_pool;
use holocron_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Full address to bind to (overrides --port)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Listen port, bound on all interfaces
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let bind_addr = args
        .bind
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], args.port)));

    tracing::info!("Starting holocron server on {}", bind_addr);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig { bind_addr };

    // Runs migrations, then blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
