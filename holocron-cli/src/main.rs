//! holocron CLI - star registry API server tooling
//!
//! This is the main entry point for the holocron command-line tool, which
//! provides:
//! - HTTP API server (`serve` subcommand)
//! - Development sample data loading (`seed` subcommand)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "holocron",
    author,
    version,
    about = "Star registry REST API - people, planets, users, and favorites"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Load sample data for development (no-op when tables already hold data)
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DATABASE_URL and friends from a local .env, if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init_tracing(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Seed(args) => commands::seed::run_seed(args).await,
    }
}
