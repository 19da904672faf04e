//! Development sample data
//!
//! Loads a small registry so the API has something to serve locally. Skips
//! any table that already holds rows, so running it against a live database
//! changes nothing.

use anyhow::{Context, Result};
use clap::Parser;

use holocron_server::db::repos::{PeopleRepo, PlanetRepo, UserRepo};
use holocron_server::db::{create_pool, migrations};

const SAMPLE_PEOPLE: &[&str] = &[
    "Luke Skywalker",
    "Leia Organa",
    "Obi-Wan Kenobi",
    "Darth Vader",
];

const SAMPLE_PLANETS: &[&str] = &["Tatooine", "Alderaan", "Hoth", "Dagobah"];

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Load sample data
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool).await.context("Migrations failed")?;

    let users = UserRepo::new(&pool);
    if users.list().await?.is_empty() {
        let user = users
            .create("rebel@example.com", "changeme", true)
            .await
            .context("Failed to create sample user")?;
        tracing::info!("Created sample user: {}", user.email);
    } else {
        tracing::info!("Users table already populated, skipping");
    }

    let people = PeopleRepo::new(&pool);
    if people.list().await?.is_empty() {
        for name in SAMPLE_PEOPLE {
            people
                .create(name)
                .await
                .with_context(|| format!("Failed to create sample person {name}"))?;
            tracing::info!("Created sample person: {}", name);
        }
    } else {
        tracing::info!("People table already populated, skipping");
    }

    let planets = PlanetRepo::new(&pool);
    if planets.list().await?.is_empty() {
        for name in SAMPLE_PLANETS {
            planets
                .create(name)
                .await
                .with_context(|| format!("Failed to create sample planet {name}"))?;
            tracing::info!("Created sample planet: {}", name);
        }
    } else {
        tracing::info!("Planets table already populated, skipping");
    }

    tracing::info!("Seed complete");
    Ok(())
}
