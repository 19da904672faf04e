//! Database migrations
//!
//! Idempotent table creation, executed at server startup before the
//! listener binds.

use sqlx::PgPool;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create people table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create planets table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS planets (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create favorites table.
    // The CHECK keeps the two target columns mutually exclusive: a favorite
    // points at exactly one of a person or a planet.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL REFERENCES users(id),
            people_id BIGINT REFERENCES people(id),
            planet_id BIGINT REFERENCES planets(id),
            CHECK ((people_id IS NULL) <> (planet_id IS NULL))
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        // Running twice must not error
        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }
}
