//! Planet repository

use sqlx::{FromRow, PgPool};

use super::DbError;

/// Planet record from database
#[derive(Debug, Clone, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
}

/// Planet repository
pub struct PlanetRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PlanetRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all planets in insertion order.
    pub async fn list(&self) -> Result<Vec<Planet>, DbError> {
        let planets = sqlx::query_as::<_, Planet>("SELECT id, name FROM planets ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(planets)
    }

    /// Get a single planet by id.
    pub async fn get(&self, id: i64) -> Result<Planet, DbError> {
        sqlx::query_as::<_, Planet>("SELECT id, name FROM planets WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "planet",
                id: id.to_string(),
            })
    }

    /// Insert a planet.
    pub async fn create(&self, name: &str) -> Result<Planet, DbError> {
        let planet = sqlx::query_as::<_, Planet>(
            "INSERT INTO planets (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(planet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_returns_stored_name() {
        let pool = test_pool().await;
        let repo = PlanetRepo::new(&pool);

        let created = repo.create("Tatooine").await.expect("create failed");
        let fetched = repo.get(created.id).await.expect("get failed");

        assert_eq!(fetched.name, "Tatooine");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = PlanetRepo::new(&pool);

        let err = repo.get(i64::MAX).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "planet", .. }));
    }
}
