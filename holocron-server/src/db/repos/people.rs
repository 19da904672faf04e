//! People repository

use sqlx::{FromRow, PgPool};

use super::DbError;

/// Person record from database
#[derive(Debug, Clone, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

/// People repository
pub struct PeopleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PeopleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all people in insertion order.
    pub async fn list(&self) -> Result<Vec<Person>, DbError> {
        let people = sqlx::query_as::<_, Person>("SELECT id, name FROM people ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(people)
    }

    /// Get a single person by id.
    pub async fn get(&self, id: i64) -> Result<Person, DbError> {
        sqlx::query_as::<_, Person>("SELECT id, name FROM people WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "person",
                id: id.to_string(),
            })
    }

    /// Insert a person.
    pub async fn create(&self, name: &str) -> Result<Person, DbError> {
        let person = sqlx::query_as::<_, Person>(
            "INSERT INTO people (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(person)
    }
}
