//! User repository
//!
//! The password column is write-only from this repository's point of view:
//! it is stored at creation and never selected back, so it cannot leak into
//! a response.

use sqlx::{FromRow, PgPool};

/// User record from database (password deliberately absent)
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("favorite {id} references neither a person nor a planet")]
    CorruptFavorite { id: i64 },
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users in insertion order.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, is_active FROM users ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// First user by insertion order, if any.
    ///
    /// Stands in for session identity: favorite endpoints act on behalf of
    /// this user. Returns None on an empty table so callers can answer with
    /// an explicit error instead of crashing.
    pub async fn first(&self) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, is_active FROM users ORDER BY id LIMIT 1",
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a user.
    pub async fn create(
        &self,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, is_active)
            VALUES ($1, $2, $3)
            RETURNING id, email, is_active
            "#,
        )
        .bind(email)
        .bind(password)
        .bind(is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p holocron-server -- --ignored

    /// Unique email per test run so reruns against the same database pass.
    fn unique_email(tag: &str) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock before epoch")
            .as_nanos();
        format!("{tag}-{nanos}@example.com")
    }

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn first_returns_lowest_id() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let created = repo
            .create(&unique_email("first"), "pw", true)
            .await
            .expect("create failed");

        let first = repo.first().await.expect("query failed").expect("no users");
        assert!(first.id <= created.id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_includes_created_user() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let email = unique_email("list");
        let created = repo.create(&email, "pw", true).await.expect("create failed");

        let users = repo.list().await.expect("list failed");
        let found = users.iter().find(|u| u.id == created.id).expect("missing");
        assert_eq!(found.email, email);
        assert!(found.is_active);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_email_is_rejected() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let email = unique_email("dup");
        repo.create(&email, "pw", true).await.expect("create failed");

        let err = repo.create(&email, "pw", false).await;
        assert!(err.is_err());
    }
}
