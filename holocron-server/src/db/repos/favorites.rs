//! Favorite repository
//!
//! Favorites are stateless association rows: user -> person or planet.
//! Only existence matters, so writes are single statements and each commits
//! on its own.

use sqlx::{FromRow, PgPool};

use crate::models::FavoriteTarget;

use super::DbError;

/// Favorite association
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub target: FavoriteTarget,
}

/// Raw row shape; the target column pair is collapsed into a
/// [`FavoriteTarget`] before leaving the repository.
#[derive(Debug, FromRow)]
struct FavoriteRow {
    id: i64,
    user_id: i64,
    people_id: Option<i64>,
    planet_id: Option<i64>,
}

impl TryFrom<FavoriteRow> for Favorite {
    type Error = DbError;

    fn try_from(row: FavoriteRow) -> Result<Self, DbError> {
        let target = FavoriteTarget::from_columns(row.people_id, row.planet_id)
            .ok_or(DbError::CorruptFavorite { id: row.id })?;

        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            target,
        })
    }
}

/// Favorite repository
pub struct FavoriteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> FavoriteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all favorites owned by a user, oldest first.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Favorite>, DbError> {
        let rows = sqlx::query_as::<_, FavoriteRow>(
            r#"
            SELECT id, user_id, people_id, planet_id
            FROM favorites
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Favorite::try_from).collect()
    }

    /// Insert a favorite for the given user.
    ///
    /// The referenced person/planet is not looked up first: the foreign key
    /// rejects unknown ids, and that violation is reported as NotFound for
    /// whichever reference failed.
    pub async fn add(&self, user_id: i64, target: FavoriteTarget) -> Result<Favorite, DbError> {
        let row = sqlx::query_as::<_, FavoriteRow>(
            r#"
            INSERT INTO favorites (user_id, people_id, planet_id)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, people_id, planet_id
            "#,
        )
        .bind(user_id)
        .bind(target.people_id())
        .bind(target.planet_id())
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_insert_error(e, user_id, target))?;

        row.try_into()
    }

    /// Remove one favorite matching user + target.
    ///
    /// Locate-and-delete in a single statement, so no explicit transaction
    /// is needed. Duplicates come off one per call, oldest first.
    pub async fn remove(&self, user_id: i64, target: FavoriteTarget) -> Result<(), DbError> {
        let query = match target {
            FavoriteTarget::Person(_) => {
                r#"
                DELETE FROM favorites
                WHERE id = (
                    SELECT id FROM favorites
                    WHERE user_id = $1 AND people_id = $2
                    ORDER BY id LIMIT 1
                )
                "#
            }
            FavoriteTarget::Planet(_) => {
                r#"
                DELETE FROM favorites
                WHERE id = (
                    SELECT id FROM favorites
                    WHERE user_id = $1 AND planet_id = $2
                    ORDER BY id LIMIT 1
                )
                "#
            }
        };

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(target.id())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "favorite",
                id: target.id().to_string(),
            });
        }

        Ok(())
    }
}

/// Translate an insert failure into a domain error.
///
/// Postgres names the violated constraint, which tells us whether the user
/// reference or the target reference was dangling.
fn map_insert_error(e: sqlx::Error, user_id: i64, target: FavoriteTarget) -> DbError {
    match e {
        sqlx::Error::Database(db)
            if matches!(db.kind(), sqlx::error::ErrorKind::ForeignKeyViolation) =>
        {
            if db.constraint().is_some_and(|c| c.contains("user")) {
                DbError::NotFound {
                    resource: "user",
                    id: user_id.to_string(),
                }
            } else {
                DbError::NotFound {
                    resource: target.resource(),
                    id: target.id().to_string(),
                }
            }
        }
        other => DbError::Sqlx(other),
    }
}
