//! Repository for the `user_comments` table.

use filmtour_core::types::Id;
use sqlx::PgPool;

use crate::models::user_comment::{CreateUserComment, UserComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, film_location_id, user_id, text, approved, created_at";

/// Provides CRUD operations for user comments.
pub struct UserCommentRepo;

impl UserCommentRepo {
    /// Insert a new comment, returning the created row. The referenced
    /// location must already exist; the foreign key rejects anything else.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUserComment,
    ) -> Result<UserComment, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_comments (film_location_id, user_id, text)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserComment>(&query)
            .bind(input.film_location_id)
            .bind(input.user_id)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<UserComment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_comments WHERE id = $1");
        sqlx::query_as::<_, UserComment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the comments on one location, oldest first.
    pub async fn list_by_location(
        pool: &PgPool,
        film_location_id: Id,
    ) -> Result<Vec<UserComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_comments
             WHERE film_location_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, UserComment>(&query)
            .bind(film_location_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a comment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: Id) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all comments.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM user_comments")
            .fetch_one(pool)
            .await
    }
}
