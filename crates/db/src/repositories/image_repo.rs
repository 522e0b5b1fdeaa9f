//! Repository for the `images` table.

use filmtour_core::types::Id;
use sqlx::PgPool;

use crate::models::image::{CreateImage, Image};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, film_location_id, user_id, url, description, approved, created_at";

/// Provides CRUD operations for images.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateImage) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (film_location_id, user_id, url, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(input.film_location_id)
            .bind(input.user_id)
            .bind(&input.url)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an image by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the images attached to one location, oldest first.
    pub async fn list_by_location(
        pool: &PgPool,
        film_location_id: Id,
    ) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM images WHERE film_location_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(film_location_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an image. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: Id) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
