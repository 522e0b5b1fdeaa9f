//! Repository for the `film_locations` table.

use filmtour_core::types::Id;
use sqlx::PgPool;

use crate::models::film_location::{CreateFilmLocation, FilmLocation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, lat_coordinate, long_coordinate, address, site_name, \
                        imdb_id, shoot_date, original_details, approved, created_at";

/// Provides CRUD operations for film locations.
pub struct FilmLocationRepo;

impl FilmLocationRepo {
    /// Insert a new location, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFilmLocation,
    ) -> Result<FilmLocation, sqlx::Error> {
        let query = format!(
            "INSERT INTO film_locations
                (user_id, lat_coordinate, long_coordinate, address, site_name,
                 imdb_id, shoot_date, original_details)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilmLocation>(&query)
            .bind(input.user_id)
            .bind(input.lat_coordinate)
            .bind(input.long_coordinate)
            .bind(&input.address)
            .bind(&input.site_name)
            .bind(&input.imdb_id)
            .bind(input.shoot_date)
            .bind(&input.original_details)
            .fetch_one(pool)
            .await
    }

    /// Find a location by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<FilmLocation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film_locations WHERE id = $1");
        sqlx::query_as::<_, FilmLocation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all locations ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<FilmLocation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film_locations ORDER BY id");
        sqlx::query_as::<_, FilmLocation>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the locations submitted by one user, oldest first.
    pub async fn list_by_user(pool: &PgPool, user_id: Id) -> Result<Vec<FilmLocation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM film_locations WHERE user_id = $1 ORDER BY created_at");
        sqlx::query_as::<_, FilmLocation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a location. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: Id) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM film_locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all locations.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM film_locations")
            .fetch_one(pool)
            .await
    }
}
