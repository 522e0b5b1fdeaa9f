//! Film location entity model and DTOs.

use filmtour_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full location row from the `film_locations` table.
///
/// Created either by direct user submission or by the permit-data import;
/// the import never deletes locations.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmLocation {
    pub id: Id,
    /// The user who submitted this location.
    pub user_id: Id,
    pub lat_coordinate: f64,
    pub long_coordinate: f64,
    pub address: Option<String>,
    pub site_name: Option<String>,
    /// Nine-character IMDb title ID, when known.
    pub imdb_id: Option<String>,
    /// Shoot date as epoch milliseconds, as supplied by the permit data.
    pub shoot_date: Option<i64>,
    /// Verbatim details text from the municipal dataset.
    pub original_details: Option<String>,
    pub approved: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new film location.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilmLocation {
    pub user_id: Id,
    pub lat_coordinate: f64,
    pub long_coordinate: f64,
    pub address: Option<String>,
    pub site_name: Option<String>,
    pub imdb_id: Option<String>,
    pub shoot_date: Option<i64>,
    pub original_details: Option<String>,
}
