//! Image entity model and DTOs.

use filmtour_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full image row from the `images` table. Images are attached to a
/// location by users; the importer never creates them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: Id,
    pub film_location_id: Id,
    pub user_id: Id,
    pub url: String,
    pub description: Option<String>,
    pub approved: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new image.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateImage {
    pub film_location_id: Id,
    pub user_id: Id,
    pub url: String,
    pub description: Option<String>,
}
