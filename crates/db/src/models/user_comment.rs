//! User comment entity model and DTOs.

use filmtour_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full comment row from the `user_comments` table.
///
/// Municipal comments are synthesized by the importer; everything else
/// comes from direct user submission.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserComment {
    pub id: Id,
    /// The location this comment belongs to. Always an existing row; the
    /// schema enforces the ordering dependency.
    pub film_location_id: Id,
    pub user_id: Id,
    /// Comment body, 4096 characters maximum.
    pub text: String,
    /// Admin approval flag, kept for a stricter display policy later.
    pub approved: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserComment {
    pub film_location_id: Id,
    pub user_id: Id,
    pub text: String,
}
