//! User entity model and DTOs.

use filmtour_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: Id,
    /// Google account subject. Absent for synthetic users such as the
    /// municipal import author.
    pub google_id: Option<String>,
    /// Display name.
    pub name: String,
    pub banned: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub google_id: Option<String>,
    pub name: String,
}
