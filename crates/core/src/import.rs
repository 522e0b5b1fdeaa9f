//! Core types, constants, and pure row logic for the municipal permit
//! dataset import.
//!
//! This module has zero external dependencies (no DB, no async, no I/O).
//! It provides:
//!
//! - The fixed column layout and sentinel values of the source CSV
//! - Row splitting and parsing into a typed record
//! - Synthetic comment composition for imported locations
//! - The per-run success/failure summary

use chrono::DateTime;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Source file layout
// ---------------------------------------------------------------------------

// Column positions in the permit CSV. Column 0 is an unused record number;
// title and type are present in the export but not stored.
pub const INDEX_TITLE: usize = 1;
pub const INDEX_TYPE: usize = 2;
pub const INDEX_IMDB: usize = 3;
pub const INDEX_ADDRESS: usize = 4;
pub const INDEX_SITE: usize = 5;
pub const INDEX_SHOOT_DATE: usize = 6;
pub const INDEX_ORIGINAL_DETAILS: usize = 7;
pub const INDEX_GEO_X: usize = 8;
pub const INDEX_GEO_Y: usize = 9;

/// Byte range of the nine-character title ID within an IMDb URL field.
/// The export always uses one fixed URL shape, e.g.
/// `http://www.imdb.com/title/tt0848228`.
pub const IMDB_URL_ID_RANGE: std::ops::Range<usize> = 26..35;

/// Sentinel the dataset uses for absent shoot-date and original-details
/// fields. Case-sensitive literal, distinct from an empty string.
pub const NULL_SENTINEL: &str = "null";

/// Sentinel the dataset uses for an absent IMDb field.
pub const NOT_APPLICABLE_SENTINEL: &str = "na";

/// Display name of the synthetic user that owns all imported content.
pub const CITY_USER_NAME: &str = "City of Albuquerque";

/// Maximum length of a comment body, enforced by the schema.
pub const MAX_COMMENT_LENGTH: usize = 4096;

/// Date format used in synthesized comments.
const SHOOT_DATE_FORMAT: &str = "%m/%d/%Y";

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// A failure confined to a single input row. Import runs count these and
/// continue with the next row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("row has no column {0}")]
    MissingColumn(usize),

    #[error("invalid coordinate {value:?}")]
    InvalidCoordinate { value: String },

    #[error("invalid shoot date {value:?}")]
    InvalidShootDate { value: String },

    #[error("IMDb field too short to carry a title ID: {value:?}")]
    ImdbFieldTooShort { value: String },
}

/// One successfully parsed data row, ready to persist as a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRow {
    /// Nine-character IMDb title ID sliced out of the URL column.
    pub imdb_id: Option<String>,
    pub lat_coordinate: f64,
    pub long_coordinate: f64,
    pub address: Option<String>,
    pub site_name: Option<String>,
    /// Epoch milliseconds, as supplied by the permit data.
    pub shoot_date: Option<i64>,
    /// Verbatim details text from the dataset.
    pub original_details: Option<String>,
}

/// Split a raw line on commas. The export carries no quoting, so fields
/// containing the delimiter are unsupported. This is an external-data
/// constraint of the one export this importer exists for, not something to
/// fix with quote handling.
pub fn split_row(line: &str) -> Vec<&str> {
    line.split(',').collect()
}

fn column<'a>(fields: &[&'a str], index: usize) -> Result<&'a str, RowError> {
    fields
        .get(index)
        .copied()
        .ok_or(RowError::MissingColumn(index))
}

/// Convert an empty or whitespace-only field to `None`.
fn non_empty(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse the fields of one data row into a [`ParsedRow`].
///
/// Sentinels: `"na"` in the IMDb column and `"null"` in the shoot-date and
/// original-details columns mean the field is absent. Non-numeric
/// coordinates or shoot dates are row errors, as is an IMDb field too short
/// to slice the title ID from.
pub fn parse_row(fields: &[&str]) -> Result<ParsedRow, RowError> {
    let imdb_field = column(fields, INDEX_IMDB)?;
    let imdb_id = if imdb_field == NOT_APPLICABLE_SENTINEL {
        None
    } else {
        // Slices the title ID out of the URL.
        let id = imdb_field
            .get(IMDB_URL_ID_RANGE)
            .ok_or_else(|| RowError::ImdbFieldTooShort {
                value: imdb_field.to_string(),
            })?;
        Some(id.to_string())
    };

    let lat_field = column(fields, INDEX_GEO_X)?;
    let lat_coordinate: f64 =
        lat_field
            .trim()
            .parse()
            .map_err(|_| RowError::InvalidCoordinate {
                value: lat_field.to_string(),
            })?;
    let long_field = column(fields, INDEX_GEO_Y)?;
    let long_coordinate: f64 =
        long_field
            .trim()
            .parse()
            .map_err(|_| RowError::InvalidCoordinate {
                value: long_field.to_string(),
            })?;

    let address = non_empty(column(fields, INDEX_ADDRESS)?);
    let site_name = non_empty(column(fields, INDEX_SITE)?);

    let shoot_field = column(fields, INDEX_SHOOT_DATE)?;
    let shoot_date = if shoot_field == NULL_SENTINEL {
        None
    } else {
        let millis: i64 =
            shoot_field
                .trim()
                .parse()
                .map_err(|_| RowError::InvalidShootDate {
                    value: shoot_field.to_string(),
                })?;
        Some(millis)
    };

    let details_field = column(fields, INDEX_ORIGINAL_DETAILS)?;
    let original_details = if details_field == NULL_SENTINEL {
        None
    } else {
        non_empty(details_field)
    };

    Ok(ParsedRow {
        imdb_id,
        lat_coordinate,
        long_coordinate,
        address,
        site_name,
        shoot_date,
        original_details,
    })
}

// ---------------------------------------------------------------------------
// Comment composition
// ---------------------------------------------------------------------------

/// Compose the synthesized municipal comment for an imported location:
/// `"Shot on {date}"` (or `"Shot"` without a date), then `" at {address}"`
/// and `". {details}"` when present.
pub fn compose_comment(row: &ParsedRow) -> String {
    let mut post = String::new();
    match row.shoot_date {
        Some(millis) => {
            post.push_str("Shot on ");
            post.push_str(&format_shoot_date(millis));
        }
        None => post.push_str("Shot"),
    }
    if let Some(address) = &row.address {
        post.push_str(" at ");
        post.push_str(address);
    }
    if let Some(details) = &row.original_details {
        post.push_str(". ");
        post.push_str(details);
    }
    post
}

/// Format an epoch-millisecond shoot date as `MM/DD/YYYY` in UTC, never
/// the server's local timezone — the permit dates are midnight-UTC epochs,
/// which a westward local offset would print as the previous day. Falls
/// back to the raw number for timestamps outside the representable range.
fn format_shoot_date(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(date) => date.format(SHOOT_DATE_FORMAT).to_string(),
        None => millis.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Run summary
// ---------------------------------------------------------------------------

/// Success/failure counts for one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub successes: u32,
    pub failures: u32,
}

impl ImportSummary {
    pub fn record_success(&mut self) {
        self.successes += 1;
    }

    pub fn record_failure(&mut self) {
        self.failures += 1;
    }
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Added {} locations, {} failures.",
            self.successes, self.failures
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
