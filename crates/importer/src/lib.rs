//! One-shot import of the municipal film-permit dataset.
//!
//! Reads the permit CSV exported from the city's servers, creates a
//! synthetic municipal user, and persists one location plus one attributed
//! comment per usable row. Row-level failures (bad numbers, constraint
//! violations) are counted and skipped; the run only aborts if the source
//! file cannot be read or the municipal user cannot be created.
//!
//! The run is sequential and makes no idempotence promise: every run
//! creates a fresh municipal user and a new copy of every row.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sqlx::PgPool;

use filmtour_core::import::{
    compose_comment, parse_row, split_row, ImportSummary, RowError, CITY_USER_NAME,
};
use filmtour_core::types::Id;
use filmtour_db::models::film_location::CreateFilmLocation;
use filmtour_db::models::user::CreateUser;
use filmtour_db::models::user_comment::CreateUserComment;
use filmtour_db::repositories::{FilmLocationRepo, UserCommentRepo, UserRepo};

/// Default source file, a CSV conversion of the city permit JSON retrieved
/// on 2018-12-03. The fixed column layout documents exactly that export.
pub const DEFAULT_SOURCE_PATH: &str = "cityfilmlocations.csv";

/// Errors fatal to an entire import run. Row-level problems never surface
/// here; they are counted in the returned [`ImportSummary`] instead.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The source file could not be opened or read.
    #[error("failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    /// The municipal user could not be created. Nothing can be attributed
    /// without it, so the run never starts.
    #[error("failed to create municipal user: {0}")]
    CityUser(#[source] sqlx::Error),
}

/// Why a single row was skipped.
#[derive(Debug, thiserror::Error)]
enum RowFailure {
    #[error(transparent)]
    Parse(#[from] RowError),

    #[error("database rejected row: {0}")]
    Persist(#[from] sqlx::Error),
}

/// Populate the database from the permit CSV at `path`.
///
/// Creates the municipal user, then walks the file row by row, skipping the
/// header. Each data row either persists a location and its synthesized
/// comment or increments the failure count. Returns the final counts.
pub async fn run_import(pool: &PgPool, path: &Path) -> Result<ImportSummary, ImportError> {
    let city_user = UserRepo::create(
        pool,
        &CreateUser {
            google_id: None,
            name: CITY_USER_NAME.to_string(),
        },
    )
    .await
    .map_err(ImportError::CityUser)?;

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    tracing::info!(path = %path.display(), "Populating database...");

    let mut summary = ImportSummary::default();
    let mut record_number = 0usize;
    for line in reader.lines() {
        let line = line?;
        // Blank lines carry no record and get no number, matching the
        // source format's record counting.
        if line.trim().is_empty() {
            continue;
        }
        record_number += 1;
        tracing::debug!(row = record_number, "{line}");
        if record_number == 1 {
            // Header row.
            continue;
        }
        match import_row(pool, city_user.id, &line).await {
            Ok(()) => summary.record_success(),
            Err(error) => {
                tracing::warn!(row = record_number, %error, "Failed, skipping.");
                summary.record_failure();
            }
        }
    }

    tracing::info!("{summary}");
    Ok(summary)
}

/// Persist one data row as a location plus its municipal comment.
async fn import_row(pool: &PgPool, city_user_id: Id, line: &str) -> Result<(), RowFailure> {
    let fields = split_row(line);
    let row = parse_row(&fields)?;

    let location = FilmLocationRepo::create(
        pool,
        &CreateFilmLocation {
            user_id: city_user_id,
            lat_coordinate: row.lat_coordinate,
            long_coordinate: row.long_coordinate,
            address: row.address.clone(),
            site_name: row.site_name.clone(),
            imdb_id: row.imdb_id.clone(),
            shoot_date: row.shoot_date,
            original_details: row.original_details.clone(),
        },
    )
    .await?;

    // If this insert fails, the location above stays behind without its
    // comment. Matches the original behavior; see DESIGN.md.
    UserCommentRepo::create(
        pool,
        &CreateUserComment {
            film_location_id: location.id,
            user_id: city_user_id,
            text: compose_comment(&row),
        },
    )
    .await?;

    Ok(())
}
