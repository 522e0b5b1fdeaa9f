use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filmtour_importer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = filmtour_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    filmtour_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    filmtour_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    let source = std::env::var("IMPORT_SOURCE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(filmtour_importer::DEFAULT_SOURCE_PATH));

    let summary = filmtour_importer::run_import(&pool, &source)
        .await
        .context("Import run failed")?;
    tracing::info!(
        successes = summary.successes,
        failures = summary.failures,
        "Import complete"
    );

    Ok(())
}
