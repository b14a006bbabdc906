//! Cleans the raw listings export into the file the migrator loads.

use anyhow::Result;
use dotenv::dotenv;
use listings_cleaner::{clean_with_report, CleanerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("listings_cleaner=info,listings_clean=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let config = CleanerConfig::from_env();
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "Starting data cleaning"
    );

    let (_, report) = clean_with_report(&config.input_path, &config.output_path)?;
    info!(
        rows_read = report.rows_read,
        rows_written = report.rows_written,
        "Cleaned data written"
    );
    Ok(())
}
