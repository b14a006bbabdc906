//! Migrates the cleaned listings file into MongoDB.

use anyhow::Result;
use dotenv::dotenv;
use listings_migrator::config::log_file_from_env;
use listings_migrator::Dependencies;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to the migration log file and to stdout.
///
/// The returned guard flushes the file writer when dropped and must live until exit.
fn init_tracing() -> Result<WorkerGuard> {
    let path = log_file_from_env();
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir()?,
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid log file path: {}", path.display()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("listings_migrator=info,listings_migrate=info,listings_repository=info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let _guard = init_tracing()?;

    info!("Starting listings migration");

    let deps = match Dependencies::new().await {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Migration failed");
            return Err(e.into());
        }
    };

    let report = deps.runner.run().await?;
    info!(
        rows_read = report.rows_read,
        listings = report.listings_inserted,
        hosts = report.hosts_inserted,
        duplicate_host_rows = report.duplicate_host_rows,
        skipped = report.skipped_count(),
        "Migration summary"
    );
    for skipped in &report.skipped {
        info!(row = skipped.ordinal, reason = %skipped.reason, "Skipped row");
    }
    Ok(())
}
