//! The cleaning run: read, apply every pass in order, write.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use listings_shared::CleanManifest;
use tracing::{debug, error, info, instrument};

use crate::errors::CleanError;
use crate::passes;
use crate::report::CleanReport;
use crate::table::Table;

/// Clean `input` and write the result to `output`.
///
/// Returns the cleaned table. On error nothing is written.
pub fn clean(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Table, CleanError> {
    clean_with_report(input, output).map(|(table, _)| table)
}

/// Same as [`clean`], also returning what the run changed.
#[instrument(skip_all, fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
pub fn clean_with_report(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<(Table, CleanReport), CleanError> {
    match run(input.as_ref(), output.as_ref()) {
        Ok(result) => Ok(result),
        Err(e) => {
            error!(error = %e, "Error during data cleaning");
            Err(e)
        }
    }
}

fn run(input: &Path, output: &Path) -> Result<(Table, CleanReport), CleanError> {
    let mut table = Table::read_csv(input)?;
    info!(rows = table.len(), columns = table.headers().len(), "Loaded raw listings");

    let report = clean_table(&mut table)?;

    table.write_csv(output)?;
    write_manifest(&table, output)?;

    info!(
        rows_written = report.rows_written,
        rows_dropped = report.rows_dropped,
        "Data cleaning completed successfully"
    );
    Ok((table, report))
}

/// Apply every cleaning pass to `table` in place.
pub fn clean_table(table: &mut Table) -> Result<CleanReport, CleanError> {
    let mut report = CleanReport {
        rows_read: table.len(),
        missing_before_repair: table
            .missing_counts()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .collect(),
        ..CleanReport::default()
    };
    debug!(
        missing = report.total_missing_before_repair(),
        "Counted missing values"
    );

    passes::fill_missing(table)?;
    report.unparsed_dates = passes::parse_dates(table)?;
    report.unmapped_booleans = passes::parse_booleans(table)?;
    passes::normalize_price(table)?;
    passes::decode_amenities(table)?;
    report.rows_dropped = passes::filter_coordinates(table);
    passes::normalize_response_rate(table)?;
    passes::rename_columns(table);

    if report.rows_dropped > 0 {
        info!(count = report.rows_dropped, "Dropped rows with invalid coordinates");
    }
    report.rows_written = table.len();
    Ok(report)
}

fn write_manifest(table: &Table, output: &Path) -> Result<(), CleanError> {
    let manifest = CleanManifest::new(table.headers().to_vec(), table.len());
    let path = CleanManifest::path_for(output);
    let writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(writer, &manifest)?;
    debug!(path = %path.display(), "Wrote manifest");
    Ok(())
}
