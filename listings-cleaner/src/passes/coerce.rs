//! Per-cell type coercions: dates, flags, price, response rate.

use std::collections::BTreeMap;

use listings_shared::columns::{BOOLEAN_COLUMNS, DATE_COLUMNS, PRICE_COLUMN, RESPONSE_RATE_COLUMN};
use listings_shared::values;
use tracing::debug;

use crate::errors::CleanError;
use crate::table::{Cell, Table};

/// Parse every present date column. Values that do not parse become missing.
///
/// Returns, per column, how many non-empty values failed to parse.
pub fn parse_dates(table: &mut Table) -> Result<BTreeMap<String, usize>, CleanError> {
    let mut unparsed = BTreeMap::new();
    for name in DATE_COLUMNS {
        let mut failures = 0;
        let present = table.map_column(name, |_, cell| {
            Ok(match cell {
                Cell::Text(text) => match values::parse_datetime(&text) {
                    Some(dt) => Cell::DateTime(dt),
                    None => {
                        failures += 1;
                        Cell::Missing
                    }
                },
                other => other,
            })
        })?;
        if present && failures > 0 {
            debug!(column = %name, count = failures, "Unparseable dates set to null");
            unparsed.insert(name.to_string(), failures);
        }
    }
    Ok(unparsed)
}

/// Map `t`/`f` flags to booleans. Any other token becomes missing.
///
/// Returns, per column, how many non-empty tokens were not recognised.
pub fn parse_booleans(table: &mut Table) -> Result<BTreeMap<String, usize>, CleanError> {
    let mut unmapped = BTreeMap::new();
    for name in BOOLEAN_COLUMNS {
        let mut failures = 0;
        let present = table.map_column(name, |_, cell| {
            Ok(match cell {
                Cell::Text(text) => match values::parse_bool_token(&text) {
                    Some(flag) => Cell::Bool(flag),
                    None => {
                        failures += 1;
                        Cell::Missing
                    }
                },
                other => other,
            })
        })?;
        if present && failures > 0 {
            debug!(column = %name, count = failures, "Unmapped flags set to null");
            unmapped.insert(name.to_string(), failures);
        }
    }
    Ok(unmapped)
}

/// Turn currency text into a number. A value that is still not numeric fails the run.
pub fn normalize_price(table: &mut Table) -> Result<(), CleanError> {
    table.map_column(PRICE_COLUMN, |row, cell| match cell {
        Cell::Text(text) => values::parse_price(&text)
            .map(Cell::Number)
            .ok_or_else(|| CleanError::invalid_price(row, text)),
        other => Ok(other),
    })?;
    Ok(())
}

/// Turn `95%` into `0.95`. Values that are not numbers become missing.
pub fn normalize_response_rate(table: &mut Table) -> Result<(), CleanError> {
    table.map_column(RESPONSE_RATE_COLUMN, |_, cell| {
        Ok(match cell {
            Cell::Text(text) => values::parse_rate(&text)
                .map(Cell::Number)
                .unwrap_or(Cell::Missing),
            other => other,
        })
    })?;
    Ok(())
}
