use listings_shared::columns::{NUMERIC_FILL_COLUMNS, OPTIONAL_TEXT_COLUMNS};

use crate::errors::CleanError;
use crate::table::{Cell, Table};

/// Fill missing optional text with `""` and missing counts/scores with `0`.
///
/// Every column on both lists must exist.
pub fn fill_missing(table: &mut Table) -> Result<(), CleanError> {
    for name in OPTIONAL_TEXT_COLUMNS.iter().chain(NUMERIC_FILL_COLUMNS) {
        table.require_column(name)?;
    }

    for name in OPTIONAL_TEXT_COLUMNS {
        table.map_column(name, |_, cell| {
            Ok(match cell {
                Cell::Missing => Cell::Text(String::new()),
                other => other,
            })
        })?;
    }
    for name in NUMERIC_FILL_COLUMNS {
        table.map_column(name, |_, cell| {
            Ok(match cell {
                Cell::Missing => Cell::Number(0.0),
                other => other,
            })
        })?;
    }
    Ok(())
}
