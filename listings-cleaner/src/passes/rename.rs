use listings_shared::columns::COLUMN_RENAMES;

use crate::table::Table;

/// Add the American-spelled copies of the neighbourhood columns. The originals stay.
pub fn rename_columns(table: &mut Table) {
    for (from, to) in COLUMN_RENAMES {
        table.copy_column(from, to);
    }
}
