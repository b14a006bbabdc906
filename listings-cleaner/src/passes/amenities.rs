use listings_shared::columns::AMENITIES_COLUMN;
use listings_shared::values::decode_string_list;

use crate::errors::CleanError;
use crate::table::{Cell, Table};

/// Decode amenity list literals into lists. An undecodable value fails the run.
pub fn decode_amenities(table: &mut Table) -> Result<(), CleanError> {
    table.map_column(AMENITIES_COLUMN, |row, cell| match cell {
        Cell::Missing => Ok(Cell::List(Vec::new())),
        Cell::Text(text) => decode_string_list(&text)
            .map(Cell::List)
            .map_err(|e| CleanError::invalid_amenities(row, e.to_string())),
        other => Ok(other),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_brace_list() {
        let mut table =
            Table::from_reader("id,amenities\n1,\"{\"\"Wifi\"\",\"\"Kitchen\"\"}\"\n2,\n".as_bytes())
                .unwrap();
        decode_amenities(&mut table).unwrap();

        assert_eq!(
            table.cell(0, "amenities"),
            Some(&Cell::List(vec!["Wifi".to_string(), "Kitchen".to_string()]))
        );
        assert_eq!(table.cell(1, "amenities"), Some(&Cell::List(Vec::new())));
    }

    #[test]
    fn test_undecodable_amenities_are_fatal() {
        let mut table = Table::from_reader("id,amenities\n1,Wifi and a kettle\n".as_bytes()).unwrap();
        let result = decode_amenities(&mut table);
        assert!(matches!(result, Err(CleanError::InvalidAmenities { row: 0, .. })));
    }
}
