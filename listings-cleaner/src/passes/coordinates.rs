use listings_shared::columns::{LATITUDE_COLUMN, LONGITUDE_COLUMN};

use crate::table::{Cell, Table};

pub const LATITUDE_BOUNDS: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_BOUNDS: (f64, f64) = (-180.0, 180.0);

/// Drop rows whose coordinates are missing, non-numeric or out of range.
///
/// Runs only when both coordinate columns exist. Returns the number of rows dropped.
pub fn filter_coordinates(table: &mut Table) -> usize {
    let (Some(lat), Some(lon)) = (
        table.column_index(LATITUDE_COLUMN),
        table.column_index(LONGITUDE_COLUMN),
    ) else {
        return 0;
    };

    table.retain_rows(|row| {
        within(&row[lat], LATITUDE_BOUNDS) && within(&row[lon], LONGITUDE_BOUNDS)
    })
}

fn within(cell: &Cell, (min, max): (f64, f64)) -> bool {
    cell.as_number().is_some_and(|v| (min..=max).contains(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_filter() {
        let csv = "id,latitude,longitude\n\
                   1,48.85,2.35\n\
                   2,91.0,2.35\n\
                   3,-90,180\n\
                   4,48.85,-180.5\n\
                   5,,2.35\n\
                   6,north,2.35\n";
        let mut table = Table::from_reader(csv.as_bytes()).unwrap();

        let dropped = filter_coordinates(&mut table);

        assert_eq!(dropped, 4);
        assert_eq!(table.len(), 2);
        for row in 0..table.len() {
            let lat = table.cell(row, "latitude").unwrap().as_number().unwrap();
            let lon = table.cell(row, "longitude").unwrap().as_number().unwrap();
            assert!((-90.0..=90.0).contains(&lat));
            assert!((-180.0..=180.0).contains(&lon));
        }
    }

    #[test]
    fn test_requires_both_columns() {
        let mut table = Table::from_reader("id,latitude\n1,200\n".as_bytes()).unwrap();
        assert_eq!(filter_coordinates(&mut table), 0);
        assert_eq!(table.len(), 1);
    }
}
