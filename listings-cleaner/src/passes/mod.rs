//! Cleaning passes.
//!
//! Each pass rewrites the table in place. They run in a fixed order (see
//! [`crate::cleaner::clean_table`]) because later passes rely on the cell
//! types produced by earlier ones: price normalization runs after the
//! numeric fill, and the coordinate filter runs after every per-cell pass.

mod amenities;
mod coerce;
mod coordinates;
mod fill;
mod rename;

pub use amenities::decode_amenities;
pub use coerce::{normalize_price, normalize_response_rate, parse_booleans, parse_dates};
pub use coordinates::{filter_coordinates, LATITUDE_BOUNDS, LONGITUDE_BOUNDS};
pub use fill::fill_missing;
pub use rename::rename_columns;
