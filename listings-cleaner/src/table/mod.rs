//! Column-addressed in-memory table of listing rows.

mod cell;
mod frame;

pub use cell::Cell;
pub use frame::Table;
