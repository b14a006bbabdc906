//! A single table cell and its text encoding.

use chrono::NaiveDateTime;
use listings_shared::values;

/// A cell as it moves through the cleaning passes.
///
/// Cells start out as `Missing` or `Text` when a file is read. Passes replace
/// them with typed variants; writing renders every variant back to text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    List(Vec<String>),
}

impl Cell {
    /// Read a raw CSV field. Empty fields and null markers such as `N/A` are missing values.
    pub fn from_raw(raw: &str) -> Self {
        if values::is_missing_token(raw) {
            Cell::Missing
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// The raw text of a `Text` cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric value of a `Number` cell or of a `Text` cell holding a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            Cell::Text(text) => values::parse_number(text),
            _ => None,
        }
    }

    /// Render the cell for the cleaned file.
    pub fn render(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Text(text) => text.clone(),
            Cell::Number(value) => values::format_number(*value),
            Cell::Bool(value) => value.to_string(),
            Cell::DateTime(value) => values::format_datetime(value),
            // Serializing a list of strings cannot fail.
            Cell::List(items) => serde_json::to_string(items).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_typed_cells() {
        assert_eq!(Cell::Missing.render(), "");
        assert_eq!(Cell::Number(100.0).render(), "100.0");
        assert_eq!(Cell::Bool(true).render(), "true");
        assert_eq!(
            Cell::List(vec!["Wifi".to_string(), "Kitchen".to_string()]).render(),
            r#"["Wifi","Kitchen"]"#
        );
        let dt = values::parse_datetime("2023-09-04").unwrap();
        assert_eq!(Cell::DateTime(dt).render(), "2023-09-04T00:00:00");
    }

    #[test]
    fn test_from_raw() {
        assert!(Cell::from_raw("").is_missing());
        assert!(Cell::from_raw("N/A").is_missing());
        assert!(Cell::from_raw("NA").is_missing());
        assert_eq!(Cell::from_raw("x"), Cell::Text("x".to_string()));
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Cell::Text("48.85".to_string()).as_number(), Some(48.85));
        assert_eq!(Cell::Number(2.0).as_number(), Some(2.0));
        assert_eq!(Cell::Text("north".to_string()).as_number(), None);
        assert_eq!(Cell::Missing.as_number(), None);
    }
}
