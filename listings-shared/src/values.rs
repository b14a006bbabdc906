//! Coercion of loosely-typed cell text into typed values.
//!
//! Both pipeline stages go through these functions so that whatever the
//! cleaner writes, the migrator reads back the same way.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Format used when writing timestamps to the cleaned file.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Cell texts read as a missing value, besides the empty string.
///
/// Matches the null markers found in listings exports (`N/A` response rates,
/// `NA` counts) and the ones spreadsheet tools write.
pub const MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw cell denotes a missing value.
pub fn is_missing_token(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || MISSING_TOKENS.contains(&raw)
}

/// Errors raised while decoding a list literal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListDecodeError {
    /// The value is not shaped like any supported list literal.
    #[error("Malformed list literal: {0}")]
    Malformed(String),

    /// A quoted item was opened but never closed.
    #[error("Unterminated item in list literal: {0}")]
    Unterminated(String),
}

impl ListDecodeError {
    /// Create a malformed literal error.
    pub fn malformed(value: impl Into<String>) -> Self {
        Self::Malformed(value.into())
    }

    /// Create an unterminated item error.
    pub fn unterminated(value: impl Into<String>) -> Self {
        Self::Unterminated(value.into())
    }
}

/// Parse a date or timestamp. Unparseable and empty values yield `None`.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Render a timestamp the way the cleaned file stores it.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Map a flag token to a boolean.
///
/// The raw export uses `t`/`f`; the cleaned file uses `true`/`false`. Every
/// other token is unmapped and yields `None`.
pub fn parse_bool_token(raw: &str) -> Option<bool> {
    match raw.trim() {
        "t" | "true" | "True" | "TRUE" => Some(true),
        "f" | "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Parse a finite floating point number.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an integer, accepting integral decimals such as `3.0`.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    parse_number(raw)
        .filter(|v| v.fract() == 0.0 && v.abs() < i64::MAX as f64)
        .map(|v| v as i64)
}

/// Parse a currency string such as `$1,234.50`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let stripped: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    parse_number(&stripped)
}

/// Parse a rate. `95%` becomes `0.95`; a bare number is taken as a fraction already.
pub fn parse_rate(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    match raw.strip_suffix('%') {
        Some(percent) => parse_number(percent).map(|v| v / 100.0),
        None => parse_number(raw),
    }
}

/// Render a number as a plain decimal. Integral values keep one decimal place.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Decode a list of strings from the literal forms found in listings exports.
///
/// Accepted shapes:
/// - a JSON array: `["Wifi", "Kitchen"]`
/// - a brace list, quoted or bare: `{"Wifi","Kitchen"}`, `{TV,"Cable TV"}`
/// - either of the above wrapped in one extra pair of double quotes
/// - a single-quoted bracket list: `['email', 'phone']`
///
/// Empty values and `None` decode to an empty list.
pub fn decode_string_list(raw: &str) -> Result<Vec<String>, ListDecodeError> {
    let value = strip_boundary_quotes(raw.trim());
    if value.is_empty() || value == "None" {
        return Ok(Vec::new());
    }

    if value.starts_with('[') && value.ends_with(']') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(value) {
            return Ok(items);
        }
        return split_items(&value[1..value.len() - 1], raw);
    }

    if value.starts_with('{') && value.ends_with('}') {
        return split_items(&value[1..value.len() - 1], raw);
    }

    Err(ListDecodeError::malformed(raw))
}

/// Drop the `"{ ... }"` / `"[ ... ]"` wrapping quotes left by bad escaping.
fn strip_boundary_quotes(value: &str) -> &str {
    let wrapped = value.len() >= 4
        && ((value.starts_with("\"{") && value.ends_with("}\""))
            || (value.starts_with("\"[") && value.ends_with("]\"")));
    if wrapped {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Split the inside of a list literal into items.
fn split_items(inner: &str, raw: &str) -> Result<Vec<String>, ListDecodeError> {
    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        let Some(&first) = chars.peek() else {
            break;
        };

        let item = if first == '"' || first == '\'' {
            chars.next();
            let mut item = String::new();
            let mut closed = false;
            while let Some(c) = chars.next() {
                match c {
                    '\\' => match chars.next() {
                        Some(escaped) => item.push(escaped),
                        None => return Err(ListDecodeError::unterminated(raw)),
                    },
                    c if c == first => {
                        closed = true;
                        break;
                    }
                    c => item.push(c),
                }
            }
            if !closed {
                return Err(ListDecodeError::unterminated(raw));
            }
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            item
        } else {
            let mut item = String::new();
            while let Some(&c) = chars.peek() {
                if c == ',' {
                    break;
                }
                if c == '"' || c == '\'' || c == '{' || c == '}' || c == '[' || c == ']' {
                    return Err(ListDecodeError::malformed(raw));
                }
                item.push(c);
                chars.next();
            }
            item.trim().to_string()
        };

        if item.is_empty() && first != '"' && first != '\'' {
            return Err(ListDecodeError::malformed(raw));
        }
        items.push(item);

        match chars.next() {
            Some(',') => continue,
            None => break,
            Some(_) => return Err(ListDecodeError::malformed(raw)),
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_missing_tokens() {
        for token in ["", "  ", "N/A", "NA", "NaN", "nan", "null", "NULL", "#N/A", "<NA>"] {
            assert!(is_missing_token(token), "{token:?} should be missing");
        }
        assert!(!is_missing_token("0"));
        assert!(!is_missing_token("Nantes"));
        assert!(!is_missing_token("within an hour"));
    }

    #[test]
    fn test_parse_price_strips_currency_and_separators() {
        assert_eq!(parse_price("$1,234.50"), Some(1234.5));
        assert_eq!(parse_price("$100.00"), Some(100.0));
        assert_eq!(parse_price("100.0"), Some(100.0));
        assert_eq!(parse_price("free"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_parse_bool_token() {
        assert_eq!(parse_bool_token("t"), Some(true));
        assert_eq!(parse_bool_token("f"), Some(false));
        assert_eq!(parse_bool_token("true"), Some(true));
        assert_eq!(parse_bool_token("false"), Some(false));
        assert_eq!(parse_bool_token("yes"), None);
        assert_eq!(parse_bool_token(""), None);
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 9, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_datetime("2023-09-04"), Some(expected));
        assert_eq!(parse_datetime("2023-09-04T00:00:00"), Some(expected));
        assert_eq!(parse_datetime("2023-09-04 00:00:00"), Some(expected));
        assert_eq!(parse_datetime("09/04/2023"), Some(expected));

        let with_time = parse_datetime("2023-09-04T10:30:00Z").unwrap();
        assert_eq!(with_time.hour(), 10);
        assert_eq!(with_time.minute(), 30);
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert_eq!(parse_datetime("2 weeks ago"), None);
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("2023-13-45"), None);
    }

    #[test]
    fn test_format_datetime_reparses() {
        let dt = parse_datetime("2021-02-03").unwrap();
        let text = format_datetime(&dt);
        assert_eq!(text, "2021-02-03T00:00:00");
        assert_eq!(parse_datetime(&text), Some(dt));
    }

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate("95%"), Some(0.95));
        assert_eq!(parse_rate("100%"), Some(1.0));
        assert_eq!(parse_rate("0.5"), Some(0.5));
        assert_eq!(parse_rate("N/A"), None);
    }

    #[test]
    fn test_parse_integer_accepts_integral_decimals() {
        assert_eq!(parse_integer("3"), Some(3));
        assert_eq!(parse_integer("3.0"), Some(3));
        assert_eq!(parse_integer("3.5"), None);
        assert_eq!(parse_integer("abc"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100.0");
        assert_eq!(format_number(1234.5), "1234.5");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(0.95), "0.95");
    }

    #[test]
    fn test_decode_misescaped_brace_list() {
        let decoded = decode_string_list(r#""{"Wifi","Kitchen"}""#).unwrap();
        assert_eq!(decoded, vec!["Wifi", "Kitchen"]);
    }

    #[test]
    fn test_decode_json_array() {
        let decoded = decode_string_list(r#"["Wifi", "Hair dryer", "Café"]"#).unwrap();
        assert_eq!(decoded, vec!["Wifi", "Hair dryer", "Café"]);
    }

    #[test]
    fn test_decode_bare_brace_list() {
        let decoded = decode_string_list(r#"{TV,"Cable TV",Wifi}"#).unwrap();
        assert_eq!(decoded, vec!["TV", "Cable TV", "Wifi"]);
    }

    #[test]
    fn test_decode_single_quoted_list() {
        let decoded = decode_string_list("['email', 'phone', 'work_email']").unwrap();
        assert_eq!(decoded, vec!["email", "phone", "work_email"]);
    }

    #[test]
    fn test_decode_empty_values() {
        assert!(decode_string_list("").unwrap().is_empty());
        assert!(decode_string_list("[]").unwrap().is_empty());
        assert!(decode_string_list("{}").unwrap().is_empty());
        assert!(decode_string_list("None").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(
            decode_string_list("Wifi, Kitchen"),
            Err(ListDecodeError::Malformed(_))
        ));
        assert!(matches!(
            decode_string_list(r#"{"Wifi","Kitchen}"#),
            Err(ListDecodeError::Unterminated(_))
        ));
        assert!(decode_string_list(r#"{"Wifi" "Kitchen"}"#).is_err());
    }
}
