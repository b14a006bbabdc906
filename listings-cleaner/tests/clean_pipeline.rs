use std::fs;
use std::path::{Path, PathBuf};

use listings_cleaner::{clean, clean_with_report, Cell, CleanError};
use listings_shared::CleanManifest;
use tempfile::TempDir;

const COLUMNS: &[&str] = &[
    "id",
    "host_id",
    "name",
    "description",
    "neighborhood_overview",
    "host_about",
    "host_response_time",
    "host_response_rate",
    "host_neighbourhood",
    "host_since",
    "host_is_superhost",
    "neighbourhood_cleansed",
    "neighbourhood_group_cleansed",
    "latitude",
    "longitude",
    "bathrooms",
    "bedrooms",
    "beds",
    "amenities",
    "price",
    "last_review",
    "review_scores_rating",
    "review_scores_accuracy",
    "instant_bookable",
];

/// A raw row with sensible values, overridden per test.
fn raw_row(overrides: &[(&str, &str)]) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|column| {
            if let Some((_, value)) = overrides.iter().find(|(name, _)| name == column) {
                return value.to_string();
            }
            match *column {
                "id" => "1",
                "host_id" => "55",
                "name" => "Flat near the Louvre",
                "host_response_rate" => "95%",
                "host_since" => "2015-06-01",
                "host_is_superhost" => "f",
                "neighbourhood_cleansed" => "Louvre",
                "latitude" => "48.85",
                "longitude" => "2.35",
                "amenities" => "[\"Wifi\"]",
                "price" => "$80.00",
                "instant_bookable" => "t",
                _ => "",
            }
            .to_string()
        })
        .collect()
}

fn write_raw(dir: &Path, rows: &[Vec<String>]) -> PathBuf {
    let path = dir.join("listings_Paris.csv");
    let mut writer = csv::Writer::from_path(&path).unwrap();
    writer.write_record(COLUMNS).unwrap();
    for row in rows {
        writer.write_record(row).unwrap();
    }
    writer.flush().unwrap();
    path
}

#[test]
fn test_scenario_row_is_cleaned() {
    let dir = TempDir::new().unwrap();
    let input = write_raw(
        dir.path(),
        &[raw_row(&[
            ("price", "$100.00"),
            ("amenities", "\"{\"Wifi\",\"Kitchen\"}\""),
            ("host_is_superhost", "t"),
        ])],
    );
    let output = dir.path().join("listings_Paris_clean.csv");

    let table = clean(&input, &output).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.cell(0, "price"), Some(&Cell::Number(100.0)));
    assert_eq!(
        table.cell(0, "amenities"),
        Some(&Cell::List(vec!["Wifi".to_string(), "Kitchen".to_string()]))
    );
    assert_eq!(table.cell(0, "host_is_superhost"), Some(&Cell::Bool(true)));
    assert_eq!(table.cell(0, "host_response_rate"), Some(&Cell::Number(0.95)));
    assert_eq!(table.cell(0, "latitude").unwrap().as_number(), Some(48.85));

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers = reader.headers().unwrap().clone();
    let record = reader.records().next().unwrap().unwrap();
    let field = |name: &str| {
        let index = headers.iter().position(|h| h == name).unwrap();
        record[index].to_string()
    };
    assert_eq!(field("price"), "100.0");
    assert_eq!(field("amenities"), r#"["Wifi","Kitchen"]"#);
    assert_eq!(field("host_is_superhost"), "true");
    assert_eq!(field("host_since"), "2015-06-01T00:00:00");
    assert_eq!(field("neighborhood_cleansed"), "Louvre");
    assert_eq!(field("neighbourhood_cleansed"), "Louvre");
    assert_eq!(field("bathrooms"), "0.0");
}

#[test]
fn test_writes_manifest_matching_output() {
    let dir = TempDir::new().unwrap();
    let input = write_raw(dir.path(), &[raw_row(&[]), raw_row(&[("id", "2")])]);
    let output = dir.path().join("clean.csv");

    let table = clean(&input, &output).unwrap();

    let text = fs::read_to_string(CleanManifest::path_for(&output)).unwrap();
    let manifest: CleanManifest = serde_json::from_str(&text).unwrap();
    assert!(manifest.is_current());
    assert_eq!(manifest.row_count, 2);
    assert_eq!(manifest.columns, table.headers().to_vec());
}

#[test]
fn test_out_of_range_and_missing_coordinates_are_dropped() {
    let dir = TempDir::new().unwrap();
    let input = write_raw(
        dir.path(),
        &[
            raw_row(&[("id", "1")]),
            raw_row(&[("id", "2"), ("latitude", "95.0")]),
            raw_row(&[("id", "3"), ("longitude", "-181")]),
            raw_row(&[("id", "4"), ("latitude", "")]),
            raw_row(&[("id", "5"), ("latitude", "-90"), ("longitude", "180")]),
        ],
    );
    let output = dir.path().join("clean.csv");

    let (table, report) = clean_with_report(&input, &output).unwrap();

    assert_eq!(report.rows_read, 5);
    assert_eq!(report.rows_dropped, 3);
    assert_eq!(report.rows_written, 2);
    let ids: Vec<_> = (0..table.len())
        .map(|row| table.cell(row, "id").unwrap().as_text().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["1", "5"]);
}

#[test]
fn test_report_counts_repairs() {
    let dir = TempDir::new().unwrap();
    let input = write_raw(
        dir.path(),
        &[
            raw_row(&[("host_since", "last spring"), ("instant_bookable", "maybe")]),
            raw_row(&[("id", "2")]),
        ],
    );
    let output = dir.path().join("clean.csv");

    let (table, report) = clean_with_report(&input, &output).unwrap();

    assert_eq!(report.unparsed_dates.get("host_since"), Some(&1));
    assert_eq!(report.unmapped_booleans.get("instant_bookable"), Some(&1));
    assert_eq!(report.missing_before_repair.get("description"), Some(&2));
    assert_eq!(report.missing_before_repair.get("price"), None);
    assert!(table.cell(0, "instant_bookable").unwrap().is_missing());
    assert_eq!(table.cell(1, "instant_bookable"), Some(&Cell::Bool(true)));
}

#[test]
fn test_null_markers_are_repaired_like_empty_cells() {
    let dir = TempDir::new().unwrap();
    let input = write_raw(
        dir.path(),
        &[raw_row(&[
            ("host_response_time", "N/A"),
            ("host_response_rate", "N/A"),
            ("bathrooms", "NA"),
            ("review_scores_rating", "NaN"),
        ])],
    );
    let output = dir.path().join("clean.csv");

    let (table, report) = clean_with_report(&input, &output).unwrap();

    assert_eq!(table.cell(0, "host_response_time"), Some(&Cell::Text(String::new())));
    assert_eq!(table.cell(0, "bathrooms"), Some(&Cell::Number(0.0)));
    assert_eq!(table.cell(0, "review_scores_rating"), Some(&Cell::Number(0.0)));
    assert!(table.cell(0, "host_response_rate").unwrap().is_missing());
    assert_eq!(report.missing_before_repair.get("bathrooms"), Some(&1));

    let text = fs::read_to_string(&output).unwrap();
    assert!(!text.contains("N/A"));
    assert!(!text.contains("NaN"));
}

#[test]
fn test_cleaning_cleaned_output_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_raw(
        dir.path(),
        &[
            raw_row(&[("price", "$1,234.50"), ("amenities", "{TV,\"Cable TV\"}")]),
            raw_row(&[("id", "2"), ("host_response_rate", "N/A"), ("host_is_superhost", "")]),
        ],
    );
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    clean(&input, &first).unwrap();
    clean(&first, &second).unwrap();

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_missing_fill_column_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("raw.csv");
    fs::write(&input, "id,description,price\n1,,$10.00\n").unwrap();
    let output = dir.path().join("clean.csv");

    let result = clean(&input, &output);

    assert!(matches!(result, Err(CleanError::MissingColumn(_))));
    assert!(!output.exists());
    assert!(!CleanManifest::path_for(&output).exists());
}

#[test]
fn test_invalid_price_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_raw(
        dir.path(),
        &[raw_row(&[]), raw_row(&[("id", "2"), ("price", "ask the host")])],
    );
    let output = dir.path().join("clean.csv");

    let result = clean(&input, &output);

    assert!(matches!(result, Err(CleanError::InvalidPrice { row: 1, .. })));
    assert!(!output.exists());
}

#[test]
fn test_invalid_amenities_fail_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_raw(dir.path(), &[raw_row(&[("amenities", "Wifi; Kitchen")])]);
    let output = dir.path().join("clean.csv");

    let result = clean(&input, &output);

    assert!(matches!(result, Err(CleanError::InvalidAmenities { .. })));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = clean(dir.path().join("absent.csv"), dir.path().join("out.csv"));
    assert!(matches!(result, Err(CleanError::Io(_)) | Err(CleanError::Csv(_))));
}
