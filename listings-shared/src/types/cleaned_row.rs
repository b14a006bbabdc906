//! Typed view of one row of the cleaned listings file.
//!
//! Every column is optional at this level; the migrator applies the default
//! policy when it builds documents. Cells that are present but cannot be
//! coerced (a non-numeric count, a malformed amenities literal) fail the
//! deserialization of that row only.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// One cleaned listing row. Columns absent from the file deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CleanedRow {
    #[serde(deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "de::opt_text")]
    pub listing_url: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub scrape_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub last_scraped: Option<NaiveDateTime>,
    #[serde(deserialize_with = "de::opt_text")]
    pub source: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub neighborhood_overview: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub picture_url: Option<String>,

    #[serde(deserialize_with = "de::opt_i64")]
    pub host_id: Option<i64>,
    #[serde(deserialize_with = "de::opt_text")]
    pub host_url: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub host_name: Option<String>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub host_since: Option<NaiveDateTime>,
    #[serde(deserialize_with = "de::opt_text")]
    pub host_location: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub host_about: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub host_response_time: Option<String>,
    #[serde(deserialize_with = "de::opt_rate")]
    pub host_response_rate: Option<f64>,
    #[serde(deserialize_with = "de::opt_rate")]
    pub host_acceptance_rate: Option<f64>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub host_is_superhost: Option<bool>,
    #[serde(deserialize_with = "de::opt_text")]
    pub host_thumbnail_url: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub host_picture_url: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub host_neighbourhood: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub host_total_listings_count: Option<i64>,
    #[serde(deserialize_with = "de::string_list")]
    pub host_verifications: Vec<String>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub host_has_profile_pic: Option<bool>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub host_identity_verified: Option<bool>,

    #[serde(deserialize_with = "de::opt_text")]
    pub neighbourhood: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub neighborhood_cleansed: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub neighborhood_group: Option<String>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub longitude: Option<f64>,

    #[serde(deserialize_with = "de::opt_text")]
    pub property_type: Option<String>,
    #[serde(deserialize_with = "de::opt_text")]
    pub room_type: Option<String>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub accommodates: Option<i64>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub bathrooms: Option<f64>,
    #[serde(deserialize_with = "de::opt_text")]
    pub bathrooms_text: Option<String>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub bedrooms: Option<f64>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub beds: Option<f64>,
    #[serde(deserialize_with = "de::string_list")]
    pub amenities: Vec<String>,
    #[serde(deserialize_with = "de::opt_price")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub minimum_nights: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub maximum_nights: Option<i64>,

    #[serde(deserialize_with = "de::opt_i64")]
    pub availability_30: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub availability_60: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub availability_90: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub availability_365: Option<i64>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub calendar_last_scraped: Option<NaiveDateTime>,

    #[serde(deserialize_with = "de::opt_i64")]
    pub number_of_reviews: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub number_of_reviews_ltm: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub number_of_reviews_l30d: Option<i64>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub first_review: Option<NaiveDateTime>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub last_review: Option<NaiveDateTime>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub review_scores_rating: Option<f64>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub review_scores_accuracy: Option<f64>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub review_scores_cleanliness: Option<f64>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub review_scores_checkin: Option<f64>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub review_scores_communication: Option<f64>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub review_scores_location: Option<f64>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub review_scores_value: Option<f64>,
    #[serde(deserialize_with = "de::opt_f64")]
    pub reviews_per_month: Option<f64>,

    #[serde(deserialize_with = "de::opt_text")]
    pub license: Option<String>,
    #[serde(deserialize_with = "de::opt_bool")]
    pub instant_bookable: Option<bool>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub calculated_host_listings_count_entire_homes: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub calculated_host_listings_count_private_rooms: Option<i64>,
    #[serde(deserialize_with = "de::opt_i64")]
    pub calculated_host_listings_count_shared_rooms: Option<i64>,
}

/// Field deserializers for cleaned cell text.
mod de {
    use chrono::NaiveDateTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    use crate::values;

    fn cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if values::is_missing_token(&raw) {
            Ok(None)
        } else {
            Ok(Some(raw))
        }
    }

    pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        cell(deserializer)
    }

    pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match cell(deserializer)? {
            None => Ok(None),
            Some(raw) => values::parse_number(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid number '{}'", raw))),
        }
    }

    pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match cell(deserializer)? {
            None => Ok(None),
            Some(raw) => values::parse_integer(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid integer '{}'", raw))),
        }
    }

    pub fn opt_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match cell(deserializer)? {
            None => Ok(None),
            Some(raw) => values::parse_price(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid price '{}'", raw))),
        }
    }

    /// Rates that are not numbers (`N/A`) are treated as absent.
    pub fn opt_rate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(cell(deserializer)?.and_then(|raw| values::parse_rate(&raw)))
    }

    pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(cell(deserializer)?.and_then(|raw| values::parse_bool_token(&raw)))
    }

    pub fn opt_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(cell(deserializer)?.and_then(|raw| values::parse_datetime(&raw)))
    }

    pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match cell(deserializer)? {
            None => Ok(Vec::new()),
            Some(raw) => values::decode_string_list(&raw).map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_rows(data: &str) -> Vec<Result<CleanedRow, csv::Error>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(data.as_bytes());
        reader.deserialize().collect()
    }

    #[test]
    fn test_deserialize_cleaned_row() {
        let data = "id,host_id,price,latitude,longitude,amenities,host_is_superhost,first_review,host_response_rate\n\
                    1,55,100.0,48.85,2.35,\"[\"\"Wifi\"\",\"\"Kitchen\"\"]\",true,2023-09-04T00:00:00,0.95\n";
        let rows = parse_rows(data);
        let row = rows[0].as_ref().unwrap();

        assert_eq!(row.id, Some(1));
        assert_eq!(row.host_id, Some(55));
        assert_eq!(row.price, Some(100.0));
        assert_eq!(row.latitude, Some(48.85));
        assert_eq!(row.longitude, Some(2.35));
        assert_eq!(row.amenities, vec!["Wifi", "Kitchen"]);
        assert_eq!(row.host_is_superhost, Some(true));
        assert!(row.first_review.is_some());
        assert_eq!(row.host_response_rate, Some(0.95));
    }

    #[test]
    fn test_missing_columns_and_empty_cells_are_none() {
        let data = "id,name,bedrooms\n7,,\n";
        let rows = parse_rows(data);
        let row = rows[0].as_ref().unwrap();

        assert_eq!(row.id, Some(7));
        assert_eq!(row.name, None);
        assert_eq!(row.bedrooms, None);
        assert_eq!(row.host_id, None);
        assert!(row.amenities.is_empty());
    }

    #[test]
    fn test_missing_tokens_are_none() {
        let data = "id,bathrooms,host_response_time,host_response_rate\n1,NA,N/A,N/A\n";
        let rows = parse_rows(data);
        let row = rows[0].as_ref().unwrap();

        assert_eq!(row.bathrooms, None);
        assert_eq!(row.host_response_time, None);
        assert_eq!(row.host_response_rate, None);
    }

    #[test]
    fn test_integral_decimals_accepted_for_counts() {
        let data = "id,accommodates,host_id\n3.0,4.0,12\n";
        let rows = parse_rows(data);
        let row = rows[0].as_ref().unwrap();

        assert_eq!(row.id, Some(3));
        assert_eq!(row.accommodates, Some(4));
    }

    #[test]
    fn test_invalid_cells_fail_the_row() {
        let data = "id,accommodates\n1,two\n2,3\n";
        let rows = parse_rows(data);

        assert!(rows[0].is_err());
        assert_eq!(rows[1].as_ref().unwrap().accommodates, Some(3));
    }

    #[test]
    fn test_unknown_boolean_token_is_none() {
        let data = "id,instant_bookable,host_has_profile_pic\n1,maybe,f\n";
        let rows = parse_rows(data);
        let row = rows[0].as_ref().unwrap();

        assert_eq!(row.instant_bookable, None);
        assert_eq!(row.host_has_profile_pic, Some(false));
    }

    #[test]
    fn test_python_style_verifications() {
        let data = "id,host_verifications\n1,\"['email', 'phone']\"\n";
        let rows = parse_rows(data);
        let row = rows[0].as_ref().unwrap();

        assert_eq!(row.host_verifications, vec!["email", "phone"]);
    }
}
