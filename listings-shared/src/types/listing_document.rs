//! Listing document types for the `listings` collection.

use bson::{DateTime, Document};
use serde::{Deserialize, Serialize};

/// A rentable unit as stored in the document store, keyed by listing id.
///
/// Every field carries a concrete default except the timestamps, which stay
/// `None` when the source row had no parseable date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingDocument {
    #[serde(rename = "_id")]
    pub id: i64,
    pub listing_url: String,
    pub last_scraped: Option<DateTime>,
    pub source: String,
    pub name: String,
    pub description: String,
    pub neighborhood_overview: String,
    pub picture_url: String,
    pub property_type: String,
    pub room_type: String,
    pub accommodates: i64,
    pub bathrooms: f64,
    pub bathrooms_text: String,
    pub bedrooms: f64,
    pub beds: f64,
    pub amenities: Vec<String>,
    pub price: f64,
    pub minimum_nights: i64,
    pub maximum_nights: i64,
    pub availability: Availability,
    pub location: Location,
    pub reviews: Reviews,
    /// Soft reference to `hosts._id`.
    pub host_id: Option<i64>,
    pub instant_bookable: bool,
    pub license: String,
    pub scrape_info: ScrapeInfo,
}

/// Availability horizons, in days available.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Availability {
    pub last_updated: Option<DateTime>,
    pub days_30: i64,
    pub days_60: i64,
    pub days_90: i64,
    pub days_365: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub neighborhood: String,
    pub neighborhood_cleansed: String,
    pub neighborhood_group: String,
    pub coordinates: GeoPoint,
}

/// GeoJSON point. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    /// Build a point from a longitude/latitude pair.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reviews {
    pub total_count: i64,
    pub last_12_months: i64,
    pub last_30_days: i64,
    pub first_review: Option<DateTime>,
    pub last_review: Option<DateTime>,
    pub scores: ReviewScores,
    pub per_month: f64,
}

/// The seven rating dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewScores {
    pub rating: f64,
    pub accuracy: f64,
    pub cleanliness: f64,
    pub checkin: f64,
    pub communication: f64,
    pub location: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrapeInfo {
    pub scrape_id: Option<i64>,
    pub calendar_last_scraped: Option<DateTime>,
}

impl ListingDocument {
    /// Encode the listing as a BSON document.
    pub fn to_document(&self) -> Result<Document, bson::ser::Error> {
        bson::to_document(self)
    }
}
