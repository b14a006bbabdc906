//! Builds listing documents from cleaned rows.

use chrono::NaiveDateTime;
use listings_shared::{
    Availability, CleanedRow, GeoPoint, ListingDocument, Location, ReviewScores, Reviews,
    ScrapeInfo,
};

use crate::errors::RowError;

pub const DEFAULT_MINIMUM_NIGHTS: i64 = 1;
pub const DEFAULT_MAXIMUM_NIGHTS: i64 = 1125;

/// Convert a cleaned timestamp into a BSON date.
pub(crate) fn to_bson_date(value: Option<NaiveDateTime>) -> Option<bson::DateTime> {
    value.map(|dt| bson::DateTime::from_chrono(dt.and_utc()))
}

/// Build the listing document for a row.
///
/// The row must carry an id and both coordinates; every other field falls
/// back to its default.
pub fn build_listing(row: &CleanedRow) -> Result<ListingDocument, RowError> {
    let id = row.id.ok_or_else(|| RowError::missing_field("id"))?;
    let latitude = row
        .latitude
        .ok_or_else(|| RowError::missing_field("latitude"))?;
    let longitude = row
        .longitude
        .ok_or_else(|| RowError::missing_field("longitude"))?;

    Ok(ListingDocument {
        id,
        listing_url: text(&row.listing_url),
        last_scraped: to_bson_date(row.last_scraped),
        source: text(&row.source),
        name: text(&row.name),
        description: text(&row.description),
        neighborhood_overview: text(&row.neighborhood_overview),
        picture_url: text(&row.picture_url),
        property_type: text(&row.property_type),
        room_type: text(&row.room_type),
        accommodates: row.accommodates.unwrap_or(0),
        bathrooms: row.bathrooms.unwrap_or(0.0),
        bathrooms_text: text(&row.bathrooms_text),
        bedrooms: row.bedrooms.unwrap_or(0.0),
        beds: row.beds.unwrap_or(0.0),
        amenities: row.amenities.clone(),
        price: row.price.unwrap_or(0.0),
        minimum_nights: row.minimum_nights.unwrap_or(DEFAULT_MINIMUM_NIGHTS),
        maximum_nights: row.maximum_nights.unwrap_or(DEFAULT_MAXIMUM_NIGHTS),
        availability: Availability {
            last_updated: to_bson_date(row.calendar_last_scraped),
            days_30: row.availability_30.unwrap_or(0),
            days_60: row.availability_60.unwrap_or(0),
            days_90: row.availability_90.unwrap_or(0),
            days_365: row.availability_365.unwrap_or(0),
        },
        location: Location {
            neighborhood: text(&row.neighbourhood),
            neighborhood_cleansed: text(&row.neighborhood_cleansed),
            neighborhood_group: text(&row.neighborhood_group),
            coordinates: GeoPoint::new(longitude, latitude),
        },
        reviews: Reviews {
            total_count: row.number_of_reviews.unwrap_or(0),
            last_12_months: row.number_of_reviews_ltm.unwrap_or(0),
            last_30_days: row.number_of_reviews_l30d.unwrap_or(0),
            first_review: to_bson_date(row.first_review),
            last_review: to_bson_date(row.last_review),
            scores: ReviewScores {
                rating: row.review_scores_rating.unwrap_or(0.0),
                accuracy: row.review_scores_accuracy.unwrap_or(0.0),
                cleanliness: row.review_scores_cleanliness.unwrap_or(0.0),
                checkin: row.review_scores_checkin.unwrap_or(0.0),
                communication: row.review_scores_communication.unwrap_or(0.0),
                location: row.review_scores_location.unwrap_or(0.0),
                value: row.review_scores_value.unwrap_or(0.0),
            },
            per_month: row.reviews_per_month.unwrap_or(0.0),
        },
        host_id: row.host_id,
        instant_bookable: row.instant_bookable.unwrap_or(false),
        license: text(&row.license),
        scrape_info: ScrapeInfo {
            scrape_id: row.scrape_id,
            calendar_last_scraped: to_bson_date(row.calendar_last_scraped),
        },
    })
}

pub(crate) fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
