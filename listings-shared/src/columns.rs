//! Column catalogues for the raw listings export.
//!
//! The cleaner walks these lists in a fixed order. The optional-text and
//! numeric-fill lists are assumed to be present in every export; the other
//! lists are applied only to the columns the file actually carries.

/// Free-text columns whose missing values become the empty string.
pub const OPTIONAL_TEXT_COLUMNS: &[&str] = &[
    "description",
    "neighborhood_overview",
    "host_about",
    "host_response_time",
    "host_neighbourhood",
];

/// Numeric columns whose missing values become zero.
pub const NUMERIC_FILL_COLUMNS: &[&str] = &[
    "bathrooms",
    "bedrooms",
    "beds",
    "price",
    "review_scores_rating",
    "review_scores_accuracy",
];

/// Columns holding dates or timestamps.
pub const DATE_COLUMNS: &[&str] = &[
    "last_scraped",
    "host_since",
    "first_review",
    "last_review",
    "calendar_last_scraped",
    "calendar_updated",
];

/// Columns holding `t`/`f` flags.
pub const BOOLEAN_COLUMNS: &[&str] = &[
    "host_is_superhost",
    "host_has_profile_pic",
    "host_identity_verified",
    "instant_bookable",
    "has_availability",
];

pub const PRICE_COLUMN: &str = "price";
pub const AMENITIES_COLUMN: &str = "amenities";
pub const LATITUDE_COLUMN: &str = "latitude";
pub const LONGITUDE_COLUMN: &str = "longitude";
pub const RESPONSE_RATE_COLUMN: &str = "host_response_rate";

/// British-spelled source columns and the American-spelled copies added next to them.
pub const COLUMN_RENAMES: &[(&str, &str)] = &[
    ("neighbourhood_cleansed", "neighborhood_cleansed"),
    ("neighbourhood_group_cleansed", "neighborhood_group"),
];

/// Columns the migrator cannot do without.
pub const REQUIRED_MIGRATION_COLUMNS: &[&str] = &["id"];
