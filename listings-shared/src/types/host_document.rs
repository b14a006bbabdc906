//! Host document types for the `hosts` collection.

use bson::{DateTime, Document};
use serde::{Deserialize, Serialize};

/// A host account as stored in the document store, keyed by host id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostDocument {
    #[serde(rename = "_id")]
    pub id: i64,
    pub host_url: String,
    pub name: String,
    pub since: Option<DateTime>,
    pub location: String,
    pub about: String,
    pub response_info: ResponseInfo,
    pub is_superhost: bool,
    pub verifications: Vec<String>,
    pub profile_info: ProfileInfo,
    pub neighborhood: String,
    pub listings_count: ListingsCount,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseInfo {
    pub time: String,
    /// Fraction in `[0, 1]`.
    pub rate: f64,
    /// Fraction in `[0, 1]`.
    pub acceptance_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileInfo {
    pub thumbnail_url: String,
    pub picture_url: String,
    pub has_profile_pic: bool,
    pub identity_verified: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingsCount {
    pub total: i64,
    pub entire_homes: i64,
    pub private_rooms: i64,
    pub shared_rooms: i64,
}

impl HostDocument {
    /// Encode the host as a BSON document.
    pub fn to_document(&self) -> Result<Document, bson::ser::Error> {
        bson::to_document(self)
    }
}
