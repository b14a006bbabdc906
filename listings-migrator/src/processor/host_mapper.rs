//! Builds host documents from cleaned rows.

use listings_shared::{CleanedRow, HostDocument, ListingsCount, ProfileInfo, ResponseInfo};

use super::listing_mapper::{text, to_bson_date};

/// Build the host document for `host_id` from the host columns of a row.
pub fn build_host(host_id: i64, row: &CleanedRow) -> HostDocument {
    HostDocument {
        id: host_id,
        host_url: text(&row.host_url),
        name: text(&row.host_name),
        since: to_bson_date(row.host_since),
        location: text(&row.host_location),
        about: text(&row.host_about),
        response_info: ResponseInfo {
            time: text(&row.host_response_time),
            rate: row.host_response_rate.unwrap_or(0.0),
            acceptance_rate: row.host_acceptance_rate.unwrap_or(0.0),
        },
        is_superhost: row.host_is_superhost.unwrap_or(false),
        verifications: row.host_verifications.clone(),
        profile_info: ProfileInfo {
            thumbnail_url: text(&row.host_thumbnail_url),
            picture_url: text(&row.host_picture_url),
            has_profile_pic: row.host_has_profile_pic.unwrap_or(false),
            identity_verified: row.host_identity_verified.unwrap_or(false),
        },
        neighborhood: text(&row.host_neighbourhood),
        listings_count: ListingsCount {
            total: row.host_total_listings_count.unwrap_or(0),
            entire_homes: row.calculated_host_listings_count_entire_homes.unwrap_or(0),
            private_rooms: row.calculated_host_listings_count_private_rooms.unwrap_or(0),
            shared_rooms: row.calculated_host_listings_count_shared_rooms.unwrap_or(0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_fields() {
        let row = CleanedRow {
            host_name: Some("Marie".to_string()),
            host_is_superhost: Some(true),
            host_response_rate: Some(0.95),
            host_verifications: vec!["email".to_string(), "phone".to_string()],
            calculated_host_listings_count_private_rooms: Some(3),
            ..CleanedRow::default()
        };

        let host = build_host(55, &row);

        assert_eq!(host.id, 55);
        assert_eq!(host.name, "Marie");
        assert!(host.is_superhost);
        assert_eq!(host.response_info.rate, 0.95);
        assert_eq!(host.response_info.acceptance_rate, 0.0);
        assert_eq!(host.verifications, vec!["email", "phone"]);
        assert_eq!(host.listings_count.private_rooms, 3);
        assert!(!host.profile_info.has_profile_pic);
    }
}
