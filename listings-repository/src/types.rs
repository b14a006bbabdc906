//! Index specifications.

use bson::{Bson, Document};

/// Key type of a single-field index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Ascending,
    /// Geospatial index over GeoJSON values.
    Sphere2d,
}

impl IndexKind {
    /// The value used for this kind in an index key document.
    pub fn key_value(&self) -> Bson {
        match self {
            IndexKind::Ascending => Bson::Int32(1),
            IndexKind::Sphere2d => Bson::String("2dsphere".to_string()),
        }
    }

    fn name_suffix(&self) -> &'static str {
        match self {
            IndexKind::Ascending => "1",
            IndexKind::Sphere2d => "2dsphere",
        }
    }
}

/// A single-field index on a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub collection: String,
    /// Dotted path of the indexed field, e.g. `location.coordinates`.
    pub field: String,
    pub kind: IndexKind,
}

impl IndexSpec {
    pub fn new(collection: impl Into<String>, field: impl Into<String>, kind: IndexKind) -> Self {
        Self {
            collection: collection.into(),
            field: field.into(),
            kind,
        }
    }

    pub fn ascending(collection: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(collection, field, IndexKind::Ascending)
    }

    pub fn sphere_2d(collection: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(collection, field, IndexKind::Sphere2d)
    }

    /// The key document, e.g. `{ "price": 1 }`.
    pub fn keys(&self) -> Document {
        let mut keys = Document::new();
        keys.insert(self.field.clone(), self.kind.key_value());
        keys
    }

    /// The name MongoDB gives this index by default, e.g. `price_1`.
    pub fn name(&self) -> String {
        format!("{}_{}", self.field, self.kind.name_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_index_keys_and_name() {
        let spec = IndexSpec::ascending("listings", "price");
        assert_eq!(spec.keys().get_i32("price").unwrap(), 1);
        assert_eq!(spec.name(), "price_1");
    }

    #[test]
    fn test_geospatial_index_keys_and_name() {
        let spec = IndexSpec::sphere_2d("listings", "location.coordinates");
        assert_eq!(
            spec.keys().get_str("location.coordinates").unwrap(),
            "2dsphere"
        );
        assert_eq!(spec.name(), "location.coordinates_2dsphere");
    }
}
