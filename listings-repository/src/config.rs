//! Connection settings for the document store.

/// Default MongoDB host used by the container setup.
pub const DEFAULT_HOST: &str = "mongodb";

/// Default MongoDB port.
pub const DEFAULT_PORT: u16 = 27017;

/// Default database name.
pub const DEFAULT_DATABASE: &str = "paris_listing";

/// Where to connect and which database to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Connection string, e.g. `mongodb://mongodb:27017`.
    pub uri: String,
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_host_port(DEFAULT_HOST, DEFAULT_PORT, DEFAULT_DATABASE)
    }
}

impl StoreConfig {
    /// Build a config from a host and port.
    pub fn from_host_port(host: &str, port: u16, database: impl Into<String>) -> Self {
        Self {
            uri: format!("mongodb://{}:{}", host, port),
            database: database.into(),
        }
    }

    /// Build a config from a full connection string.
    pub fn from_uri(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_container_host() {
        let config = StoreConfig::default();
        assert_eq!(config.uri, "mongodb://mongodb:27017");
        assert_eq!(config.database, "paris_listing");
    }

    #[test]
    fn test_from_host_port() {
        let config = StoreConfig::from_host_port("localhost", 27018, "test");
        assert_eq!(config.uri, "mongodb://localhost:27018");
        assert_eq!(config.database, "test");
    }
}
