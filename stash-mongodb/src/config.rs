//! MongoDB connection configuration.

use std::time::Duration;

use mongodb::options::ClientOptions;
use serde::{Deserialize, Serialize};

use crate::error::{MongoError, MongoResult};

/// Default connection URI.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
/// Default database holding the item collection.
pub const DEFAULT_DATABASE: &str = "stash";
/// Default item collection.
pub const DEFAULT_COLLECTION: &str = "posts";
/// Page size used when the caller does not pass a limit.
pub const DEFAULT_LIMIT: i64 = 20;

/// MongoDB connection configuration.
///
/// Deserializes from the `[mongodb]` table of `stash.toml`; every field has
/// a default. Timeouts are given in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    /// MongoDB connection URI.
    pub uri: String,
    /// Database name.
    pub database: String,
    /// Collection holding item records.
    pub collection: String,
    /// Application name (shown in server logs).
    pub app_name: Option<String>,
    /// Maximum connection pool size.
    pub max_pool_size: Option<u32>,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// Server selection timeout in seconds.
    pub server_selection_timeout_secs: Option<u64>,
    /// Number of documents returned when no limit is given.
    pub default_limit: i64,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            app_name: Some("stash".to_string()),
            max_pool_size: Some(10),
            connect_timeout_secs: Some(10),
            server_selection_timeout_secs: Some(30),
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl MongoConfig {
    /// Create a new configuration from a MongoDB URI.
    pub fn from_uri(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    /// Create a builder for configuration.
    pub fn builder() -> MongoConfigBuilder {
        MongoConfigBuilder::new()
    }

    /// Check the values that the driver would otherwise reject late.
    pub fn validate(&self) -> MongoResult<()> {
        if self.database.is_empty() {
            return Err(MongoError::config("database name is required"));
        }
        if self.collection.is_empty() {
            return Err(MongoError::config("collection name is required"));
        }
        if self.default_limit <= 0 {
            return Err(MongoError::config(format!(
                "default_limit must be positive, got {}",
                self.default_limit
            )));
        }
        Ok(())
    }

    /// Connection timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    /// Server selection timeout as a [`Duration`].
    pub fn server_selection_timeout(&self) -> Option<Duration> {
        self.server_selection_timeout_secs.map(Duration::from_secs)
    }

    /// Convert to MongoDB ClientOptions.
    pub async fn to_client_options(&self) -> MongoResult<ClientOptions> {
        let mut options = ClientOptions::parse(&self.uri)
            .await
            .map_err(|e| MongoError::config(format!("failed to parse URI: {}", e)))?;

        if let Some(ref app_name) = self.app_name {
            options.app_name = Some(app_name.clone());
        }

        if let Some(max_pool) = self.max_pool_size {
            options.max_pool_size = Some(max_pool);
        }

        if let Some(connect_timeout) = self.connect_timeout() {
            options.connect_timeout = Some(connect_timeout);
        }

        if let Some(selection_timeout) = self.server_selection_timeout() {
            options.server_selection_timeout = Some(selection_timeout);
        }

        Ok(options)
    }
}

/// Builder for MongoDB configuration.
#[derive(Debug, Default)]
pub struct MongoConfigBuilder {
    uri: Option<String>,
    database: Option<String>,
    collection: Option<String>,
    app_name: Option<String>,
    max_pool_size: Option<u32>,
    connect_timeout: Option<Duration>,
    server_selection_timeout: Option<Duration>,
    default_limit: Option<i64>,
}

impl MongoConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the MongoDB URI.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the database name.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the item collection name.
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Set the application name.
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Set the maximum pool size.
    pub fn max_pool_size(mut self, size: u32) -> Self {
        self.max_pool_size = Some(size);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Set the server selection timeout.
    pub fn server_selection_timeout(mut self, duration: Duration) -> Self {
        self.server_selection_timeout = Some(duration);
        self
    }

    /// Set the default page size.
    pub fn default_limit(mut self, limit: i64) -> Self {
        self.default_limit = Some(limit);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> MongoResult<MongoConfig> {
        let defaults = MongoConfig::default();
        let config = MongoConfig {
            uri: self.uri.unwrap_or(defaults.uri),
            database: self.database.unwrap_or(defaults.database),
            collection: self.collection.unwrap_or(defaults.collection),
            app_name: self.app_name.or(defaults.app_name),
            max_pool_size: self.max_pool_size.or(defaults.max_pool_size),
            connect_timeout_secs: self
                .connect_timeout
                .map(|d| d.as_secs())
                .or(defaults.connect_timeout_secs),
            server_selection_timeout_secs: self
                .server_selection_timeout
                .map(|d| d.as_secs())
                .or(defaults.server_selection_timeout_secs),
            default_limit: self.default_limit.unwrap_or(defaults.default_limit),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_from_uri() {
        let config = MongoConfig::from_uri("mongodb://db.internal:27017", "items");
        assert_eq!(config.uri, "mongodb://db.internal:27017");
        assert_eq!(config.database, "items");
        assert_eq!(config.collection, DEFAULT_COLLECTION);
    }

    #[test]
    fn test_config_defaults() {
        let config = MongoConfig::default();
        assert_eq!(config.uri, DEFAULT_URI);
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.connect_timeout(), Some(Duration::from_secs(10)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = MongoConfig::builder()
            .uri("mongodb://localhost:27018")
            .database("poe")
            .collection("items")
            .max_pool_size(4)
            .server_selection_timeout(Duration::from_secs(5))
            .default_limit(50)
            .build()
            .unwrap();

        assert_eq!(config.uri, "mongodb://localhost:27018");
        assert_eq!(config.collection, "items");
        assert_eq!(config.max_pool_size, Some(4));
        assert_eq!(config.server_selection_timeout_secs, Some(5));
        assert_eq!(config.default_limit, 50);
    }

    #[test]
    fn test_builder_rejects_bad_limit() {
        let err = MongoConfig::builder().default_limit(0).build().unwrap_err();
        assert!(err.to_string().contains("default_limit"));
    }

    #[test]
    fn test_config_builder_rejects_empty_database() {
        let result = MongoConfig::builder().database("").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_toml_table() {
        let config: MongoConfig = toml::from_str(
            r#"
            uri = "mongodb://mongo:27017"
            collection = "items"
            "#,
        )
        .unwrap();
        assert_eq!(config.uri, "mongodb://mongo:27017");
        assert_eq!(config.collection, "items");
        assert_eq!(config.database, DEFAULT_DATABASE);
    }
}
