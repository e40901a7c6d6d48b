//! MongoDB client wrapper with built-in connection pooling.

use std::sync::Arc;

use bson::{Document, doc};
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::config::MongoConfig;
use crate::error::{MongoError, MongoResult};

/// A MongoDB client bound to the configured item database.
///
/// The driver pools connections internally; the database handle keeps the
/// pool alive and cloning is cheap.
#[derive(Clone)]
pub struct MongoClient {
    database: Database,
    config: Arc<MongoConfig>,
}

impl MongoClient {
    /// Create a new client from configuration.
    ///
    /// No connection is made until the first operation.
    pub async fn new(config: MongoConfig) -> MongoResult<Self> {
        config.validate()?;
        let options = config.to_client_options().await?;

        let client = Client::with_options(options)
            .map_err(|e| MongoError::connection(format!("failed to create client: {}", e)))?;

        let database = client.database(&config.database);

        info!(
            uri = %config.uri,
            database = %config.database,
            collection = %config.collection,
            "MongoDB client created"
        );

        Ok(Self {
            database,
            config: Arc::new(config),
        })
    }

    /// Get a collection with BSON documents.
    pub fn collection_doc(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }

    /// Get the configured item collection.
    pub fn items(&self) -> Collection<Document> {
        self.collection_doc(&self.config.collection)
    }

    /// Get the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Get the configuration.
    pub fn config(&self) -> &MongoConfig {
        &self.config
    }

    /// Check if the client is healthy by pinging the server.
    pub async fn is_healthy(&self) -> bool {
        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_is_lazy() {
        let client = MongoClient::new(MongoConfig::from_uri("mongodb://localhost:27017", "stash"))
            .await
            .unwrap();
        assert_eq!(client.database().name(), "stash");
        assert_eq!(client.items().name(), "posts");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_unhealthy() {
        let config = MongoConfig::builder()
            .uri("mongodb://127.0.0.1:1")
            .server_selection_timeout(std::time::Duration::from_secs(1))
            .build()
            .unwrap();
        let client = MongoClient::new(config).await.unwrap();
        assert!(!client.is_healthy().await);
    }

    #[tokio::test]
    async fn test_client_rejects_bad_uri() {
        let result = MongoClient::new(MongoConfig::from_uri("postgres://nope", "stash")).await;
        assert!(matches!(result, Err(MongoError::Config(_))));
    }
}
