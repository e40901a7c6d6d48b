//! # stash-mongodb
//!
//! MongoDB backend for compiled item filters.
//!
//! This crate provides:
//! - Rendering of [`Predicate`](stash_filter::Predicate) lists as BSON filter
//!   documents (`{"$and": [...]}`)
//! - A fluent [`FilterBuilder`] for hand-written filters
//! - Connection configuration and a pooled client
//! - [`ItemSearch`], which compiles, renders and runs a search in one call
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stash_filter::{FilterCompiler, FilterInput};
//! use stash_mongodb::{ItemSearch, MongoClient, MongoConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MongoClient::new(MongoConfig::from_uri("mongodb://localhost:27017", "stash")).await?;
//!     let search = ItemSearch::from_client(&client, Arc::new(FilterCompiler::default()));
//!
//!     let input = FilterInput::from_json(r#"{"league": "Standard", "corrupted": true}"#)?;
//!     for item in search.search(&input, Some(10)).await? {
//!         println!("{}", item);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod search;

pub use bson::{Bson, Document, doc};
pub use client::MongoClient;
pub use config::{MongoConfig, MongoConfigBuilder};
pub use error::{MongoError, MongoResult};
pub use filter::{FilterBuilder, predicate_document, to_query};
pub use search::{ItemSearch, stringify_id};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::client::MongoClient;
    pub use crate::config::{MongoConfig, MongoConfigBuilder};
    pub use crate::error::{MongoError, MongoResult};
    pub use crate::filter::{FilterBuilder, to_query};
    pub use crate::search::ItemSearch;
    pub use bson::{Bson, Document, doc};
}
