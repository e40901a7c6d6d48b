//! Executing compiled item filters against the item collection.

use std::sync::Arc;

use bson::{Bson, Document, doc};
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::options::FindOptions;
use stash_filter::{FilterCompiler, FilterInput};
use tracing::{debug, instrument};

use crate::client::MongoClient;
use crate::config::DEFAULT_LIMIT;
use crate::error::{MongoError, MongoResult};
use crate::filter::to_query;

/// Item search over one MongoDB collection.
///
/// Holds the compiler behind an [`Arc`] so one compiler, and its currency
/// table, can serve many concurrent searches.
#[derive(Clone)]
pub struct ItemSearch {
    collection: Collection<Document>,
    compiler: Arc<FilterCompiler>,
    default_limit: i64,
}

impl ItemSearch {
    /// Create a search over `collection`.
    pub fn new(collection: Collection<Document>, compiler: Arc<FilterCompiler>) -> Self {
        Self {
            collection,
            compiler,
            default_limit: DEFAULT_LIMIT,
        }
    }

    /// Create a search over the client's configured item collection.
    pub fn from_client(client: &MongoClient, compiler: Arc<FilterCompiler>) -> Self {
        Self::new(client.items(), compiler).with_default_limit(client.config().default_limit)
    }

    /// Override the page size used when no limit is passed.
    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    /// The compiler used for every search.
    pub fn compiler(&self) -> &FilterCompiler {
        &self.compiler
    }

    /// Compile `input` and render the filter document without running it.
    pub fn query(&self, input: &FilterInput) -> MongoResult<Document> {
        let predicates = self.compiler.compile(input)?;
        Ok(to_query(&predicates))
    }

    /// Run a filtered search.
    ///
    /// Returned documents have their `_id` converted to a string.
    #[instrument(skip(self, input), fields(collection = %self.collection.name()))]
    pub async fn search(&self, input: &FilterInput, limit: Option<i64>) -> MongoResult<Vec<Document>> {
        let filter = self.query(input)?;
        self.find(filter, None, limit).await
    }

    /// Return an unfiltered page of the most recently inserted items.
    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    pub async fn latest(&self, limit: Option<i64>) -> MongoResult<Vec<Document>> {
        self.find(doc! {}, Some(doc! { "_id": -1 }), limit).await
    }

    async fn find(
        &self,
        filter: Document,
        sort: Option<Document>,
        limit: Option<i64>,
    ) -> MongoResult<Vec<Document>> {
        let limit = self.resolve_limit(limit)?;
        debug!(filter = %filter, limit, "Executing find");

        let options = FindOptions::builder().limit(limit).sort(sort).build();
        let cursor = self.collection.find(filter, options).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;

        debug!(count = docs.len(), "Find returned documents");
        Ok(docs.into_iter().map(stringify_id).collect())
    }

    fn resolve_limit(&self, limit: Option<i64>) -> MongoResult<i64> {
        match limit.unwrap_or(self.default_limit) {
            n if n > 0 => Ok(n),
            n => Err(MongoError::query(format!("limit must be positive, got {}", n))),
        }
    }
}

/// Replace a document's `_id` with its string form.
///
/// ObjectIds become their hex representation; string ids are kept and any
/// other id type uses its display form.
pub fn stringify_id(mut doc: Document) -> Document {
    let id = match doc.get("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(_)) | None => return doc,
        Some(other) => other.to_string(),
    };
    doc.insert("_id", id);
    doc
}
