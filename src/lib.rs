//! # Stash Search
//!
//! Compiles sparse item-search forms into predicate lists and runs them
//! against a MongoDB item collection.
//!
//! Stash Search provides:
//! - A filter compiler with currency resolution and category pluralisation
//! - Nested and flat (web form) filter payloads
//! - Rendering of predicates as MongoDB `$and` queries (feature `mongodb`)
//! - An async item search over the driver's connection pool
//!
//! ## Quick Start
//!
//! ```rust
//! use stash_search::prelude::*;
//!
//! let compiler = FilterCompiler::default();
//! let input = FilterInput {
//!     item_type: Some("Boots".into()),
//!     corrupted: Some(true),
//!     ..Default::default()
//! };
//!
//! let predicates = compiler.compile(&input)?;
//! assert_eq!(predicates.len(), 2);
//! # Ok::<(), stash_search::FilterError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The filter compiler and its input/output types.
pub mod filter {
    pub use stash_filter::*;
}

/// MongoDB rendering and execution.
#[cfg(feature = "mongodb")]
#[cfg_attr(docsrs, doc(cfg(feature = "mongodb")))]
pub mod mongodb {
    pub use stash_mongodb::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use stash_filter::prelude::*;

    #[cfg(feature = "mongodb")]
    pub use stash_mongodb::{ItemSearch, MongoClient, MongoConfig, to_query};
}

// Re-export key types at the crate root
pub use stash_filter::{
    CompilerConfig, CompilerOptions, CurrencyTable, FilterCompiler, FilterError, FilterInput,
    FilterResult, Predicate,
};
