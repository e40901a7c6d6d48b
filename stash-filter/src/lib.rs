//! # stash-filter
//!
//! Compiles sparse item-search forms into predicate lists for a document
//! store.
//!
//! Item records are semi-structured: weapons carry damage and attack-speed
//! properties, armour carries defences, and any item may have sockets,
//! requirements, a price note and an open-ended set of named modifiers. A
//! search form exposes optional criteria for all of these, and most of them
//! are unset on any given request. [`FilterCompiler`] turns whatever is set
//! into an ordered list of [`Predicate`]s that the executor AND-combines.
//!
//! ## Example
//!
//! ```rust
//! use stash_filter::{Bounds, FilterCompiler, FilterInput, ModifierFilter};
//!
//! let compiler = FilterCompiler::default();
//!
//! let input = FilterInput {
//!     currency_name: Some("Chaos Orb".into()),
//!     price: Bounds::at_most(10.0),
//!     item_type: Some("Ring".into()),
//!     item_level: Bounds::at_least(75),
//!     modifiers: vec![ModifierFilter::present("+# to maximum Life").lower(40.0)],
//!     ..Default::default()
//! };
//!
//! for predicate in compiler.compile(&input)? {
//!     println!("{}", predicate);
//! }
//! // Price.Currency = "chaos" and Price.Number <= 10
//! // type = "Rings"
//! // ilvl >= 75
//! // Mods.+# to maximum Life >= 40
//! # Ok::<(), stash_filter::FilterError>(())
//! ```
//!
//! ## Modules
//!
//! - [`compiler`]: the compiler and its options
//! - [`input`] / [`form`]: nested and flat (web form) filter payloads
//! - [`filter`]: predicate, clause and operator types
//! - [`currency`]: the currency display name to code table
//! - [`item_type`]: category pluralisation
//! - [`path`]: attribute paths and name validation
//! - [`config`]: TOML configuration
//! - [`logging`]: subscriber setup

pub mod compiler;
pub mod config;
pub mod currency;
pub mod error;
pub mod filter;
pub mod form;
pub mod input;
pub mod item_type;
pub mod logging;
pub mod path;

pub use compiler::{CompilerOptions, FilterCompiler, MAX_LINKS};
pub use config::CompilerConfig;
pub use currency::{BUILTIN_CURRENCIES, CurrencyTable};
pub use error::{ErrorCode, FilterError, FilterResult};
pub use filter::{Clause, FilterValue, MemberSet, Operator, Predicate};
pub use form::{ItemQueryForm, ModifierForm};
pub use input::{Bounds, FilterInput, ModifierFilter, Requirements};
pub use path::AttributePath;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::compiler::{CompilerOptions, FilterCompiler};
    pub use crate::currency::CurrencyTable;
    pub use crate::error::{FilterError, FilterResult};
    pub use crate::filter::{Clause, FilterValue, Operator, Predicate};
    pub use crate::input::{Bounds, FilterInput, ModifierFilter, Requirements};
    pub use crate::path::AttributePath;
}
