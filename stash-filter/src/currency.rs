//! Currency display name to price-note code table.
//!
//! Price notes on stored items use short codes (`~price 5 chaos`), while the
//! search form offers display names. The compiler resolves one into the other
//! through a [`CurrencyTable`] injected at construction, so deployments can
//! extend or replace the mapping without touching the compiler.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};

/// Built-in display name to code mapping.
pub const BUILTIN_CURRENCIES: &[(&str, &str)] = &[
    ("Blessed Orb", "blessed"),
    ("Cartographer's Chisel", "chisel"),
    ("Chaos Orb", "chaos"),
    ("Chromatic Orb", "chrom"),
    ("Divine Orb", "divine"),
    ("Exalted Orb", "exa"),
    ("Gemcutter's Prism", "gcp"),
    ("Jeweller's Orb", "jew"),
    ("Orb of Alchemy", "alch"),
    ("Orb of Alteration", "alt"),
    ("Orb of Chance", "chance"),
    ("Orb of Fusing", "fuse"),
    ("Orb of Regret", "regret"),
    ("Orb of Scouring", "scour"),
    ("Regal Orb", "regal"),
    ("Vaal Orb", "vaal"),
    ("Perandus Coin", "coin"),
    ("Silver Coin", "silver"),
];

/// Ordered display name to code mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyTable {
    entries: IndexMap<String, String>,
}

impl CurrencyTable {
    /// Version of [`BUILTIN_CURRENCIES`]. Bump whenever an entry changes.
    pub const VERSION: u32 = 1;

    /// Lookup category reported in [`FilterError::UnknownCategoryValue`].
    pub const CATEGORY: &'static str = "currency";

    /// An empty table.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// The built-in table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_CURRENCIES.iter().copied())
    }

    /// Build a table from `(display name, code)` pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::empty();
        table.extend(pairs);
        table
    }

    /// Insert or replace an entry, returning the previous code.
    pub fn insert(&mut self, name: impl Into<String>, code: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), code.into())
    }

    /// Look up the code for a display name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Look up the code for a display name, failing on unknown names.
    pub fn resolve(&self, name: &str) -> FilterResult<&str> {
        self.get(name)
            .ok_or_else(|| FilterError::unknown_category(Self::CATEGORY, name))
    }

    /// Check whether a display name is known.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(display name, code)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for CurrencyTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, code) in iter {
            self.insert(name, code);
        }
    }
}
