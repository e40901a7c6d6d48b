//! Compiler configuration.
//!
//! Loaded from the `[compiler]` and `[currencies]` sections of a TOML file:
//!
//! ```toml
//! [compiler]
//! strict_ranges = true
//! max_attribute_name_len = 96
//!
//! [currencies]
//! "Mirror of Kalandra" = "mirror"
//! ```
//!
//! Entries under `[currencies]` extend the built-in table and override
//! built-in entries with the same display name.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::compiler::{CompilerOptions, FilterCompiler};
use crate::currency::CurrencyTable;
use crate::error::{FilterError, FilterResult};

/// Compiler configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Behaviour switches.
    pub compiler: CompilerOptions,
    /// Extra or overriding currency entries.
    pub currencies: IndexMap<String, String>,
}

impl CompilerConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> FilterResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> FilterResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check the configuration for values the compiler cannot work with.
    pub fn validate(&self) -> FilterResult<()> {
        if self.compiler.max_attribute_name_len == 0 {
            return Err(FilterError::config(
                "compiler.max_attribute_name_len must be greater than zero",
            ));
        }
        if let Some((name, _)) = self
            .currencies
            .iter()
            .find(|(name, code)| name.trim().is_empty() || code.trim().is_empty())
        {
            return Err(FilterError::config(format!(
                "currency entry {:?} has an empty name or code",
                name
            )));
        }
        Ok(())
    }

    /// The built-in currency table extended with the configured entries.
    pub fn currency_table(&self) -> CurrencyTable {
        let mut table = CurrencyTable::builtin();
        table.extend(
            self.currencies
                .iter()
                .map(|(name, code)| (name.as_str(), code.as_str())),
        );
        table
    }

    /// Build a compiler from this configuration.
    pub fn build_compiler(&self) -> FilterCompiler {
        FilterCompiler::with_options(self.currency_table(), self.compiler)
    }
}
