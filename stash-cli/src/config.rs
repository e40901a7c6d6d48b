//! CLI configuration handling.
//!
//! `stash.toml` combines the compiler sections with a `[mongodb]` table:
//!
//! ```toml
//! [compiler]
//! strict_ranges = false
//!
//! [currencies]
//! "Mirror of Kalandra" = "mirror"
//!
//! [mongodb]
//! uri = "mongodb://localhost:27017"
//! database = "stash"
//! collection = "posts"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use stash_filter::CompilerConfig;
use stash_mongodb::MongoConfig;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Default config file name (looked up in the working directory)
pub const CONFIG_FILE_NAME: &str = "stash.toml";

/// Stash CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Compiler options and extra currencies
    #[serde(flatten)]
    pub filter: CompilerConfig,

    /// MongoDB connection settings
    pub mongodb: MongoConfig,
}

impl Config {
    /// Parse and validate configuration from TOML.
    pub fn from_toml_str(content: &str) -> CliResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.filter.validate()?;
        config.mongodb.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `./stash.toml` is used when
    /// present and the defaults otherwise.
    pub fn discover(explicit: Option<&Path>) -> CliResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE_NAME);
                if !default.exists() {
                    debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
                default
            }
        };
        debug!(path = %path.display(), "loading configuration");
        Self::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(
            r#"
            [compiler]
            strict_ranges = true

            [currencies]
            "Mirror of Kalandra" = "mirror"

            [mongodb]
            uri = "mongodb://mongo:27017"
            collection = "items"
            default_limit = 50
            "#,
        )
        .unwrap();

        assert!(config.filter.compiler.strict_ranges);
        assert_eq!(config.filter.currencies.get("Mirror of Kalandra").map(String::as_str), Some("mirror"));
        assert_eq!(config.mongodb.uri, "mongodb://mongo:27017");
        assert_eq!(config.mongodb.collection, "items");
        assert_eq!(config.mongodb.default_limit, 50);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_mongodb_section() {
        let err = Config::from_toml_str("[mongodb]\ndefault_limit = 0\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[currencies]\n\"Ancient Orb\" = \"ancient\"").unwrap();

        let config = Config::discover(Some(file.path())).unwrap();
        assert!(config.filter.currency_table().contains("Ancient Orb"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = Config::discover(Some(Path::new("/nonexistent/stash.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
