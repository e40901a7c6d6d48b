//! CLI error types and result alias.

use miette::Diagnostic;
use stash_filter::FilterError;
use stash_mongodb::MongoError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(stash::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(stash::config))]
    Config(String),

    /// The filter payload could not be parsed
    #[error("Invalid input: {0}")]
    #[diagnostic(
        code(stash::input),
        help("filters are JSON objects; pass --form for flat web-form payloads")
    )]
    Input(String),

    /// The compiler rejected the filter
    #[error("Filter rejected [{code}]: {source}")]
    #[diagnostic(code(stash::filter))]
    Filter {
        code: String,
        source: FilterError,
        #[help]
        help: Option<String>,
    },

    /// Database error
    #[error("Database error: {0}")]
    #[diagnostic(code(stash::database))]
    Database(String),

    /// Output serialization error
    #[error("Output error: {0}")]
    #[diagnostic(code(stash::output))]
    Output(String),
}

impl From<FilterError> for CliError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::Config(message) => CliError::Config(message),
            source => CliError::Filter {
                code: source.code().code(),
                help: source.help().map(str::to_string),
                source,
            },
        }
    }
}

impl From<MongoError> for CliError {
    fn from(err: MongoError) -> Self {
        match err {
            MongoError::Filter(source) => source.into(),
            MongoError::Config(message) => CliError::Config(message),
            other => CliError::Database(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}
