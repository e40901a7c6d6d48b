//! Error types for filter compilation.
//!
//! The compiler is total over well-formed input, so the taxonomy is small:
//!
//! - `S1xxx`: rejected filter input (unknown categorical value, inverted
//!   range pair, unsafe attribute name)
//! - `S7xxx`: configuration errors
//!
//! ```rust
//! use stash_filter::{ErrorCode, FilterError};
//!
//! let err = FilterError::unknown_category("currency", "Mirror Shard");
//! assert_eq!(err.code(), ErrorCode::UnknownCategoryValue);
//! assert_eq!(err.code().code(), "S1001");
//! ```

use std::fmt;
use thiserror::Error;

/// Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Filter input errors (1xxx)
    /// Categorical lookup has no entry in its table (S1001).
    UnknownCategoryValue = 1001,
    /// A min bound is greater than its paired max (S1002).
    MalformedRangePair = 1002,
    /// A dynamic attribute name failed validation (S1003).
    InvalidAttributeName = 1003,

    // Configuration errors (7xxx)
    /// Invalid configuration (S7001).
    InvalidConfiguration = 7001,
}

impl ErrorCode {
    /// Get the error code string (e.g., "S1001").
    pub fn code(&self) -> String {
        format!("S{}", *self as u16)
    }

    /// Get a short description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::UnknownCategoryValue => "Unknown categorical value",
            Self::MalformedRangePair => "Malformed range pair",
            Self::InvalidAttributeName => "Invalid attribute name",
            Self::InvalidConfiguration => "Invalid configuration",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while compiling a filter or loading compiler configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A categorical lookup (e.g. currency display name) has no table entry.
    #[error("unknown {category} value {value:?}")]
    UnknownCategoryValue {
        /// Which lookup table rejected the value.
        category: &'static str,
        /// The rejected value as supplied by the caller.
        value: String,
    },

    /// A range pair whose lower bound exceeds its upper bound.
    #[error("malformed range for {field}: min {min} is greater than max {max}")]
    MalformedRangePair {
        /// Form field the pair belongs to.
        field: &'static str,
        /// Rendered lower bound.
        min: String,
        /// Rendered upper bound.
        max: String,
    },

    /// A caller-supplied attribute name that cannot be used as a path segment.
    #[error("invalid attribute name {name:?}: {reason}")]
    InvalidAttributeName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl FilterError {
    /// Create an unknown categorical value error.
    pub fn unknown_category(category: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownCategoryValue {
            category,
            value: value.into(),
        }
    }

    /// Create a malformed range pair error.
    pub fn malformed_range(
        field: &'static str,
        min: impl fmt::Display,
        max: impl fmt::Display,
    ) -> Self {
        Self::MalformedRangePair {
            field,
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create an invalid attribute name error.
    pub fn invalid_attribute(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAttributeName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownCategoryValue { .. } => ErrorCode::UnknownCategoryValue,
            Self::MalformedRangePair { .. } => ErrorCode::MalformedRangePair,
            Self::InvalidAttributeName { .. } => ErrorCode::InvalidAttributeName,
            Self::Config(_) => ErrorCode::InvalidConfiguration,
        }
    }

    /// Help text for the caller, if there is something actionable to say.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::UnknownCategoryValue { .. } => {
                Some("reject the value in the form layer or add it to the [currencies] table")
            }
            Self::MalformedRangePair { .. } => Some("swap the bounds or drop one of them"),
            Self::InvalidAttributeName { .. } => Some(
                "names may contain letters, digits, spaces and % + - # ' , : ( ) / & only",
            ),
            Self::Config(_) => None,
        }
    }

    /// Check if this error was caused by caller input rather than configuration.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Config(_))
    }

    /// Check if this is an unknown categorical value error.
    pub fn is_unknown_category(&self) -> bool {
        matches!(self, Self::UnknownCategoryValue { .. })
    }
}

impl From<toml::de::Error> for FilterError {
    fn from(err: toml::de::Error) -> Self {
        FilterError::Config(format!("failed to parse TOML: {}", err))
    }
}

impl From<std::io::Error> for FilterError {
    fn from(err: std::io::Error) -> Self {
        FilterError::Config(format!("failed to read configuration: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::UnknownCategoryValue.code(), "S1001");
        assert_eq!(ErrorCode::MalformedRangePair.code(), "S1002");
        assert_eq!(ErrorCode::InvalidAttributeName.code(), "S1003");
        assert_eq!(ErrorCode::InvalidConfiguration.to_string(), "S7001");
    }

    #[test]
    fn test_error_display() {
        let err = FilterError::unknown_category("currency", "Mirror Shard");
        assert_eq!(err.to_string(), "unknown currency value \"Mirror Shard\"");

        let err = FilterError::malformed_range("item_level", 60, 10);
        assert_eq!(
            err.to_string(),
            "malformed range for item_level: min 60 is greater than max 10"
        );
    }

    #[test]
    fn test_error_classification() {
        let err = FilterError::unknown_category("currency", "x");
        assert!(err.is_unknown_category());
        assert!(err.is_input_error());
        assert!(err.help().is_some());

        let err = FilterError::config("bad table");
        assert!(!err.is_input_error());
        assert_eq!(err.code(), ErrorCode::InvalidConfiguration);
        assert!(err.help().is_none());
    }
}
