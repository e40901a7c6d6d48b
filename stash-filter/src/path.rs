//! Attribute paths addressed by predicates.
//!
//! Most paths come from the fixed item schema (`ilvl`, `sockets.link`,
//! `properties.Armour`, ...). Modifier attributes are addressed by a name the
//! caller supplies, so those paths are built through
//! [`AttributePath::namespaced`], which checks the name against an
//! allow-list before it can reach the store's query language.

use std::fmt;

use serde::Serialize;
use smol_str::SmolStr;

use crate::error::{FilterError, FilterResult};

/// Namespace holding an item's explicit/implicit modifiers.
pub const MODS_NAMESPACE: &str = "Mods";

/// Default upper bound on the length of a caller-supplied attribute name.
pub const DEFAULT_MAX_NAME_LEN: usize = 128;

/// Punctuation allowed in caller-supplied names besides letters, digits and spaces.
const NAME_PUNCTUATION: &[char] = &['%', '+', '-', '#', '\'', ',', ':', '(', ')', '/', '&'];

/// A dotted document path such as `properties.Physical Damage`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AttributePath(SmolStr);

impl AttributePath {
    /// A path from the fixed item schema.
    pub fn fixed(path: &'static str) -> Self {
        Self(SmolStr::new(path))
    }

    /// Build `namespace.name` from a caller-supplied `name`.
    ///
    /// ```rust
    /// use stash_filter::path::{AttributePath, MODS_NAMESPACE};
    ///
    /// let path = AttributePath::namespaced(MODS_NAMESPACE, "Increased Physical Damage", 128).unwrap();
    /// assert_eq!(path.as_str(), "Mods.Increased Physical Damage");
    ///
    /// assert!(AttributePath::namespaced(MODS_NAMESPACE, "$where", 128).is_err());
    /// ```
    pub fn namespaced(namespace: &'static str, name: &str, max_len: usize) -> FilterResult<Self> {
        validate_name(name, max_len)?;
        Ok(Self(SmolStr::from(format!("{}.{}", namespace, name))))
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The first path segment.
    pub fn root(&self) -> &str {
        self.as_str()
            .split_once('.')
            .map_or(self.as_str(), |(root, _)| root)
    }

    /// Everything after the first segment, if the path is nested.
    pub fn leaf(&self) -> Option<&str> {
        self.as_str().split_once('.').map(|(_, leaf)| leaf)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for AttributePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Check a caller-supplied name against the attribute-name allow-list.
pub fn validate_name(name: &str, max_len: usize) -> FilterResult<()> {
    if name.is_empty() {
        return Err(FilterError::invalid_attribute(name, "name is empty"));
    }

    let len = name.chars().count();
    if len > max_len {
        return Err(FilterError::invalid_attribute(
            name,
            format!("name is {} characters long, the limit is {}", len, max_len),
        ));
    }

    if name.starts_with(char::is_whitespace) || name.ends_with(char::is_whitespace) {
        return Err(FilterError::invalid_attribute(
            name,
            "name has leading or trailing whitespace",
        ));
    }

    if let Some(c) = name.chars().find(|c| !is_allowed(*c)) {
        return Err(FilterError::invalid_attribute(
            name,
            format!("character {:?} is not allowed", c),
        ));
    }

    Ok(())
}

fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || c == ' ' || NAME_PUNCTUATION.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_path() {
        let path = AttributePath::fixed("properties.Physical Damage");
        assert_eq!(path.as_str(), "properties.Physical Damage");
        assert_eq!(path.root(), "properties");
        assert_eq!(path.leaf(), Some("Physical Damage"));

        let flat = AttributePath::fixed("ilvl");
        assert_eq!(flat.root(), "ilvl");
        assert_eq!(flat.leaf(), None);
    }

    #[test]
    fn test_namespaced_accepts_modifier_text() {
        for name in [
            "Increased Physical Damage",
            "X% increased Attack Speed",
            "+# to maximum Life",
            "Adds #-# Physical Damage to Attacks",
            "Socketed Gems are Supported by Level # Multistrike",
        ] {
            let path = AttributePath::namespaced(MODS_NAMESPACE, name, DEFAULT_MAX_NAME_LEN)
                .unwrap();
            assert_eq!(path.root(), "Mods");
            assert_eq!(path.leaf(), Some(name));
        }
    }

    #[test]
    fn test_namespaced_rejects_injection() {
        for name in ["$where", "a.b", "Life\0", "{\"$gt\": 1}", "x\ny"] {
            let err = AttributePath::namespaced(MODS_NAMESPACE, name, DEFAULT_MAX_NAME_LEN)
                .unwrap_err();
            assert!(matches!(err, FilterError::InvalidAttributeName { .. }), "{name:?}");
        }
    }

    #[test]
    fn test_namespaced_rejects_empty_long_and_padded() {
        assert!(validate_name("", 10).is_err());
        assert!(validate_name(" Life", 10).is_err());
        assert!(validate_name("Life ", 10).is_err());
        assert!(validate_name("abcdefghijk", 10).is_err());
        assert!(validate_name("abcdefghij", 10).is_ok());
    }
}
