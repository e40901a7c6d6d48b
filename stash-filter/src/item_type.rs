//! Item category normalisation.
//!
//! The `type` attribute stores category labels pluralised ("Rings",
//! "Boots", "Body Armours"), except for "Flask" which is stored as is.

use std::borrow::Cow;

/// The one category label that is never pluralised.
pub const UNPLURALIZED_CATEGORY: &str = "Flask";

/// Normalise a category label to the form stored on items.
///
/// The value is trimmed first. Trimmed values already ending in `s`, and
/// the literal `"Flask"`, are returned as is; anything else gets an `s`
/// appended.
///
/// ```rust
/// use stash_filter::item_type::pluralize;
///
/// assert_eq!(pluralize("Ring"), "Rings");
/// assert_eq!(pluralize("Flask"), "Flask");
/// assert_eq!(pluralize("Boots"), "Boots");
/// ```
pub fn pluralize(value: &str) -> Cow<'_, str> {
    let value = value.trim();
    if value.ends_with('s') || value == UNPLURALIZED_CATEGORY {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("{}s", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_singular() {
        assert_eq!(pluralize("Ring"), "Rings");
        assert_eq!(pluralize("Body Armour"), "Body Armours");
        assert_eq!(pluralize("  Amulet "), "Amulets");
    }

    #[test]
    fn test_pluralize_passthrough() {
        assert!(matches!(pluralize("Boots"), Cow::Borrowed("Boots")));
        assert!(matches!(pluralize("Gloves"), Cow::Borrowed("Gloves")));
        assert!(matches!(pluralize("Flask"), Cow::Borrowed("Flask")));
    }

    #[test]
    fn test_flask_match_is_case_sensitive() {
        assert_eq!(pluralize("flask"), "flasks");
    }

    #[test]
    fn test_pluralize_trims_before_checking() {
        assert!(matches!(pluralize("Boots "), Cow::Borrowed("Boots")));
        assert!(matches!(pluralize(" Flask"), Cow::Borrowed("Flask")));
        assert_eq!(pluralize(" Ring "), "Rings");
    }
}
