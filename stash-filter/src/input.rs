//! The sparse filter form handed to the compiler.
//!
//! Every field is independently optional; an absent field never constrains
//! the search. [`FilterInput`] deserializes from JSON with every field
//! defaulted, so `{}` is a valid, empty filter.

use serde::{Deserialize, Serialize};

/// An optional `(min, max)` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds<T> {
    /// Lower bound.
    pub min: Option<T>,
    /// Upper bound.
    pub max: Option<T>,
}

impl<T> Bounds<T> {
    /// Create a pair from two optional bounds.
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// Only a lower bound.
    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Only an upper bound.
    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Both bounds.
    pub fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Check if neither bound is set.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Attribute requirements to equip an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Requirements {
    /// Intelligence requirement.
    #[serde(alias = "int")]
    pub intelligence: Bounds<i64>,
    /// Dexterity requirement.
    #[serde(alias = "dex")]
    pub dexterity: Bounds<i64>,
    /// Strength requirement.
    #[serde(alias = "str")]
    pub strength: Bounds<i64>,
    /// Character level requirement.
    #[serde(alias = "lvl")]
    pub level: Bounds<i64>,
}

/// A constraint on a named modifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModifierFilter {
    /// Modifier text as stored under `Mods`, e.g. `"X% increased Attack Speed"`.
    pub name: String,
    /// Lower bound on the modifier value.
    pub lower: Option<f64>,
    /// Upper bound on the modifier value.
    pub upper: Option<f64>,
}

impl ModifierFilter {
    /// Require the modifier to be present, with any value.
    pub fn present(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower: None,
            upper: None,
        }
    }

    /// Set the lower bound.
    pub fn lower(mut self, lower: f64) -> Self {
        self.lower = Some(lower);
        self
    }

    /// Set the upper bound.
    pub fn upper(mut self, upper: f64) -> Self {
        self.upper = Some(upper);
        self
    }

    /// The bounds as a pair.
    pub fn bounds(&self) -> Bounds<f64> {
        Bounds::new(self.lower, self.upper)
    }
}

/// Sparse set of optional item-search criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterInput {
    /// Currency display name the price is quoted in (e.g. `"Chaos Orb"`).
    pub currency_name: Option<String>,
    /// Price bounds; ignored unless `currency_name` is set.
    pub price: Bounds<f64>,

    /// Case-insensitive substring of the item name.
    pub name: Option<String>,
    /// Item category, singular or plural (`"Ring"`, `"Boots"`).
    #[serde(rename = "type", alias = "item_type")]
    pub item_type: Option<String>,
    /// Exact base type.
    #[serde(rename = "typeLine", alias = "type_line")]
    pub type_line: Option<String>,
    /// League the item is listed in.
    pub league: Option<String>,

    /// Only corrupted items.
    pub corrupted: Option<bool>,
    /// Only verified items.
    pub verified: Option<bool>,
    /// Only identified items.
    pub identified: Option<bool>,
    /// Only support gems.
    pub supported: Option<bool>,

    /// Item level.
    #[serde(alias = "ilvl")]
    pub item_level: Bounds<i64>,
    /// Total socket count.
    pub socket_count: Bounds<i64>,
    /// Equip requirements.
    pub requirements: Requirements,

    /// Armour rating.
    pub armour: Bounds<f64>,
    /// Evasion rating.
    pub evasion: Bounds<f64>,
    /// Energy shield.
    pub energy_shield: Bounds<f64>,
    /// Chance to block.
    pub block: Bounds<f64>,
    /// Quality.
    pub quality: Bounds<f64>,

    /// Physical damage. Both bounds collapse to their mean.
    pub physical_damage: Bounds<f64>,
    /// Elemental damage. Both bounds collapse to their mean.
    pub elemental_damage: Bounds<f64>,
    /// Critical strike chance. Both bounds collapse to their mean.
    pub critical_strike_chance: Bounds<f64>,
    /// Attacks per second. Both bounds collapse to their mean.
    pub attacks_per_second: Bounds<f64>,

    /// Minimum red sockets.
    pub str_sockets: Option<i64>,
    /// Minimum green sockets.
    pub dex_sockets: Option<i64>,
    /// Minimum blue sockets.
    pub int_sockets: Option<i64>,
    /// Minimum white sockets.
    pub other_sockets: Option<i64>,

    /// Linked socket group size, in `[0, 6]`.
    pub link_count: Bounds<i64>,

    /// Named modifier constraints, compiled in order.
    #[serde(alias = "mods")]
    pub modifiers: Vec<ModifierFilter>,
}

impl FilterInput {
    /// An empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a filter from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
