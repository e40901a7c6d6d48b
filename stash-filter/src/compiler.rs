//! The filter compiler.
//!
//! [`FilterCompiler::compile`] turns a sparse [`FilterInput`] into the
//! ordered predicate list the query executor AND-combines. Output order is
//! fixed by field, so identical inputs compile to identical lists:
//!
//! 1. currency and price
//! 2. name substring
//! 3. item type, base type, league
//! 4. corrupted / verified / identified / supported flags
//! 5. closed ranges: item level, socket count, requirements, defences, quality
//! 6. derived ranges: physical, elemental, crit chance, attacks per second
//! 7. socket colour minimums
//! 8. link count membership
//! 9. modifiers, in input order
//!
//! Two derived behaviours are kept on purpose because stored queries and
//! saved searches depend on them: a derived range with both bounds compiles
//! to a single `>= mean` threshold, and a link-count pair with both bounds
//! matches only the minimum.
//!
//! ```rust
//! use stash_filter::{Bounds, FilterCompiler, FilterInput, Operator};
//!
//! let compiler = FilterCompiler::default();
//! let input = FilterInput {
//!     physical_damage: Bounds::between(10.0, 20.0),
//!     ..Default::default()
//! };
//!
//! let predicates = compiler.compile(&input).unwrap();
//! assert_eq!(predicates.len(), 1);
//! assert_eq!(predicates[0].op(), &Operator::Gte(15.0.into()));
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::currency::CurrencyTable;
use crate::error::{FilterError, FilterResult};
use crate::filter::{Clause, FilterValue, MemberSet, Operator, Predicate};
use crate::input::{Bounds, FilterInput};
use crate::item_type::pluralize;
use crate::path::{AttributePath, DEFAULT_MAX_NAME_LEN, MODS_NAMESPACE};

/// Largest linked group an item can have.
pub const MAX_LINKS: i64 = 6;

/// Compiler behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Reject pairs whose min exceeds their max instead of compiling them as given.
    pub strict_ranges: bool,
    /// Maximum length of a caller-supplied modifier name.
    pub max_attribute_name_len: usize,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            strict_ranges: false,
            max_attribute_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

/// Compiles [`FilterInput`]s into predicate lists.
///
/// Holds only immutable lookup data, so one compiler can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct FilterCompiler {
    currencies: CurrencyTable,
    options: CompilerOptions,
}

impl FilterCompiler {
    /// Create a compiler with the given currency table and default options.
    pub fn new(currencies: CurrencyTable) -> Self {
        Self::with_options(currencies, CompilerOptions::default())
    }

    /// Create a compiler with explicit options.
    pub fn with_options(currencies: CurrencyTable, options: CompilerOptions) -> Self {
        Self {
            currencies,
            options,
        }
    }

    /// The currency table used for price lookups.
    pub fn currencies(&self) -> &CurrencyTable {
        &self.currencies
    }

    /// The active options.
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compile a filter into its predicate list.
    ///
    /// Fails only on an unknown currency name, an invalid modifier name, or
    /// (with `strict_ranges`) an inverted range pair.
    pub fn compile(&self, input: &FilterInput) -> FilterResult<Vec<Predicate>> {
        let mut out = Vec::new();

        if let Some(predicate) = self.price(input)? {
            out.push(predicate);
        }

        if let Some(name) = &input.name {
            out.push(fixed("name", Operator::ContainsCi(name.clone())));
        }
        if let Some(item_type) = &input.item_type {
            out.push(fixed("type", Operator::Equals(pluralize(item_type).into_owned().into())));
        }
        if let Some(type_line) = &input.type_line {
            out.push(fixed("typeLine", Operator::Equals(type_line.as_str().into())));
        }
        if let Some(league) = &input.league {
            out.push(fixed("league", Operator::Equals(league.as_str().into())));
        }

        let flags = [
            ("corrupted", input.corrupted),
            ("verified", input.verified),
            ("identified", input.identified),
            ("support", input.supported),
        ];
        for (path, flag) in flags {
            // Only an explicit `true` constrains; `false` cannot be expressed.
            if flag == Some(true) {
                out.push(fixed(path, Operator::Equals(true.into())));
            }
        }

        let int_ranges = [
            ("item_level", "ilvl", &input.item_level),
            ("socket_count", "sockets.socket_number", &input.socket_count),
            ("requirements.intelligence", "requirements.Int", &input.requirements.intelligence),
            ("requirements.dexterity", "requirements.Dex", &input.requirements.dexterity),
            ("requirements.strength", "requirements.Str", &input.requirements.strength),
            ("requirements.level", "requirements.Level", &input.requirements.level),
        ];
        for (field, path, bounds) in int_ranges {
            self.check_pair(field, bounds)?;
            if let Some(op) = range_operator(bounds) {
                out.push(fixed(path, op));
            }
        }

        let float_ranges = [
            ("armour", "properties.Armour", &input.armour),
            ("evasion", "properties.Evasion Rating", &input.evasion),
            ("energy_shield", "properties.Energy Shield", &input.energy_shield),
            ("block", "properties.Chance to Block", &input.block),
            ("quality", "properties.Quality", &input.quality),
        ];
        for (field, path, bounds) in float_ranges {
            self.check_pair(field, bounds)?;
            if let Some(op) = range_operator(bounds) {
                out.push(fixed(path, op));
            }
        }

        let derived = [
            ("physical_damage", "properties.Physical Damage", &input.physical_damage),
            ("elemental_damage", "properties.Elemental Damage", &input.elemental_damage),
            (
                "critical_strike_chance",
                "properties.Critical Strike Chance",
                &input.critical_strike_chance,
            ),
            ("attacks_per_second", "properties.Attacks per Second", &input.attacks_per_second),
        ];
        for (field, path, bounds) in derived {
            self.check_pair(field, bounds)?;
            if let Some(op) = derived_operator(bounds) {
                out.push(fixed(path, op));
            }
        }

        let socket_colours = [
            ("sockets.S", input.str_sockets),
            ("sockets.D", input.dex_sockets),
            ("sockets.I", input.int_sockets),
            ("sockets.Other", input.other_sockets),
        ];
        for (path, min) in socket_colours {
            if let Some(min) = min {
                out.push(fixed(path, Operator::Gte(min.into())));
            }
        }

        self.check_pair("link_count", &input.link_count)?;
        if let Some(links) = link_members(&input.link_count) {
            out.push(fixed("sockets.link", Operator::InSet(links)));
        }

        for modifier in &input.modifiers {
            let path = AttributePath::namespaced(
                MODS_NAMESPACE,
                &modifier.name,
                self.options.max_attribute_name_len,
            )?;
            let bounds = modifier.bounds();
            self.check_pair("modifier", &bounds)?;
            let op = range_operator(&bounds).unwrap_or(Operator::Exists);
            out.push(Predicate::new(path, op));
        }

        for predicate in &out {
            trace!(predicate = %predicate, "compiled predicate");
        }
        debug!(predicates = out.len(), "compiled item filter");

        Ok(out)
    }

    /// Currency equality, optionally anchoring a price bound.
    ///
    /// Price bounds without a currency name produce nothing.
    fn price(&self, input: &FilterInput) -> FilterResult<Option<Predicate>> {
        let Some(name) = &input.currency_name else {
            if !input.price.is_empty() {
                debug!("price bounds without a currency name are ignored");
            }
            return Ok(None);
        };

        let code = self.currencies.resolve(name)?;
        self.check_pair("price", &input.price)?;

        let currency = Operator::Equals(code.into());
        let predicate = match range_operator(&input.price) {
            Some(op) => Predicate::anchored(
                Clause::new(AttributePath::fixed("Price.Currency"), currency),
                AttributePath::fixed("Price.Number"),
                op,
            ),
            None => fixed("Price.Currency", currency),
        };
        Ok(Some(predicate))
    }

    fn check_pair<T>(&self, field: &'static str, bounds: &Bounds<T>) -> FilterResult<()>
    where
        T: PartialOrd + Display,
    {
        if !self.options.strict_ranges {
            return Ok(());
        }
        match (&bounds.min, &bounds.max) {
            (Some(min), Some(max)) if min > max => {
                Err(FilterError::malformed_range(field, min, max))
            }
            _ => Ok(()),
        }
    }
}

fn fixed(path: &'static str, op: Operator) -> Predicate {
    Predicate::new(AttributePath::fixed(path), op)
}

/// `>= min` (with `<= max`), or `<= max` alone.
fn range_operator<T>(bounds: &Bounds<T>) -> Option<Operator>
where
    T: Copy + Into<FilterValue>,
{
    match (bounds.min, bounds.max) {
        (Some(min), Some(max)) => Some(Operator::Range {
            gte: min.into(),
            lte: max.into(),
        }),
        (Some(min), None) => Some(Operator::Gte(min.into())),
        (None, Some(max)) => Some(Operator::Lte(max.into())),
        (None, None) => None,
    }
}

/// Both bounds collapse to `>= mean`; otherwise a one-sided bound.
fn derived_operator(bounds: &Bounds<f64>) -> Option<Operator> {
    match (bounds.min, bounds.max) {
        // Halve first so two large finite bounds cannot overflow to infinity.
        (Some(min), Some(max)) => Some(Operator::Gte((min / 2.0 + max / 2.0).into())),
        (Some(min), None) => Some(Operator::Gte(min.into())),
        (None, Some(max)) => Some(Operator::Lte(max.into())),
        (None, None) => None,
    }
}

/// Link-count membership set.
///
/// Both bounds select `{min}` only; min alone selects `min..=6`; max alone
/// selects `0..max` with max excluded. Expansions are clamped to `[0, 6]`.
fn link_members(bounds: &Bounds<i64>) -> Option<MemberSet> {
    match (bounds.min, bounds.max) {
        (Some(min), Some(_)) => Some(MemberSet::from_slice(&[min])),
        (Some(min), None) => Some((min.max(0)..=MAX_LINKS).collect()),
        (None, Some(max)) => Some((0..max.min(MAX_LINKS + 1)).collect()),
        (None, None) => None,
    }
}
