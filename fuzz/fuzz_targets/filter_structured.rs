//! Structured fuzz target for the filter compiler.
//!
//! Generates arbitrary bounds and modifier names and checks the properties
//! that must hold for every input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_filter_structured
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stash_filter::{Bounds, FilterCompiler, FilterInput, MAX_LINKS, ModifierFilter, Operator};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    item_type: Option<String>,
    corrupted: Option<bool>,
    item_level: (Option<i64>, Option<i64>),
    armour: (Option<f64>, Option<f64>),
    physical_damage: (Option<f64>, Option<f64>),
    link_count: (Option<i64>, Option<i64>),
    modifiers: Vec<(String, Option<f64>, Option<f64>)>,
}

impl From<FuzzInput> for FilterInput {
    fn from(f: FuzzInput) -> Self {
        FilterInput {
            item_type: f.item_type,
            corrupted: f.corrupted,
            item_level: Bounds::new(f.item_level.0, f.item_level.1),
            armour: Bounds::new(f.armour.0, f.armour.1),
            physical_damage: Bounds::new(f.physical_damage.0, f.physical_damage.1),
            link_count: Bounds::new(f.link_count.0, f.link_count.1),
            modifiers: f
                .modifiers
                .into_iter()
                .map(|(name, lower, upper)| ModifierFilter { name, lower, upper })
                .collect(),
            ..Default::default()
        }
    }
}

fuzz_target!(|data: FuzzInput| {
    let input = FilterInput::from(data);
    let compiler = FilterCompiler::default();

    let first = compiler.compile(&input);
    let second = compiler.compile(&input);
    // Debug output rather than PartialEq: NaN bounds never compare equal.
    assert_eq!(
        format!("{:?}", first),
        format!("{:?}", second),
        "compilation must be deterministic"
    );

    if let Ok(predicates) = first {
        for predicate in &predicates {
            if let Operator::InSet(members) = predicate.op() {
                assert!(members.len() <= MAX_LINKS as usize + 1);
            }
        }
    }
});
