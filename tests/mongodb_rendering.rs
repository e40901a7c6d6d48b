//! Integration tests for rendering compiled filters as MongoDB queries.

#![cfg(feature = "mongodb")]

use bson::{Bson, doc};
use pretty_assertions::assert_eq;
use stash_search::filter::{Bounds, ModifierFilter};
use stash_search::mongodb::to_query;
use stash_search::{FilterCompiler, FilterInput};

fn render(input: &FilterInput) -> bson::Document {
    to_query(&FilterCompiler::default().compile(input).unwrap())
}

#[test]
fn test_empty_filter_matches_everything() {
    assert_eq!(render(&FilterInput::default()), doc! {});
}

#[test]
fn test_full_form_renders_in_order() {
    let input = FilterInput {
        currency_name: Some("Chaos Orb".into()),
        price: Bounds::between(1.0, 5.0),
        name: Some("Belly of the Beast".into()),
        item_type: Some("Body Armour".into()),
        corrupted: Some(true),
        armour: Bounds::at_least(500.0),
        attacks_per_second: Bounds::between(1.0, 2.0),
        str_sockets: Some(2),
        link_count: Bounds::at_least(5),
        modifiers: vec![ModifierFilter::present("#% increased maximum Life").lower(30.0).upper(40.0)],
        ..Default::default()
    };

    let query = render(&input);
    assert_eq!(
        query,
        doc! { "$and": [
            { "Price.Currency": "chaos", "Price.Number": { "$gte": 1.0, "$lte": 5.0 } },
            { "name": { "$regex": "Belly of the Beast", "$options": "i" } },
            { "type": "Body Armours" },
            { "corrupted": true },
            { "properties.Armour": { "$gte": 500.0 } },
            { "properties.Attacks per Second": { "$gte": 1.5 } },
            { "sockets.S": { "$gte": 2_i64 } },
            { "sockets.link": { "$in": [5_i64, 6_i64] } },
            { "Mods.#% increased maximum Life": { "$gte": 30.0, "$lte": 40.0 } },
        ] }
    );
}

#[test]
fn test_name_is_matched_literally() {
    let input = FilterInput {
        name: Some("Atziri's Step.*".into()),
        ..Default::default()
    };
    let query = render(&input);
    let clauses = query.get_array("$and").unwrap();
    let Bson::Document(name) = &clauses[0] else {
        panic!("expected a document");
    };
    assert_eq!(
        name.get_document("name").unwrap().get_str("$regex").unwrap(),
        r"Atziri's Step\.\*"
    );
}

#[test]
fn test_modifier_existence() {
    let input = FilterInput {
        modifiers: vec![ModifierFilter::present("Increased Physical Damage")],
        ..Default::default()
    };
    assert_eq!(
        render(&input),
        doc! { "$and": [ { "Mods.Increased Physical Damage": { "$exists": true } } ] }
    );
}

#[test]
fn test_extended_json_shape() {
    let input = FilterInput {
        item_level: Bounds::between(70, 84),
        ..Default::default()
    };
    let json = Bson::Document(render(&input)).into_relaxed_extjson();
    assert_eq!(
        json,
        serde_json::json!({ "$and": [ { "ilvl": { "$gte": 70, "$lte": 84 } } ] })
    );
}
