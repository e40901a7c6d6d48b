//! Flat search-form payloads.
//!
//! The web client posts the search form as a flat object with one key per
//! widget (`min_ilvl`, `max_ilvl`, `str_socket`, ...). [`ItemQueryForm`]
//! mirrors that payload and converts into the nested [`FilterInput`]. Blank
//! strings count as unset, the same way an empty text box does.

use serde::{Deserialize, Serialize};

use crate::input::{Bounds, FilterInput, ModifierFilter, Requirements};

/// One entry of the repeatable modifier sub-form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierForm {
    /// Modifier text.
    pub mods_name: Option<String>,
    /// Lower bound.
    pub mods_lower_bound: Option<f64>,
    /// Upper bound.
    pub mods_upper_bound: Option<f64>,
}

impl ModifierForm {
    fn into_filter(self) -> Option<ModifierFilter> {
        non_blank(self.mods_name).map(|name| ModifierFilter {
            name,
            lower: self.mods_lower_bound,
            upper: self.mods_upper_bound,
        })
    }
}

/// The item search form as posted by the web client.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemQueryForm {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    #[serde(rename = "typeLine")]
    pub type_line: Option<String>,
    pub league: Option<String>,

    pub currency_name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,

    pub corrupted: Option<bool>,
    pub verified: Option<bool>,
    pub identified: Option<bool>,
    pub supported: Option<bool>,

    pub min_ilvl: Option<i64>,
    pub max_ilvl: Option<i64>,
    pub min_socket_number: Option<i64>,
    pub max_socket_number: Option<i64>,
    pub min_link_number: Option<i64>,
    pub max_link_number: Option<i64>,

    pub str_socket: Option<i64>,
    pub dex_socket: Option<i64>,
    pub int_socket: Option<i64>,
    pub other_socket: Option<i64>,

    pub min_requirements_int: Option<i64>,
    pub max_requirements_int: Option<i64>,
    pub min_requirements_dex: Option<i64>,
    pub max_requirements_dex: Option<i64>,
    pub min_requirements_str: Option<i64>,
    pub max_requirements_str: Option<i64>,
    pub min_requirements_lvl: Option<i64>,
    pub max_requirements_lvl: Option<i64>,

    pub min_physical_damage: Option<f64>,
    pub max_physical_damage: Option<f64>,
    pub min_elemental_damage: Option<f64>,
    pub max_elemental_damage: Option<f64>,
    pub min_critical_strike_chance: Option<f64>,
    pub max_critical_strike_chance: Option<f64>,
    pub min_attacks_per_second: Option<f64>,
    pub max_attacks_per_second: Option<f64>,

    pub min_armour: Option<f64>,
    pub max_armour: Option<f64>,
    pub min_evasion: Option<f64>,
    pub max_evasion: Option<f64>,
    pub min_shield: Option<f64>,
    pub max_shield: Option<f64>,
    pub min_block: Option<f64>,
    pub max_block: Option<f64>,
    pub min_quality: Option<f64>,
    pub max_quality: Option<f64>,

    /// Single modifier widget.
    #[serde(flatten)]
    pub modifier: ModifierForm,
    /// Additional modifier rows.
    #[serde(rename = "Mods_content")]
    pub mods_content: Vec<ModifierForm>,
}

impl ItemQueryForm {
    /// Parse a form payload from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<ItemQueryForm> for FilterInput {
    fn from(form: ItemQueryForm) -> Self {
        let modifiers = std::iter::once(form.modifier)
            .chain(form.mods_content)
            .filter_map(ModifierForm::into_filter)
            .collect();

        FilterInput {
            currency_name: non_blank(form.currency_name),
            price: Bounds::new(form.min_price, form.max_price),
            name: non_blank(form.name),
            item_type: non_blank(form.item_type),
            type_line: non_blank(form.type_line),
            league: non_blank(form.league),
            corrupted: form.corrupted,
            verified: form.verified,
            identified: form.identified,
            supported: form.supported,
            item_level: Bounds::new(form.min_ilvl, form.max_ilvl),
            socket_count: Bounds::new(form.min_socket_number, form.max_socket_number),
            requirements: Requirements {
                intelligence: Bounds::new(form.min_requirements_int, form.max_requirements_int),
                dexterity: Bounds::new(form.min_requirements_dex, form.max_requirements_dex),
                strength: Bounds::new(form.min_requirements_str, form.max_requirements_str),
                level: Bounds::new(form.min_requirements_lvl, form.max_requirements_lvl),
            },
            armour: Bounds::new(form.min_armour, form.max_armour),
            evasion: Bounds::new(form.min_evasion, form.max_evasion),
            energy_shield: Bounds::new(form.min_shield, form.max_shield),
            block: Bounds::new(form.min_block, form.max_block),
            quality: Bounds::new(form.min_quality, form.max_quality),
            physical_damage: Bounds::new(form.min_physical_damage, form.max_physical_damage),
            elemental_damage: Bounds::new(form.min_elemental_damage, form.max_elemental_damage),
            critical_strike_chance: Bounds::new(
                form.min_critical_strike_chance,
                form.max_critical_strike_chance,
            ),
            attacks_per_second: Bounds::new(
                form.min_attacks_per_second,
                form.max_attacks_per_second,
            ),
            str_sockets: form.str_socket,
            dex_sockets: form.dex_socket,
            int_sockets: form.int_socket,
            other_sockets: form.other_socket,
            link_count: Bounds::new(form.min_link_number, form.max_link_number),
            modifiers,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_to_input() {
        let form = ItemQueryForm::from_json(
            r#"{
                "type": "Ring",
                "league": "Standard",
                "currency_name": "Chaos Orb",
                "max_price": 5,
                "min_ilvl": 60,
                "max_link_number": 4,
                "str_socket": 2,
                "min_requirements_lvl": 10
            }"#,
        )
        .unwrap();
        let input = FilterInput::from(form);

        assert_eq!(input.item_type.as_deref(), Some("Ring"));
        assert_eq!(input.currency_name.as_deref(), Some("Chaos Orb"));
        assert_eq!(input.price, Bounds::at_most(5.0));
        assert_eq!(input.item_level, Bounds::at_least(60));
        assert_eq!(input.link_count, Bounds::at_most(4));
        assert_eq!(input.str_sockets, Some(2));
        assert_eq!(input.requirements.level, Bounds::at_least(10));
        assert!(input.modifiers.is_empty());
    }

    #[test]
    fn test_blank_strings_are_unset() {
        let form = ItemQueryForm {
            name: Some("   ".to_string()),
            league: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(FilterInput::from(form), FilterInput::new());
    }

    #[test]
    fn test_modifier_rows_collected_in_order() {
        let form = ItemQueryForm::from_json(
            r#"{
                "mods_name": "X% increased Attack Speed",
                "mods_lower_bound": 3,
                "Mods_content": [
                    { "mods_name": "+# to maximum Life", "mods_upper_bound": 90 },
                    { "mods_name": "" }
                ]
            }"#,
        )
        .unwrap();
        let input = FilterInput::from(form);

        assert_eq!(
            input.modifiers,
            vec![
                ModifierFilter::present("X% increased Attack Speed").lower(3.0),
                ModifierFilter::present("+# to maximum Life").upper(90.0),
            ]
        );
    }
}
