//! Item specs, equip kinds, and the standard item catalog.
//!
//! An item's relationship to anatomy is entirely carried by its
//! `required_tags`: a sword doesn't ask for a "weapon slot", it asks for a
//! part tagged `hand` and `grasp`. An empty requirement means the item
//! fits any undestroyed part.

use serde::{Deserialize, Serialize};

use crate::tags::{names, tag_set, TagSet};

/// Broad category of an equippable item. Categories are informational
/// (UI grouping, stacking rules) — fit is decided by tags alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipKind {
    Weapon,
    Offhand,
    Armor,
    Helmet,
    Boots,
    Gauntlets,
    Leggings,
    Backpack,
}

/// Static definition of an equippable item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub kind: EquipKind,
    /// Tags a single body part must all carry to hold this item.
    pub required_tags: TagSet,
    pub power_bonus: i32,
    pub defense_bonus: i32,
}

impl ItemSpec {
    pub fn new(
        name: &str,
        kind: EquipKind,
        required_tags: TagSet,
        power_bonus: i32,
        defense_bonus: i32,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required_tags,
            power_bonus,
            defense_bonus,
        }
    }
}

pub fn dagger() -> ItemSpec {
    ItemSpec::new(
        "dagger",
        EquipKind::Weapon,
        tag_set([names::HAND, names::GRASP]),
        2,
        0,
    )
}

pub fn sword() -> ItemSpec {
    ItemSpec::new(
        "sword",
        EquipKind::Weapon,
        tag_set([names::HAND, names::GRASP]),
        4,
        0,
    )
}

/// Light source. No combat bonus but still needs a grasping part.
pub fn torch() -> ItemSpec {
    ItemSpec::new(
        "torch",
        EquipKind::Weapon,
        tag_set([names::HAND, names::GRASP]),
        0,
        0,
    )
}

pub fn shield() -> ItemSpec {
    ItemSpec::new(
        "shield",
        EquipKind::Offhand,
        tag_set([names::HAND, names::HOLD]),
        0,
        2,
    )
}

pub fn leather_armor() -> ItemSpec {
    ItemSpec::new(
        "leather armor",
        EquipKind::Armor,
        tag_set([names::TORSO, names::ARMOR]),
        0,
        1,
    )
}

pub fn chain_mail() -> ItemSpec {
    ItemSpec::new(
        "chain mail",
        EquipKind::Armor,
        tag_set([names::TORSO, names::ARMOR]),
        0,
        3,
    )
}

pub fn helmet() -> ItemSpec {
    ItemSpec::new(
        "helmet",
        EquipKind::Helmet,
        tag_set([names::HEAD, names::ARMOR]),
        0,
        1,
    )
}

pub fn boots() -> ItemSpec {
    ItemSpec::new(
        "boots",
        EquipKind::Boots,
        tag_set([names::FOOT, names::ARMOR]),
        0,
        1,
    )
}

/// Worn over hands; unlike weapons they don't need a working grasp.
pub fn gauntlets() -> ItemSpec {
    ItemSpec::new("gauntlets", EquipKind::Gauntlets, tag_set([names::HAND]), 0, 1)
}

pub fn leggings() -> ItemSpec {
    ItemSpec::new("leggings", EquipKind::Leggings, tag_set([names::LEG]), 0, 1)
}

pub fn backpack() -> ItemSpec {
    ItemSpec::new(
        "backpack",
        EquipKind::Backpack,
        tag_set([names::TORSO]),
        0,
        0,
    )
}

/// The full standard catalog.
pub fn standard_items() -> Vec<ItemSpec> {
    vec![
        dagger(),
        sword(),
        torch(),
        shield(),
        leather_armor(),
        chain_mail(),
        helmet(),
        boots(),
        gauntlets(),
        leggings(),
        backpack(),
    ]
}
