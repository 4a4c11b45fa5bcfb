//! Item→part assignment built on top of matching.
//!
//! The matching queries only report candidates; this module owns the
//! actual assignment. The resolution rule is "first matching part in
//! declared order that isn't already holding something" — equipping two
//! swords on a humanoid lands one in each hand, and a third has nowhere
//! to go.
//!
//! A loadout refers to body parts by index into [`Anatomy::parts`], which
//! is stable because anatomies never gain or lose parts after
//! construction.

use serde::{Deserialize, Serialize};

use crate::body::Anatomy;
use crate::equipment::ItemSpec;
use crate::matching::matching_indices;

/// Why an equip attempt was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipError {
    /// No undestroyed part carries the required tags.
    NoMatchingPart,
    /// Parts qualify, but every one of them already holds an item.
    AllCandidatesOccupied,
    /// An item with this name is already equipped.
    AlreadyEquipped,
}

/// One equipped item and the part index holding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquippedItem {
    pub item: ItemSpec,
    pub part: usize,
}

/// All items currently equipped on one creature. At most one item per
/// body part; items are identified by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Loadout {
    equipped: Vec<EquippedItem>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[EquippedItem] {
        &self.equipped
    }

    pub fn is_equipped(&self, name: &str) -> bool {
        self.equipped.iter().any(|e| e.item.name == name)
    }

    /// Part index holding the named item, if equipped.
    pub fn part_of(&self, name: &str) -> Option<usize> {
        self.equipped
            .iter()
            .find(|e| e.item.name == name)
            .map(|e| e.part)
    }

    /// Item held by the given part, if any.
    pub fn item_on(&self, part: usize) -> Option<&ItemSpec> {
        self.equipped
            .iter()
            .find(|e| e.part == part)
            .map(|e| &e.item)
    }

    fn occupied(&self, part: usize) -> bool {
        self.equipped.iter().any(|e| e.part == part)
    }

    /// Equip an item on the first free matching part, returning the part
    /// index it landed on.
    pub fn equip(&mut self, anatomy: &Anatomy, item: ItemSpec) -> Result<usize, EquipError> {
        if self.is_equipped(&item.name) {
            return Err(EquipError::AlreadyEquipped);
        }
        let candidates = matching_indices(anatomy, &item.required_tags);
        if candidates.is_empty() {
            return Err(EquipError::NoMatchingPart);
        }
        let part = candidates
            .into_iter()
            .find(|i| !self.occupied(*i))
            .ok_or(EquipError::AllCandidatesOccupied)?;
        self.equipped.push(EquippedItem { item, part });
        Ok(part)
    }

    /// Remove the named item, returning its spec.
    pub fn unequip(&mut self, name: &str) -> Option<ItemSpec> {
        let pos = self.equipped.iter().position(|e| e.item.name == name)?;
        Some(self.equipped.remove(pos).item)
    }

    /// Drop every item whose holding part has been destroyed. Returns the
    /// dropped specs so the host can place them on the floor.
    pub fn release_destroyed(&mut self, anatomy: &Anatomy) -> Vec<ItemSpec> {
        let mut dropped = Vec::new();
        self.equipped.retain(|e| {
            let gone = anatomy
                .parts
                .get(e.part)
                .map_or(true, |p| p.is_destroyed());
            if gone {
                dropped.push(e.item.clone());
            }
            !gone
        });
        dropped
    }

    pub fn power_bonus(&self) -> i32 {
        self.equipped.iter().map(|e| e.item.power_bonus).sum()
    }

    pub fn defense_bonus(&self) -> i32 {
        self.equipped.iter().map(|e| e.item.defense_bonus).sum()
    }
}
