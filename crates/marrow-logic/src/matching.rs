//! Tag-containment equip queries over an anatomy.
//!
//! Whether an item fits a creature is a pure set question: an undestroyed
//! body part qualifies when its tag set contains every tag the item
//! requires. These functions only *report* candidates — assigning an item
//! to a part is the caller's job (see [`crate::loadout`]).
//!
//! All queries are total. An empty anatomy, an empty requirement, or a
//! requirement no part can meet are ordinary inputs with ordinary results,
//! never errors. Nothing is cached: every call walks the anatomy snapshot
//! it was handed, so repeated calls over unchanged state return identical
//! results in identical order.
//!
//! ```
//! use marrow_logic::matching::{can_equip, matching_parts};
//! use marrow_logic::tags::tag_set;
//! use marrow_logic::templates::humanoid;
//!
//! let anatomy = humanoid(30);
//! let required = tag_set(["hand", "grasp"]);
//! assert!(can_equip(&anatomy, &required));
//! let hands = matching_parts(&anatomy, &required);
//! assert_eq!(hands[0].name, "left hand");
//! assert_eq!(hands[1].name, "right hand");
//! ```

use crate::body::{Anatomy, BodyPart};
use crate::tags::TagSet;

/// Whether at least one undestroyed part carries every required tag.
///
/// An empty requirement is satisfied by any undestroyed part, so on a
/// living creature it is always true. Destroyed parts never qualify, no
/// matter what they are tagged.
pub fn can_equip(anatomy: &Anatomy, required: &TagSet) -> bool {
    anatomy
        .parts
        .iter()
        .any(|p| !p.is_destroyed() && p.tags.is_superset(required))
}

/// Every undestroyed part whose tag set contains the required tags, in
/// declared anatomy order.
///
/// The requirement must be met by a single part; tags are never combined
/// across parts. An empty result is the normal "item doesn't fit"
/// answer, not a failure.
pub fn matching_parts<'a>(anatomy: &'a Anatomy, required: &TagSet) -> Vec<&'a BodyPart> {
    anatomy
        .parts
        .iter()
        .filter(|p| !p.is_destroyed() && p.tags.is_superset(required))
        .collect()
}

/// Positional indices of matching parts, in declared anatomy order.
///
/// For consumers that need a stable reference back into
/// [`Anatomy::parts`], such as a loadout tracking which part holds which
/// item.
pub fn matching_indices(anatomy: &Anatomy, required: &TagSet) -> Vec<usize> {
    anatomy
        .parts
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_destroyed() && p.tags.is_superset(required))
        .map(|(i, _)| i)
        .collect()
}
