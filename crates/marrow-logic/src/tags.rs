//! Capability tag sets and shared tag names.
//!
//! A body part advertises what it can do through free-form string tags
//! ("grasp", "locomotion", "armor"). An item demands a set of tags, and a
//! part qualifies when its own set contains every demanded tag. Set
//! containment is the entire contract — there is no slot hierarchy and no
//! special-cased part kinds.

use std::collections::BTreeSet;

/// An unordered set of unique capability tags.
///
/// Backed by a `BTreeSet` so iteration order and the serialized form are
/// deterministic regardless of insertion order.
pub type TagSet = BTreeSet<String>;

/// Build a [`TagSet`] from string literals.
///
/// ```
/// use marrow_logic::tags::tag_set;
///
/// let required = tag_set(["hand", "grasp"]);
/// assert_eq!(required.len(), 2);
/// ```
pub fn tag_set<'a, I>(tags: I) -> TagSet
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter().map(str::to_owned).collect()
}

/// Tag names used by the shipped templates and the standard item catalog.
///
/// Tags are open-ended strings; these constants only keep the built-in
/// data consistent with itself.
pub mod names {
    // Capabilities
    pub const GRASP: &str = "grasp";
    pub const MANIPULATE: &str = "manipulate";
    pub const HOLD: &str = "hold";
    pub const USE: &str = "use";
    pub const LOCOMOTION: &str = "locomotion";
    pub const ARMOR: &str = "armor";

    // Part families
    pub const HEAD: &str = "head";
    pub const CRANIUM: &str = "cranium";
    pub const NECK: &str = "neck";
    pub const TORSO: &str = "torso";
    pub const CORE: &str = "core";
    pub const ARM: &str = "arm";
    pub const HAND: &str = "hand";
    pub const LEG: &str = "leg";
    pub const FOOT: &str = "foot";
    pub const THORAX: &str = "thorax";
    pub const ABDOMEN: &str = "abdomen";
    pub const TAIL: &str = "tail";
    pub const WINGS: &str = "wings";

    // Laterality and limb groups
    pub const LEFT: &str = "left";
    pub const RIGHT: &str = "right";
    pub const UPPER_LIMBS: &str = "upper_limbs";
    pub const LOWER_LIMBS: &str = "lower_limbs";

    // Per-part identifiers, so paired parts stay distinguishable
    pub const LEFT_ARM: &str = "left_arm";
    pub const RIGHT_ARM: &str = "right_arm";
    pub const LEFT_HAND: &str = "left_hand";
    pub const RIGHT_HAND: &str = "right_hand";
    pub const LEFT_LEG: &str = "left_leg";
    pub const RIGHT_LEG: &str = "right_leg";
    pub const LEFT_FOOT: &str = "left_foot";
    pub const RIGHT_FOOT: &str = "right_foot";
    pub const FRONT_LEFT_LEG: &str = "front_left_leg";
    pub const FRONT_RIGHT_LEG: &str = "front_right_leg";
    pub const SECOND_LEFT_LEG: &str = "second_left_leg";
    pub const SECOND_RIGHT_LEG: &str = "second_right_leg";
    pub const THIRD_LEFT_LEG: &str = "third_left_leg";
    pub const THIRD_RIGHT_LEG: &str = "third_right_leg";
    pub const BACK_LEFT_LEG: &str = "back_left_leg";
    pub const BACK_RIGHT_LEG: &str = "back_right_leg";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_set_deduplicates() {
        let t = tag_set(["hand", "grasp", "hand"]);
        assert_eq!(t.len(), 2);
        assert!(t.contains("hand"));
        assert!(t.contains("grasp"));
    }

    #[test]
    fn tag_set_superset_semantics() {
        let part = tag_set(["hand", "grasp", "manipulate", "hold", "use"]);
        let required = tag_set(["hand", "grasp"]);
        assert!(part.is_superset(&required));
        assert!(!required.is_superset(&part));
    }

    #[test]
    fn empty_set_is_subset_of_everything() {
        let part = tag_set(["hand"]);
        let empty = TagSet::new();
        assert!(part.is_superset(&empty));
        // And of another empty set
        assert!(TagSet::new().is_superset(&empty));
    }

    #[test]
    fn iteration_order_is_sorted() {
        let t = tag_set(["use", "grasp", "hand"]);
        let collected: Vec<_> = t.iter().map(String::as_str).collect();
        assert_eq!(collected, vec!["grasp", "hand", "use"]);
    }
}
