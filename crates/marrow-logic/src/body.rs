//! Body parts, wound levels, and the anatomy damage model.
//!
//! An [`Anatomy`] is an *ordered* list of [`BodyPart`]s belonging to one
//! creature. Declared order is meaningful: every query over an anatomy
//! reports parts in this order, so "first available part" is well-defined
//! for equip resolution.
//!
//! Parts are built once (see [`crate::templates`]) and after that only the
//! damage model mutates them — hit points go down and up, and a part whose
//! hit points reach zero counts as destroyed. Tag sets never change after
//! construction.

use serde::{Deserialize, Serialize};

use crate::tags::{names, TagSet};
use rand::Rng;

/// Anatomical role of a part. Kinds may repeat within one anatomy
/// (procedural creatures can have several arms of the same kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPartKind {
    Head,
    Neck,
    Torso,
    LeftArm,
    RightArm,
    LeftHand,
    RightHand,
    LeftLeg,
    RightLeg,
    LeftFoot,
    RightFoot,
    FrontLeftLeg,
    FrontRightLeg,
    SecondLeftLeg,
    SecondRightLeg,
    ThirdLeftLeg,
    ThirdRightLeg,
    BackLeftLeg,
    BackRightLeg,
    Tail,
    Wings,
    Thorax,
    Abdomen,
}

/// The anatomy layout a creature was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnatomyKind {
    Humanoid,
    Arachnid,
    /// Single-bodied creatures (slimes, golems).
    Simple,
    /// Procedurally generated layouts.
    Exotic,
}

/// Wound tiers derived from a part's remaining hit point fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WoundLevel {
    Healthy,
    /// Remaining fraction above 0.75.
    Damaged,
    /// Remaining fraction above 0.5.
    Wounded,
    /// Remaining fraction above 0.25.
    BadlyWounded,
    /// Remaining fraction above 0.
    SeverelyWounded,
    Destroyed,
}

impl WoundLevel {
    /// Classify by remaining hit point fraction (1.0 = unhurt, 0.0 = gone).
    pub fn from_remaining(fraction: f32) -> Self {
        if fraction >= 1.0 {
            Self::Healthy
        } else if fraction > 0.75 {
            Self::Damaged
        } else if fraction > 0.5 {
            Self::Wounded
        } else if fraction > 0.25 {
            Self::BadlyWounded
        } else if fraction > 0.0 {
            Self::SeverelyWounded
        } else {
            Self::Destroyed
        }
    }

    /// Message-log label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Damaged => "damaged",
            Self::Wounded => "wounded",
            Self::BadlyWounded => "badly wounded",
            Self::SeverelyWounded => "severely wounded",
            Self::Destroyed => "destroyed",
        }
    }
}

/// One body part: identity, capability tags, and physical attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPart {
    pub kind: BodyPartKind,
    /// Display name ("left hand", "thorax").
    pub name: String,
    /// Capability tags. Fixed after construction.
    pub tags: TagSet,
    /// This part's share of the owner's maximum hit points.
    pub hp_ratio: f32,
    pub max_hp: i32,
    pub hp: i32,
    /// Owner dies when a vital part is destroyed.
    pub vital: bool,
    /// Limbs can be severed or disabled.
    pub limb: bool,
    /// Natural armor.
    pub protection: i32,
}

impl BodyPart {
    /// A destroyed part is permanently out: it can't equip, can't act,
    /// and kills its owner if it was vital.
    pub fn is_destroyed(&self) -> bool {
        self.hp <= 0
    }

    pub fn is_damaged(&self) -> bool {
        self.hp < self.max_hp
    }

    /// Remaining hit points as a fraction of maximum (0.0–1.0).
    pub fn remaining_fraction(&self) -> f32 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        self.hp as f32 / self.max_hp as f32
    }

    pub fn wound_level(&self) -> WoundLevel {
        WoundLevel::from_remaining(self.remaining_fraction())
    }

    /// Deal damage to this part. Returns the damage actually applied
    /// (never takes hit points below zero).
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let dealt = amount.min(self.hp).max(0);
        self.hp -= dealt;
        dealt
    }

    /// Heal this part. Returns the healing actually applied (never takes
    /// hit points above maximum).
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.min(self.max_hp - self.hp).max(0);
        self.hp += healed;
        healed
    }
}

/// A creature's full ordered collection of body parts.
///
/// Declared part order is the canonical order for every query result; it
/// never depends on tag counts or alphabetical sorting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anatomy {
    pub kind: AnatomyKind,
    pub parts: Vec<BodyPart>,
}

impl Anatomy {
    /// First declared part of the given kind, if any.
    pub fn part(&self, kind: BodyPartKind) -> Option<&BodyPart> {
        self.parts.iter().find(|p| p.kind == kind)
    }

    pub fn part_mut(&mut self, kind: BodyPartKind) -> Option<&mut BodyPart> {
        self.parts.iter_mut().find(|p| p.kind == kind)
    }

    pub fn vital_parts(&self) -> Vec<&BodyPart> {
        self.parts.iter().filter(|p| p.vital).collect()
    }

    pub fn limbs(&self) -> Vec<&BodyPart> {
        self.parts.iter().filter(|p| p.limb).collect()
    }

    pub fn damaged_parts(&self) -> Vec<&BodyPart> {
        self.parts.iter().filter(|p| p.is_damaged()).collect()
    }

    pub fn destroyed_parts(&self) -> Vec<&BodyPart> {
        self.parts.iter().filter(|p| p.is_destroyed()).collect()
    }

    /// Undestroyed parts that can grasp (weapon hands, tentacles, claws).
    pub fn grasp_parts(&self) -> Vec<&BodyPart> {
        self.parts
            .iter()
            .filter(|p| !p.is_destroyed() && p.tags.contains(names::GRASP))
            .collect()
    }

    /// Alive means no vital part has been destroyed.
    pub fn is_alive(&self) -> bool {
        self.parts.iter().all(|p| !p.vital || !p.is_destroyed())
    }

    /// Whether the creature can still move.
    ///
    /// Creatures with locomotion-tagged parts need at least one of them
    /// working. Creatures without any (slimes) move as long as they live.
    pub fn can_move(&self) -> bool {
        let mut has_locomotion = false;
        for p in &self.parts {
            if p.tags.contains(names::LOCOMOTION) {
                has_locomotion = true;
                if !p.is_destroyed() {
                    return true;
                }
            }
        }
        if has_locomotion {
            false
        } else {
            self.is_alive()
        }
    }

    /// Whether the creature has a working grasp part.
    pub fn can_use_hands(&self) -> bool {
        !self.grasp_parts().is_empty()
    }

    /// Movement slowdown from destroyed locomotion parts.
    ///
    /// 0.0 = unimpaired, 1.0 = immobile. Creatures without locomotion
    /// parts degrade with overall body damage instead.
    pub fn movement_penalty(&self) -> f32 {
        let locomotion: Vec<&BodyPart> = self
            .parts
            .iter()
            .filter(|p| p.tags.contains(names::LOCOMOTION))
            .collect();
        if locomotion.is_empty() {
            let max_total: i32 = self.parts.iter().map(|p| p.max_hp).sum();
            if max_total <= 0 {
                return 0.0;
            }
            let total: i32 = self.parts.iter().map(|p| p.hp).sum();
            return 1.0 - total as f32 / max_total as f32;
        }
        let working = locomotion.iter().filter(|p| !p.is_destroyed()).count();
        1.0 - working as f32 / locomotion.len() as f32
    }

    /// Fine-manipulation impairment from destroyed manipulator parts.
    ///
    /// 0.0 = unimpaired, 1.0 = cannot manipulate. Creatures without
    /// manipulator parts are never impaired this way.
    pub fn manipulation_penalty(&self) -> f32 {
        let manipulators: Vec<&BodyPart> = self
            .parts
            .iter()
            .filter(|p| p.tags.contains(names::MANIPULATE))
            .collect();
        if manipulators.is_empty() {
            return 0.0;
        }
        let working = manipulators.iter().filter(|p| !p.is_destroyed()).count();
        1.0 - working as f32 / manipulators.len() as f32
    }

    /// Damage the first declared part of `kind`. Returns the damage dealt,
    /// or `None` if no such part exists or it is already destroyed.
    pub fn damage_part(&mut self, kind: BodyPartKind, amount: i32) -> Option<i32> {
        let part = self.part_mut(kind)?;
        if part.is_destroyed() {
            return None;
        }
        Some(part.take_damage(amount))
    }

    /// Heal every part equally. Returns total healing applied.
    pub fn heal_all(&mut self, amount: i32) -> i32 {
        self.parts.iter_mut().map(|p| p.heal(amount)).sum()
    }

    /// Pick a uniformly random part.
    pub fn random_part(&self, rng: &mut impl Rng) -> Option<&BodyPart> {
        if self.parts.is_empty() {
            return None;
        }
        Some(&self.parts[rng.gen_range(0..self.parts.len())])
    }

    /// Damage a random undestroyed part, weighted by part size — larger
    /// parts are easier to hit. Returns the index of the part hit, or
    /// `None` if every part is already destroyed.
    pub fn damage_random_part(&mut self, rng: &mut impl Rng, amount: i32) -> Option<usize> {
        let candidates: Vec<(usize, f32)> = self
            .parts
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_destroyed())
            .map(|(i, p)| (i, p.hp_ratio.max(0.05)))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        let total: f32 = candidates.iter().map(|(_, w)| w).sum();
        let mut roll = rng.gen_range(0.0..total);
        let mut chosen = candidates[candidates.len() - 1].0;
        for (i, w) in &candidates {
            if roll < *w {
                chosen = *i;
                break;
            }
            roll -= w;
        }
        self.parts[chosen].take_damage(amount);
        Some(chosen)
    }

    /// Change the owner's maximum hit points, redistributing each part's
    /// maximum from its `hp_ratio` while preserving its current damage
    /// fraction.
    pub fn rescale_max_hp(&mut self, new_max: i32) {
        for part in &mut self.parts {
            let fraction = if part.max_hp > 0 {
                part.hp as f32 / part.max_hp as f32
            } else {
                1.0
            };
            part.max_hp = (part.hp_ratio * new_max as f32) as i32;
            part.hp = ((part.max_hp as f32 * fraction) as i32).min(part.max_hp);
        }
    }

    /// Per-part wound lines for the host's message log. Healthy parts are
    /// omitted; a fully healthy body yields a single summary line.
    pub fn status_report(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .parts
            .iter()
            .filter(|p| p.is_damaged())
            .map(|p| format!("{}: {}", p.name, p.wound_level().label()))
            .collect();
        if lines.is_empty() {
            lines.push("all body parts are healthy".to_string());
        }
        lines
    }
}
