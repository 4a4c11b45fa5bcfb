//! Fixed and procedural anatomy construction.
//!
//! Anatomies are built once, when a creature spawns: either from one of
//! the fixed layouts here (humanoid, arachnid, simple) or procedurally for
//! exotic creatures. Part hit points are carved out of the owner's maximum
//! via each part's `hp_ratio`, so the same layout scales from a goblin to
//! a troll.
//!
//! [`TemplateSpec`] is the data-file form of a layout; the shipped
//! `data/anatomy_manifest.json` holds one spec per fixed layout and the
//! headless harness cross-checks them against these builders.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::body::{Anatomy, AnatomyKind, BodyPart, BodyPartKind};
use crate::tags::{names, tag_set, TagSet};

fn part(
    kind: BodyPartKind,
    name: &str,
    hp_ratio: f32,
    max_hp: i32,
    vital: bool,
    limb: bool,
    protection: i32,
    tags: TagSet,
) -> BodyPart {
    let part_hp = (hp_ratio * max_hp as f32) as i32;
    BodyPart {
        kind,
        name: name.to_string(),
        tags,
        hp_ratio,
        max_hp: part_hp,
        hp: part_hp,
        vital,
        limb,
        protection,
    }
}

/// Standard two-armed, two-legged layout (humans, elves, orcs).
///
/// `max_hp` is the owner's total; each part gets its share. Paired parts
/// share their capability tags but keep side-specific identifier tags so
/// the host can always address "the left hand" exactly.
pub fn humanoid(max_hp: i32) -> Anatomy {
    use BodyPartKind::*;
    let parts = vec![
        part(
            Head,
            "head",
            0.5,
            max_hp,
            true,
            false,
            0,
            tag_set([names::HEAD, names::ARMOR, names::CRANIUM]),
        ),
        part(
            Neck,
            "neck",
            0.267,
            max_hp,
            true,
            false,
            0,
            tag_set([names::NECK, names::ARMOR, names::CRANIUM]),
        ),
        part(
            Torso,
            "torso",
            1.0,
            max_hp,
            true,
            false,
            0,
            tag_set([names::TORSO, names::ARMOR, names::CORE]),
        ),
        part(
            LeftArm,
            "left arm",
            0.4,
            max_hp,
            false,
            true,
            0,
            tag_set([
                names::ARM,
                names::ARMOR,
                names::LEFT,
                names::LEFT_ARM,
                names::UPPER_LIMBS,
            ]),
        ),
        part(
            RightArm,
            "right arm",
            0.4,
            max_hp,
            false,
            true,
            0,
            tag_set([
                names::ARM,
                names::ARMOR,
                names::RIGHT,
                names::RIGHT_ARM,
                names::UPPER_LIMBS,
            ]),
        ),
        part(
            LeftHand,
            "left hand",
            0.167,
            max_hp,
            false,
            true,
            0,
            tag_set([
                names::HAND,
                names::GRASP,
                names::MANIPULATE,
                names::HOLD,
                names::USE,
                names::LEFT,
                names::LEFT_HAND,
                names::UPPER_LIMBS,
            ]),
        ),
        part(
            RightHand,
            "right hand",
            0.167,
            max_hp,
            false,
            true,
            0,
            tag_set([
                names::HAND,
                names::GRASP,
                names::MANIPULATE,
                names::HOLD,
                names::USE,
                names::RIGHT,
                names::RIGHT_HAND,
                names::UPPER_LIMBS,
            ]),
        ),
        part(
            LeftLeg,
            "left leg",
            0.5,
            max_hp,
            false,
            true,
            0,
            tag_set([
                names::LEG,
                names::LOCOMOTION,
                names::LEFT,
                names::LEFT_LEG,
                names::LOWER_LIMBS,
            ]),
        ),
        part(
            RightLeg,
            "right leg",
            0.5,
            max_hp,
            false,
            true,
            0,
            tag_set([
                names::LEG,
                names::LOCOMOTION,
                names::RIGHT,
                names::RIGHT_LEG,
                names::LOWER_LIMBS,
            ]),
        ),
        part(
            LeftFoot,
            "left foot",
            0.2,
            max_hp,
            false,
            true,
            0,
            tag_set([
                names::FOOT,
                names::LOCOMOTION,
                names::ARMOR,
                names::LEFT,
                names::LEFT_FOOT,
                names::LOWER_LIMBS,
            ]),
        ),
        part(
            RightFoot,
            "right foot",
            0.2,
            max_hp,
            false,
            true,
            0,
            tag_set([
                names::FOOT,
                names::LOCOMOTION,
                names::ARMOR,
                names::RIGHT,
                names::RIGHT_FOOT,
                names::LOWER_LIMBS,
            ]),
        ),
    ];
    Anatomy {
        kind: AnatomyKind::Humanoid,
        parts,
    }
}

/// Eight-legged layout (spiders, scorpions).
pub fn arachnid(max_hp: i32) -> Anatomy {
    use BodyPartKind::*;
    let leg = |kind, name: &str, side, ident| {
        part(
            kind,
            name,
            0.4,
            max_hp,
            false,
            true,
            0,
            tag_set([names::LEG, names::LOCOMOTION, side, ident]),
        )
    };
    let parts = vec![
        part(
            Thorax,
            "thorax",
            1.0,
            max_hp,
            true,
            false,
            0,
            tag_set([names::THORAX, names::ARMOR]),
        ),
        leg(FrontLeftLeg, "front left leg", names::LEFT, names::FRONT_LEFT_LEG),
        leg(FrontRightLeg, "front right leg", names::RIGHT, names::FRONT_RIGHT_LEG),
        leg(SecondLeftLeg, "second left leg", names::LEFT, names::SECOND_LEFT_LEG),
        leg(SecondRightLeg, "second right leg", names::RIGHT, names::SECOND_RIGHT_LEG),
        leg(ThirdLeftLeg, "third left leg", names::LEFT, names::THIRD_LEFT_LEG),
        leg(ThirdRightLeg, "third right leg", names::RIGHT, names::THIRD_RIGHT_LEG),
        leg(BackLeftLeg, "back left leg", names::LEFT, names::BACK_LEFT_LEG),
        leg(BackRightLeg, "back right leg", names::RIGHT, names::BACK_RIGHT_LEG),
        part(
            Abdomen,
            "abdomen",
            0.5,
            max_hp,
            true,
            false,
            0,
            tag_set([names::ABDOMEN, names::ARMOR]),
        ),
    ];
    Anatomy {
        kind: AnatomyKind::Arachnid,
        parts,
    }
}

/// Single-bodied layout (slimes, golems). A little natural protection
/// stands in for the missing limbs.
pub fn simple(max_hp: i32) -> Anatomy {
    let parts = vec![part(
        BodyPartKind::Torso,
        "body",
        1.0,
        max_hp,
        true,
        false,
        1,
        tag_set([names::TORSO, names::ARMOR]),
    )];
    Anatomy {
        kind: AnatomyKind::Simple,
        parts,
    }
}

/// Procedural layout for unusual creatures: a vital core and head, then a
/// random spread of grasping arms, legs, and optional tail or wings.
///
/// Deterministic under a seeded rng; the same seed always produces the
/// same creature.
pub fn exotic(max_hp: i32, rng: &mut impl Rng) -> Anatomy {
    use BodyPartKind::*;
    let mut parts = vec![
        part(
            Head,
            "head",
            0.5,
            max_hp,
            true,
            false,
            0,
            tag_set([names::HEAD, names::ARMOR]),
        ),
        part(
            Torso,
            "core",
            1.0,
            max_hp,
            true,
            false,
            0,
            tag_set([names::TORSO, names::CORE, names::ARMOR]),
        ),
    ];

    let arm_count = rng.gen_range(2..=4);
    let arm_names = ["first arm", "second arm", "third arm", "fourth arm"];
    for i in 0..arm_count {
        let kind = if i % 2 == 0 { LeftArm } else { RightArm };
        parts.push(part(
            kind,
            arm_names[i],
            0.3,
            max_hp,
            false,
            true,
            0,
            tag_set([
                names::ARM,
                names::GRASP,
                names::HAND,
                names::MANIPULATE,
                names::HOLD,
                names::USE,
                names::ARMOR,
            ]),
        ));
    }

    let leg_count = rng.gen_range(2..=6);
    let leg_names = [
        "first leg",
        "second leg",
        "third leg",
        "fourth leg",
        "fifth leg",
        "sixth leg",
    ];
    for i in 0..leg_count {
        let kind = if i % 2 == 0 { LeftLeg } else { RightLeg };
        parts.push(part(
            kind,
            leg_names[i],
            0.35,
            max_hp,
            false,
            true,
            0,
            tag_set([names::LEG, names::LOCOMOTION]),
        ));
    }

    if rng.gen_bool(0.3) {
        parts.push(part(
            Tail,
            "tail",
            0.25,
            max_hp,
            false,
            true,
            0,
            tag_set([names::TAIL, names::LOCOMOTION]),
        ));
    }
    if rng.gen_bool(0.2) {
        parts.push(part(
            Wings,
            "wings",
            0.3,
            max_hp,
            false,
            true,
            0,
            tag_set([names::WINGS, names::LOCOMOTION]),
        ));
    }

    Anatomy {
        kind: AnatomyKind::Exotic,
        parts,
    }
}

/// Data-file form of one body part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartSpec {
    pub kind: BodyPartKind,
    pub name: String,
    pub hp_ratio: f32,
    #[serde(default)]
    pub vital: bool,
    #[serde(default)]
    pub limb: bool,
    #[serde(default)]
    pub protection: i32,
    pub tags: TagSet,
}

/// Data-file form of a whole layout, as found in
/// `data/anatomy_manifest.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSpec {
    pub name: String,
    pub kind: AnatomyKind,
    pub parts: Vec<PartSpec>,
}

impl TemplateSpec {
    /// Instantiate an anatomy with the owner's maximum hit points.
    pub fn build(&self, max_hp: i32) -> Anatomy {
        let parts = self
            .parts
            .iter()
            .map(|p| {
                part(
                    p.kind,
                    &p.name,
                    p.hp_ratio,
                    max_hp,
                    p.vital,
                    p.limb,
                    p.protection,
                    p.tags.clone(),
                )
            })
            .collect();
        Anatomy {
            kind: self.kind,
            parts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn humanoid_declared_order() {
        let anatomy = humanoid(30);
        let names: Vec<&str> = anatomy.parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "head",
                "neck",
                "torso",
                "left arm",
                "right arm",
                "left hand",
                "right hand",
                "left leg",
                "right leg",
                "left foot",
                "right foot",
            ]
        );
    }

    #[test]
    fn humanoid_hp_shares() {
        let anatomy = humanoid(100);
        assert_eq!(anatomy.part(BodyPartKind::Head).unwrap().max_hp, 50);
        assert_eq!(anatomy.part(BodyPartKind::Torso).unwrap().max_hp, 100);
        assert_eq!(anatomy.part(BodyPartKind::LeftHand).unwrap().max_hp, 16);
        assert_eq!(anatomy.part(BodyPartKind::LeftFoot).unwrap().max_hp, 20);
    }

    #[test]
    fn humanoid_vitals_and_limbs() {
        let anatomy = humanoid(30);
        let vitals: Vec<&str> = anatomy.vital_parts().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(vitals, vec!["head", "neck", "torso"]);
        assert_eq!(anatomy.limbs().len(), 8);
    }

    #[test]
    fn paired_hands_differ_only_by_side_tags() {
        let anatomy = humanoid(30);
        let left = anatomy.part(BodyPartKind::LeftHand).unwrap();
        let right = anatomy.part(BodyPartKind::RightHand).unwrap();
        assert_ne!(left.tags, right.tags);
        let shared = tag_set([
            names::HAND,
            names::GRASP,
            names::MANIPULATE,
            names::HOLD,
            names::USE,
        ]);
        assert!(left.tags.is_superset(&shared));
        assert!(right.tags.is_superset(&shared));
        assert!(!right.tags.contains(names::LEFT));
        assert!(!left.tags.contains(names::RIGHT));
    }

    #[test]
    fn arachnid_has_eight_working_legs() {
        let anatomy = arachnid(40);
        assert_eq!(anatomy.parts.len(), 10);
        let legs = anatomy
            .parts
            .iter()
            .filter(|p| p.tags.contains(names::LEG))
            .count();
        assert_eq!(legs, 8);
        assert!(anatomy.can_move());
        assert!(!anatomy.can_use_hands());
    }

    #[test]
    fn simple_body_is_vital_and_armored() {
        let anatomy = simple(20);
        assert_eq!(anatomy.parts.len(), 1);
        assert!(anatomy.parts[0].vital);
        assert_eq!(anatomy.parts[0].protection, 1);
        assert_eq!(anatomy.parts[0].max_hp, 20);
    }

    #[test]
    fn exotic_is_deterministic_per_seed() {
        let a = exotic(30, &mut StdRng::seed_from_u64(99));
        let b = exotic(30, &mut StdRng::seed_from_u64(99));
        let names_a: Vec<&str> = a.parts.iter().map(|p| p.name.as_str()).collect();
        let names_b: Vec<&str> = b.parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn exotic_always_viable() {
        for seed in 0..50 {
            let anatomy = exotic(30, &mut StdRng::seed_from_u64(seed));
            assert!(anatomy.is_alive());
            assert!(anatomy.can_move(), "seed {} produced an immobile creature", seed);
            assert!(anatomy.can_use_hands(), "seed {} produced no graspers", seed);
            assert!(anatomy.grasp_parts().len() >= 2);
        }
    }

    #[test]
    fn template_spec_roundtrips_through_json() {
        let spec = TemplateSpec {
            name: "test biped".to_string(),
            kind: AnatomyKind::Humanoid,
            parts: vec![PartSpec {
                kind: BodyPartKind::Torso,
                name: "torso".to_string(),
                hp_ratio: 1.0,
                vital: true,
                limb: false,
                protection: 0,
                tags: tag_set([names::TORSO, names::ARMOR]),
            }],
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: TemplateSpec = serde_json::from_str(&json).unwrap();
        let anatomy = back.build(50);
        assert_eq!(anatomy.parts.len(), 1);
        assert_eq!(anatomy.parts[0].max_hp, 50);
        assert!(anatomy.parts[0].vital);
    }
}
