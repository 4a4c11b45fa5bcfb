//! Integration tests for the full equip flow.
//!
//! Exercises: template construction → matching queries → loadout
//! assignment → combat damage → dropped items, across fixed and
//! procedural anatomies.

use marrow_logic::body::BodyPartKind;
use marrow_logic::equipment::{standard_items, sword, ItemSpec};
use marrow_logic::loadout::{EquipError, Loadout};
use marrow_logic::matching::{can_equip, matching_parts};
use marrow_logic::tags::{tag_set, TagSet};
use marrow_logic::templates::{arachnid, exotic, humanoid, simple};
use marrow_logic::validate::validate_anatomy;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Helpers ────────────────────────────────────────────────────────────

fn rename(spec: ItemSpec, name: &str) -> ItemSpec {
    ItemSpec {
        name: name.to_string(),
        ..spec
    }
}

// ── Matcher/filter agreement across everything ─────────────────────────

#[test]
fn predicate_matches_filter_across_all_layouts() {
    let mut anatomies = vec![humanoid(30), arachnid(40), simple(20)];
    for seed in 0..10 {
        anatomies.push(exotic(30, &mut StdRng::seed_from_u64(seed)));
    }
    let mut requirements: Vec<TagSet> = standard_items()
        .into_iter()
        .map(|i| i.required_tags)
        .collect();
    requirements.push(TagSet::new());
    requirements.push(tag_set(["no_such_tag"]));

    for anatomy in &anatomies {
        for required in &requirements {
            assert_eq!(
                can_equip(anatomy, required),
                !matching_parts(anatomy, required).is_empty()
            );
        }
    }
}

#[test]
fn empty_requirement_tracks_liveness_of_parts() {
    let mut anatomy = simple(20);
    let empty = TagSet::new();
    assert!(can_equip(&anatomy, &empty));
    anatomy.parts[0].take_damage(20);
    assert!(!can_equip(&anatomy, &empty));
}

// ── Full flow: spawn, arm, fight, drop ─────────────────────────────────

#[test]
fn adventurer_loses_sword_with_hand() {
    let mut anatomy = humanoid(30);
    assert!(validate_anatomy(&anatomy).is_empty());

    let mut loadout = Loadout::new();
    let sword_part = loadout.equip(&anatomy, sword()).unwrap();
    assert_eq!(anatomy.parts[sword_part].name, "left hand");
    assert_eq!(loadout.power_bonus(), 4);

    // Chop through the left hand
    let left_hand_hp = anatomy.part(BodyPartKind::LeftHand).unwrap().hp;
    anatomy.damage_part(BodyPartKind::LeftHand, left_hand_hp);
    assert!(anatomy.part(BodyPartKind::LeftHand).unwrap().is_destroyed());
    assert!(anatomy.is_alive(), "a hand is not vital");

    let dropped = loadout.release_destroyed(&anatomy);
    assert_eq!(dropped.len(), 1);
    assert_eq!(loadout.power_bonus(), 0);

    // Re-equipping goes to the surviving hand
    let new_part = loadout.equip(&anatomy, sword()).unwrap();
    assert_eq!(anatomy.parts[new_part].name, "right hand");

    // Matching agrees: only one hand remains
    let hands = matching_parts(&anatomy, &tag_set(["hand", "grasp"]));
    assert_eq!(hands.len(), 1);
    assert_eq!(hands[0].name, "right hand");
}

#[test]
fn three_armed_creature_wields_three_swords() {
    // Seed chosen to roll a three-armed exotic
    let anatomy = (0..200)
        .map(|seed| exotic(30, &mut StdRng::seed_from_u64(seed)))
        .find(|a| a.grasp_parts().len() == 3)
        .expect("some seed under 200 produces three arms");

    let matches = matching_parts(&anatomy, &tag_set(["hand", "grasp"]));
    assert_eq!(matches.len(), 3);

    let mut loadout = Loadout::new();
    for i in 0..3 {
        loadout
            .equip(&anatomy, rename(sword(), &format!("sword {}", i)))
            .unwrap();
    }
    assert_eq!(
        loadout.equip(&anatomy, rename(sword(), "sword 3")),
        Err(EquipError::AllCandidatesOccupied)
    );
    assert_eq!(loadout.power_bonus(), 12);
}

#[test]
fn full_kit_on_a_humanoid() {
    let anatomy = humanoid(30);
    let mut loadout = Loadout::new();

    // One item per distinct region: weapon, shield, armor, helmet,
    // boots, leggings
    for item in [
        marrow_logic::equipment::sword(),
        marrow_logic::equipment::shield(),
        marrow_logic::equipment::chain_mail(),
        marrow_logic::equipment::helmet(),
        marrow_logic::equipment::boots(),
        marrow_logic::equipment::leggings(),
    ] {
        loadout.equip(&anatomy, item).unwrap();
    }

    assert_eq!(loadout.power_bonus(), 4);
    assert_eq!(loadout.defense_bonus(), 2 + 3 + 1 + 1 + 1);

    // Sword went to the first grasp part, shield to the second
    assert_eq!(anatomy.parts[loadout.part_of("sword").unwrap()].name, "left hand");
    assert_eq!(anatomy.parts[loadout.part_of("shield").unwrap()].name, "right hand");
}

// ── Damage model end to end ────────────────────────────────────────────

#[test]
fn spider_limps_but_survives_leg_loss() {
    let mut anatomy = arachnid(40);
    let leg_kinds = [
        BodyPartKind::FrontLeftLeg,
        BodyPartKind::FrontRightLeg,
        BodyPartKind::SecondLeftLeg,
        BodyPartKind::SecondRightLeg,
    ];
    for kind in leg_kinds {
        let hp = anatomy.part(kind).unwrap().hp;
        anatomy.damage_part(kind, hp);
    }
    assert!(anatomy.is_alive());
    assert!(anatomy.can_move());
    assert!((anatomy.movement_penalty() - 0.5).abs() < f32::EPSILON);
}

#[test]
fn random_combat_eventually_kills() {
    let mut rng = StdRng::seed_from_u64(4242);
    let mut anatomy = humanoid(30);
    let mut swings = 0;
    while anatomy.is_alive() && swings < 10_000 {
        anatomy.damage_random_part(&mut rng, 5);
        swings += 1;
    }
    assert!(!anatomy.is_alive(), "unbounded damage must eventually kill");
    assert!(anatomy.destroyed_parts().iter().any(|p| p.vital));
}

#[test]
fn healing_restores_matching() {
    let mut anatomy = humanoid(30);
    let head_hp = anatomy.part(BodyPartKind::Head).unwrap().hp;
    anatomy.damage_part(BodyPartKind::Head, head_hp);
    assert!(!can_equip(&anatomy, &tag_set(["head"])));

    anatomy.heal_all(head_hp);
    assert!(can_equip(&anatomy, &tag_set(["head"])));
}
