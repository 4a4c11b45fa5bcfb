//! Marrow Headless Validation Harness
//!
//! Validates anatomy and equipment logic and the shipped template data
//! without the engine. Runs entirely in-process — no rendering, no input,
//! no game loop.
//!
//! Usage:
//!   cargo run -p marrow-simtest
//!   cargo run -p marrow-simtest -- --verbose

use marrow_logic::body::BodyPartKind;
use marrow_logic::equipment::{self, standard_items};
use marrow_logic::loadout::{EquipError, Loadout};
use marrow_logic::matching::{can_equip, matching_parts};
use marrow_logic::tags::{tag_set, TagSet};
use marrow_logic::templates::{arachnid, exotic, humanoid, simple, TemplateSpec};
use marrow_logic::validate::{validate_anatomy, validate_template};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Anatomy manifest (same JSON the game data uses) ─────────────────────
const MANIFEST_JSON: &str = include_str!("../../../data/anatomy_manifest.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Marrow Anatomy & Equipment Harness ===\n");

    let mut results = Vec::new();

    // 1. Anatomy manifest validation
    results.extend(validate_manifest(verbose));

    // 2. Template construction invariants
    results.extend(validate_templates(verbose));

    // 3. Matching query sweep
    results.extend(validate_matching(verbose));

    // 4. Loadout behaviors
    results.extend(validate_loadout(verbose));

    // 5. Damage model
    results.extend(validate_damage_model(verbose));

    // 6. Item catalog
    results.extend(validate_catalog(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Anatomy Manifest ─────────────────────────────────────────────────

fn validate_manifest(verbose: bool) -> Vec<TestResult> {
    println!("--- Anatomy Manifest ---");
    let mut results = Vec::new();

    let manifest: Vec<TemplateSpec> = match serde_json::from_str(MANIFEST_JSON) {
        Ok(m) => m,
        Err(e) => {
            results.push(TestResult {
                name: "manifest_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "manifest_not_empty".into(),
        passed: manifest.len() >= 3,
        detail: format!("{} templates loaded", manifest.len()),
    });

    // Every template well-formed
    let mut bad = Vec::new();
    for spec in &manifest {
        let errors = validate_template(spec);
        if !errors.is_empty() {
            bad.push(format!("{} ({} errors)", spec.name, errors.len()));
        }
    }
    results.push(TestResult {
        name: "manifest_templates_valid".into(),
        passed: bad.is_empty(),
        detail: if bad.is_empty() {
            "all templates pass validation".into()
        } else {
            format!("invalid: {}", bad.join(", "))
        },
    });

    // Key layouts exist
    let has_humanoid = manifest.iter().any(|t| t.name == "humanoid");
    let has_arachnid = manifest.iter().any(|t| t.name == "arachnid");
    let has_simple = manifest.iter().any(|t| t.name == "simple");
    results.push(TestResult {
        name: "manifest_key_layouts".into(),
        passed: has_humanoid && has_arachnid && has_simple,
        detail: format!(
            "humanoid={} arachnid={} simple={}",
            has_humanoid, has_arachnid, has_simple
        ),
    });

    // Manifest agrees with the built-in constructors
    let built = [
        ("humanoid", humanoid(30)),
        ("arachnid", arachnid(30)),
        ("simple", simple(30)),
    ];
    let mut mismatched = Vec::new();
    for (name, builtin) in &built {
        if let Some(spec) = manifest.iter().find(|t| &t.name == name) {
            let from_data = spec.build(30);
            let same = from_data.parts.len() == builtin.parts.len()
                && from_data
                    .parts
                    .iter()
                    .zip(builtin.parts.iter())
                    .all(|(a, b)| a.name == b.name && a.tags == b.tags && a.vital == b.vital);
            if !same {
                mismatched.push(*name);
            }
        }
    }
    results.push(TestResult {
        name: "manifest_matches_builtins".into(),
        passed: mismatched.is_empty(),
        detail: if mismatched.is_empty() {
            "data templates agree with built-in constructors".into()
        } else {
            format!("diverged: {}", mismatched.join(", "))
        },
    });

    if verbose {
        println!("  Templates:");
        for spec in &manifest {
            println!("    {:10} {} parts", spec.name, spec.parts.len());
        }
    }

    results
}

// ── 2. Template Construction ────────────────────────────────────────────

fn validate_templates(verbose: bool) -> Vec<TestResult> {
    println!("--- Template Construction ---");
    let mut results = Vec::new();

    let h = humanoid(100);
    results.push(TestResult {
        name: "humanoid_shape".into(),
        passed: h.parts.len() == 11 && h.vital_parts().len() == 3 && h.limbs().len() == 8,
        detail: format!(
            "{} parts, {} vital, {} limbs",
            h.parts.len(),
            h.vital_parts().len(),
            h.limbs().len()
        ),
    });

    results.push(TestResult {
        name: "humanoid_hp_shares".into(),
        passed: h.part(BodyPartKind::Torso).map(|p| p.max_hp) == Some(100)
            && h.part(BodyPartKind::Head).map(|p| p.max_hp) == Some(50)
            && h.part(BodyPartKind::LeftHand).map(|p| p.max_hp) == Some(16),
        detail: "torso=100 head=50 hand=16 at max_hp=100".into(),
    });

    let a = arachnid(40);
    results.push(TestResult {
        name: "arachnid_shape".into(),
        passed: a.parts.len() == 10 && a.vital_parts().len() == 2 && !a.can_use_hands(),
        detail: format!(
            "{} parts, {} vital, graspers={}",
            a.parts.len(),
            a.vital_parts().len(),
            a.grasp_parts().len()
        ),
    });

    let s = simple(20);
    results.push(TestResult {
        name: "simple_shape".into(),
        passed: s.parts.len() == 1 && s.parts[0].vital && s.parts[0].protection == 1,
        detail: "one vital armored body".into(),
    });

    // Procedural layouts: valid and viable across many seeds
    let mut invalid = 0;
    let mut immobile = 0;
    let mut graspless = 0;
    for seed in 0..100 {
        let e = exotic(30, &mut StdRng::seed_from_u64(seed));
        if !validate_anatomy(&e).is_empty() {
            invalid += 1;
        }
        if !e.can_move() {
            immobile += 1;
        }
        if !e.can_use_hands() {
            graspless += 1;
        }
    }
    results.push(TestResult {
        name: "exotic_100_seeds_viable".into(),
        passed: invalid == 0 && immobile == 0 && graspless == 0,
        detail: format!(
            "invalid={} immobile={} graspless={}",
            invalid, immobile, graspless
        ),
    });

    // Determinism under a fixed seed
    let e1 = exotic(30, &mut StdRng::seed_from_u64(7));
    let e2 = exotic(30, &mut StdRng::seed_from_u64(7));
    let same = e1.parts.len() == e2.parts.len()
        && e1
            .parts
            .iter()
            .zip(e2.parts.iter())
            .all(|(x, y)| x.name == y.name && x.tags == y.tags);
    results.push(TestResult {
        name: "exotic_deterministic".into(),
        passed: same,
        detail: format!("seed 7 → {} parts twice", e1.parts.len()),
    });

    if verbose {
        let e = exotic(30, &mut StdRng::seed_from_u64(7));
        println!("  Exotic (seed 7):");
        for p in &e.parts {
            println!("    {:12} {:?}", p.name, p.tags);
        }
    }

    results
}

// ── 3. Matching Queries ─────────────────────────────────────────────────

fn validate_matching(_verbose: bool) -> Vec<TestResult> {
    println!("--- Matching Queries ---");
    let mut results = Vec::new();

    let anatomy = humanoid(30);

    // Both hands match a grasp requirement, declared order preserved
    let hands = matching_parts(&anatomy, &tag_set(["hand", "grasp"]));
    let hand_names: Vec<&str> = hands.iter().map(|p| p.name.as_str()).collect();
    results.push(TestResult {
        name: "match_hands_in_order".into(),
        passed: hand_names == ["left hand", "right hand"],
        detail: format!("{{hand, grasp}} → {:?}", hand_names),
    });

    // Head requirement matches exactly the head
    let heads = matching_parts(&anatomy, &tag_set(["head"]));
    results.push(TestResult {
        name: "match_head_only".into(),
        passed: heads.len() == 1 && heads[0].name == "head",
        detail: format!("{{head}} → {} part(s)", heads.len()),
    });

    // Unknown tag: empty result and false, not an error
    let fins = matching_parts(&anatomy, &tag_set(["fin"]));
    results.push(TestResult {
        name: "match_unknown_tag_empty".into(),
        passed: fins.is_empty() && !can_equip(&anatomy, &tag_set(["fin"])),
        detail: "{fin} → no parts, can_equip=false".into(),
    });

    // Empty requirement satisfied by any living creature
    results.push(TestResult {
        name: "match_empty_requirement".into(),
        passed: can_equip(&anatomy, &TagSet::new()),
        detail: "{} fits any undestroyed part".into(),
    });

    // Predicate/filter agreement across the whole catalog
    let mut agree = true;
    for item in standard_items() {
        if can_equip(&anatomy, &item.required_tags)
            != !matching_parts(&anatomy, &item.required_tags).is_empty()
        {
            agree = false;
        }
    }
    results.push(TestResult {
        name: "match_predicate_filter_agree".into(),
        passed: agree,
        detail: "can_equip == (matching_parts non-empty) for all items".into(),
    });

    // Destroying the left hand leaves only the right
    let mut hurt = humanoid(30);
    if let Some(p) = hurt.part_mut(BodyPartKind::LeftHand) {
        p.hp = 0;
    }
    let remaining = matching_parts(&hurt, &tag_set(["hand", "grasp"]));
    results.push(TestResult {
        name: "match_excludes_destroyed".into(),
        passed: remaining.len() == 1 && remaining[0].name == "right hand",
        detail: format!("left hand destroyed → {:?} remains", remaining
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()),
    });

    results
}

// ── 4. Loadout ──────────────────────────────────────────────────────────

fn validate_loadout(_verbose: bool) -> Vec<TestResult> {
    println!("--- Loadout ---");
    let mut results = Vec::new();

    let anatomy = humanoid(30);
    let mut loadout = Loadout::new();

    // Two swords land on left then right hand
    let mut sword_a = equipment::sword();
    sword_a.name = "sword a".into();
    let mut sword_b = equipment::sword();
    sword_b.name = "sword b".into();
    let first = loadout.equip(&anatomy, sword_a);
    let second = loadout.equip(&anatomy, sword_b);
    let placed = match (first, second) {
        (Ok(a), Ok(b)) => {
            anatomy.parts[a].name == "left hand" && anatomy.parts[b].name == "right hand"
        }
        _ => false,
    };
    results.push(TestResult {
        name: "loadout_two_swords".into(),
        passed: placed,
        detail: "first free part in declared order".into(),
    });

    // Third grasp item refused with occupied, not no-match
    let mut sword_c = equipment::sword();
    sword_c.name = "sword c".into();
    results.push(TestResult {
        name: "loadout_occupied_refusal".into(),
        passed: loadout.equip(&anatomy, sword_c) == Err(EquipError::AllCandidatesOccupied),
        detail: "both hands taken → AllCandidatesOccupied".into(),
    });

    // Full kit bonuses
    let mut kitted = Loadout::new();
    for item in [
        equipment::sword(),
        equipment::shield(),
        equipment::chain_mail(),
        equipment::helmet(),
        equipment::boots(),
    ] {
        let _ = kitted.equip(&anatomy, item);
    }
    results.push(TestResult {
        name: "loadout_bonus_sums".into(),
        passed: kitted.power_bonus() == 4 && kitted.defense_bonus() == 7,
        detail: format!(
            "power={} defense={}",
            kitted.power_bonus(),
            kitted.defense_bonus()
        ),
    });

    // Destroyed part drops its item
    let mut wounded = humanoid(30);
    let mut holder = Loadout::new();
    let _ = holder.equip(&wounded, equipment::sword());
    if let Some(p) = wounded.part_mut(BodyPartKind::LeftHand) {
        p.hp = 0;
    }
    let dropped = holder.release_destroyed(&wounded);
    results.push(TestResult {
        name: "loadout_drop_on_destruction".into(),
        passed: dropped.len() == 1 && !holder.is_equipped("sword"),
        detail: format!("{} item(s) dropped", dropped.len()),
    });

    // A slime can wear armor but never wield
    let slime = simple(20);
    let mut slime_loadout = Loadout::new();
    let armor_ok = slime_loadout.equip(&slime, equipment::leather_armor()).is_ok();
    let sword_err = slime_loadout.equip(&slime, equipment::sword());
    results.push(TestResult {
        name: "loadout_slime_limits".into(),
        passed: armor_ok && sword_err == Err(EquipError::NoMatchingPart),
        detail: "armor fits the body, sword has no grasp part".into(),
    });

    results
}

// ── 5. Damage Model ─────────────────────────────────────────────────────

fn validate_damage_model(_verbose: bool) -> Vec<TestResult> {
    println!("--- Damage Model ---");
    let mut results = Vec::new();

    // Wound tier progression on one part
    let mut anatomy = humanoid(100);
    let torso_max = anatomy.part(BodyPartKind::Torso).map(|p| p.max_hp).unwrap_or(0);
    let mut tiers = Vec::new();
    for _ in 0..5 {
        if let Some(p) = anatomy.part_mut(BodyPartKind::Torso) {
            p.take_damage(torso_max / 5);
            tiers.push(p.wound_level().label());
        }
    }
    results.push(TestResult {
        name: "damage_tier_progression".into(),
        passed: tiers
            == vec![
                "damaged",
                "wounded",
                "badly wounded",
                "severely wounded",
                "destroyed",
            ],
        detail: format!("{:?}", tiers),
    });

    // Vital destruction kills; limb destruction doesn't
    let mut fighter = humanoid(30);
    let hand_hp = fighter.part(BodyPartKind::LeftHand).map(|p| p.hp).unwrap_or(0);
    fighter.damage_part(BodyPartKind::LeftHand, hand_hp);
    let alive_after_hand = fighter.is_alive();
    let head_hp = fighter.part(BodyPartKind::Head).map(|p| p.hp).unwrap_or(0);
    fighter.damage_part(BodyPartKind::Head, head_hp);
    results.push(TestResult {
        name: "damage_vital_vs_limb".into(),
        passed: alive_after_hand && !fighter.is_alive(),
        detail: "hand loss survivable, head loss fatal".into(),
    });

    // Weighted random damage never hits destroyed parts
    let mut rng = StdRng::seed_from_u64(11);
    let mut target = humanoid(30);
    let mut hit_destroyed = false;
    for _ in 0..500 {
        let destroyed_before: Vec<usize> = target
            .parts
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_destroyed())
            .map(|(i, _)| i)
            .collect();
        match target.damage_random_part(&mut rng, 3) {
            Some(hit) if destroyed_before.contains(&hit) => hit_destroyed = true,
            Some(_) => {}
            None => break,
        }
    }
    results.push(TestResult {
        name: "damage_random_skips_destroyed".into(),
        passed: !hit_destroyed,
        detail: "500 weighted hits, none on destroyed parts".into(),
    });

    // Rescaling preserves damage fractions
    let mut grown = humanoid(100);
    if let Some(p) = grown.part_mut(BodyPartKind::Torso) {
        p.take_damage(50);
    }
    grown.rescale_max_hp(200);
    let torso = grown.part(BodyPartKind::Torso);
    results.push(TestResult {
        name: "damage_rescale_fractions".into(),
        passed: torso.map(|p| p.max_hp) == Some(200) && torso.map(|p| p.hp) == Some(100),
        detail: "50% wounded torso stays 50% after growth".into(),
    });

    // Movement and manipulation penalties
    let mut crawler = humanoid(30);
    for kind in [BodyPartKind::LeftLeg, BodyPartKind::RightLeg] {
        let hp = crawler.part(kind).map(|p| p.hp).unwrap_or(0);
        crawler.damage_part(kind, hp);
    }
    results.push(TestResult {
        name: "damage_leg_loss_penalty".into(),
        passed: crawler.can_move() && (crawler.movement_penalty() - 0.5).abs() < 1e-6,
        detail: format!(
            "legs gone, feet intact → penalty {:.2}",
            crawler.movement_penalty()
        ),
    });

    results
}

// ── 6. Item Catalog ─────────────────────────────────────────────────────

fn validate_catalog(verbose: bool) -> Vec<TestResult> {
    println!("--- Item Catalog ---");
    let mut results = Vec::new();

    let items = standard_items();
    results.push(TestResult {
        name: "catalog_count".into(),
        passed: items.len() == 11,
        detail: format!("{} items", items.len()),
    });

    let all_named = items.iter().all(|i| !i.name.is_empty());
    let all_nonneg = items
        .iter()
        .all(|i| i.power_bonus >= 0 && i.defense_bonus >= 0);
    results.push(TestResult {
        name: "catalog_well_formed".into(),
        passed: all_named && all_nonneg,
        detail: "names non-empty, bonuses non-negative".into(),
    });

    let anatomy = humanoid(30);
    let unfit: Vec<&str> = items
        .iter()
        .filter(|i| !can_equip(&anatomy, &i.required_tags))
        .map(|i| i.name.as_str())
        .collect();
    results.push(TestResult {
        name: "catalog_fits_humanoid".into(),
        passed: unfit.is_empty(),
        detail: if unfit.is_empty() {
            "every item fits an intact humanoid".into()
        } else {
            format!("unfit: {}", unfit.join(", "))
        },
    });

    if verbose {
        println!("  Catalog:");
        for item in &items {
            let targets: Vec<&str> = matching_parts(&anatomy, &item.required_tags)
                .iter()
                .map(|p| p.name.as_str())
                .collect();
            println!(
                "    {:14} requires {:?} → {:?}",
                item.name, item.required_tags, targets
            );
        }
    }

    results
}
