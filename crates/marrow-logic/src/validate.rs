//! Construction-time well-formedness checks.
//!
//! The matching queries are total — they never fail, whatever they are
//! handed. That makes construction the one place malformed data must be
//! caught: a template with an empty tag string or an impossible hit point
//! spread would otherwise silently behave as "no match" and hide the bug
//! in the data file. Hosts should validate templates when loading them
//! and anatomies after any hand-built construction.

use crate::body::Anatomy;
use crate::templates::TemplateSpec;

/// A well-formedness violation, carrying the offending value.
#[derive(Debug, Clone, PartialEq)]
pub enum AnatomyError {
    /// Template or anatomy has no parts at all.
    NoParts,
    /// Part at this position has an empty name.
    EmptyPartName(usize),
    /// Named part carries an empty-string tag.
    EmptyTag { part: String },
    /// Named part carries a tag with whitespace in it.
    WhitespaceTag { part: String, tag: String },
    /// Named part has a non-positive maximum.
    NonPositiveMaxHp { part: String, max_hp: i32 },
    /// Named part has negative current hit points.
    NegativeHp { part: String, hp: i32 },
    /// Named part has more hit points than its maximum.
    HpAboveMax { part: String, hp: i32, max_hp: i32 },
    /// Named part's hp share is not a finite value in (0, 1].
    HpRatioOutOfRange { part: String, ratio: f32 },
}

fn check_tags(
    part_name: &str,
    tags: &crate::tags::TagSet,
    errors: &mut Vec<AnatomyError>,
) {
    for tag in tags {
        if tag.is_empty() {
            errors.push(AnatomyError::EmptyTag {
                part: part_name.to_string(),
            });
        } else if tag.chars().any(char::is_whitespace) {
            errors.push(AnatomyError::WhitespaceTag {
                part: part_name.to_string(),
                tag: tag.clone(),
            });
        }
    }
}

fn check_ratio(part_name: &str, ratio: f32, errors: &mut Vec<AnatomyError>) {
    if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
        errors.push(AnatomyError::HpRatioOutOfRange {
            part: part_name.to_string(),
            ratio,
        });
    }
}

/// Validate a constructed anatomy, returning all violations found.
pub fn validate_anatomy(anatomy: &Anatomy) -> Vec<AnatomyError> {
    let mut errors = Vec::new();
    if anatomy.parts.is_empty() {
        errors.push(AnatomyError::NoParts);
    }
    for (i, part) in anatomy.parts.iter().enumerate() {
        if part.name.trim().is_empty() {
            errors.push(AnatomyError::EmptyPartName(i));
        }
        check_tags(&part.name, &part.tags, &mut errors);
        check_ratio(&part.name, part.hp_ratio, &mut errors);
        if part.max_hp <= 0 {
            errors.push(AnatomyError::NonPositiveMaxHp {
                part: part.name.clone(),
                max_hp: part.max_hp,
            });
        }
        if part.hp < 0 {
            errors.push(AnatomyError::NegativeHp {
                part: part.name.clone(),
                hp: part.hp,
            });
        }
        if part.hp > part.max_hp {
            errors.push(AnatomyError::HpAboveMax {
                part: part.name.clone(),
                hp: part.hp,
                max_hp: part.max_hp,
            });
        }
    }
    errors
}

/// Validate a template before building anatomies from it.
pub fn validate_template(spec: &TemplateSpec) -> Vec<AnatomyError> {
    let mut errors = Vec::new();
    if spec.parts.is_empty() {
        errors.push(AnatomyError::NoParts);
    }
    for (i, part) in spec.parts.iter().enumerate() {
        if part.name.trim().is_empty() {
            errors.push(AnatomyError::EmptyPartName(i));
        }
        check_tags(&part.name, &part.tags, &mut errors);
        check_ratio(&part.name, part.hp_ratio, &mut errors);
    }
    errors
}
