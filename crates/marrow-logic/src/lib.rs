//! Pure anatomy and equipment logic for Marrow.
//!
//! This crate contains all body-plan logic that is independent of any
//! engine, renderer, or runtime. Functions take plain data and return
//! results, making them unit-testable and portable across the game client
//! and native CLI tools.
//!
//! Creatures are described by an [`body::Anatomy`] — an ordered list of
//! body parts, each carrying a set of capability tags. Items demand a set
//! of tags; whether and where an item can be equipped is a pure
//! containment query over those sets ([`matching`]), with no fixed slot
//! enumeration anywhere.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`body`] | Body parts, wound levels, and the anatomy damage model |
//! | [`equipment`] | Item specs, equip kinds, the standard item catalog |
//! | [`loadout`] | Item→part assignment built on top of matching |
//! | [`matching`] | Tag-containment equip queries over an anatomy |
//! | [`tags`] | Capability tag sets and shared tag names |
//! | [`templates`] | Fixed and procedural anatomy construction |
//! | [`validate`] | Construction-time well-formedness checks |

pub mod body;
pub mod equipment;
pub mod loadout;
pub mod matching;
pub mod tags;
pub mod templates;
pub mod validate;
