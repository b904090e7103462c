//! Shared type definitions for the Stargazer olympiad simulation.
//!
//! This crate is the single source of truth for the vocabulary used across
//! the Stargazer workspace: the skill axes, weather, student status, contest
//! tiers, traits, effect descriptors, the read-only catalog template shapes,
//! and the [`Dice`] randomness port.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`enums`] -- Enumeration types (skills, weather, status, tiers, traits)
//! - [`effects`] -- Data-described effects applied by one generic path
//! - [`structs`] -- Catalog templates (training, traits, events, mini-events)
//! - [`dice`] -- The injectable randomness port
//! - [`grade`] -- Letter grade bands for skill values

pub mod dice;
pub mod effects;
pub mod enums;
pub mod grade;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use dice::Dice;
pub use effects::{Condition, Effect, EffectStep, SkillMap, Target, TraitModifier, skill_map};
pub use enums::{Skill, Status, Tier, TraitKind, VarianceProfile, Weather};
pub use grade::grade_for;
pub use ids::StudentId;
pub use structs::{
    AmbientEvent, MiniChoice, MiniEvent, MiniOutcome, TraitTemplate, TrainingTemplate,
};
