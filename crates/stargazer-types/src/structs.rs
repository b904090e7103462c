//! Catalog template shapes.
//!
//! These are the read-only inputs the simulation consumes: the training
//! catalog, the trait catalog, the ambient-event catalog, and the contest
//! mini-event catalog. The catalogs themselves live in `stargazer-world`.

use serde::{Deserialize, Serialize};

use crate::effects::{Effect, SkillMap, TraitModifier};
use crate::enums::{TraitKind, Weather};

/// A weekly training activity offered on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingTemplate {
    /// Display name.
    pub name: String,
    /// Funds debited when the activity runs.
    pub cost: i64,
    /// Raw stress delta applied to every active student.
    pub stress: f64,
    /// Per-skill gains (negative entries regress).
    pub gains: SkillMap,
    /// Weather the activity needs, if any.
    #[serde(default)]
    pub weather: Option<Vec<Weather>>,
    /// Trait some active student must hold, if any.
    #[serde(default)]
    pub required_trait: Option<TraitKind>,
    /// Funds credited when the activity runs.
    #[serde(default)]
    pub fund_gain: i64,
}

/// An immutable trait template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitTemplate {
    /// Which trait this template describes.
    pub kind: TraitKind,
    /// Display name.
    pub name: String,
    /// Flavor description.
    pub description: String,
    /// Initialization modifiers, applied once, in order.
    #[serde(default)]
    pub modifiers: Vec<TraitModifier>,
}

/// An ambient weekly event, fired by an independent Bernoulli trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientEvent {
    /// Firing probability in `[0, 1]`.
    pub probability: f64,
    /// Journal text when the event fires.
    pub description: String,
    /// What happens when the event fires.
    pub effect: Effect,
}

/// A narrative mini-event offered during a contest's interactive phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniEvent {
    /// Display name.
    pub name: String,
    /// Branching choices; at least one.
    pub choices: Vec<MiniChoice>,
}

/// One branch of a [`MiniEvent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniChoice {
    /// Display label.
    pub label: String,
    /// Whether socialite participants double this choice's effect.
    #[serde(default)]
    pub social: bool,
    /// Weighted outcomes; one is drawn when the choice is taken.
    pub outcomes: Vec<MiniOutcome>,
}

/// A weighted outcome of a [`MiniChoice`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniOutcome {
    /// Relative weight among the choice's outcomes.
    pub weight: f64,
    /// Journal text when this outcome is drawn.
    pub description: String,
    /// What happens.
    pub effect: Effect,
}
