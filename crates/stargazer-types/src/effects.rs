//! Data-described effects.
//!
//! Trait initialization, ambient events, and contest mini-events never carry
//! behavior of their own. They carry descriptors from this module, and one
//! generic application path (in `stargazer-roster` for trait modifiers, in
//! `stargazer-core` for effects) interprets them. An [`Effect`] is an
//! ordered list of independent steps; when it fires, every step runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{Skill, Tier, TraitKind, Weather};

/// Per-skill real-valued deltas or gains.
pub type SkillMap = BTreeMap<Skill, f64>;

/// Build a [`SkillMap`] from `(skill, value)` pairs.
pub fn skill_map<const N: usize>(pairs: [(Skill, f64); N]) -> SkillMap {
    pairs.into_iter().collect()
}

/// Which students a step applies to. Withdrawn students are never targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Every active participant.
    Everyone,
    /// Only active participants holding the trait.
    Holding(TraitKind),
}

/// An ambient precondition for an effect to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// The current weather is one of the listed values.
    WeatherIn(Vec<Weather>),
    /// At least one active student holds the trait.
    RosterHas(TraitKind),
    /// The effect runs inside one of the listed contest tiers.
    TierIn(Vec<Tier>),
}

/// One independent transition step of an [`Effect`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectStep {
    /// Permanent skill change, scaled by each student's learning rate.
    /// Positive entries train, negative entries regress.
    Skills {
        /// Who is affected.
        target: Target,
        /// Per-skill deltas.
        deltas: SkillMap,
    },
    /// Temporary contest bonus, cleared when the next tier begins.
    Boost {
        /// Who is affected.
        target: Target,
        /// Per-skill additive bonuses.
        deltas: SkillMap,
    },
    /// Stress change, scaled by each student's sensitivity.
    Stress {
        /// Who is affected.
        target: Target,
        /// Raw stress delta.
        amount: f64,
    },
    /// Stress change scaled by sensitivity but never by the effect's
    /// social factor.
    FixedStress {
        /// Who is affected.
        target: Target,
        /// Raw stress delta.
        amount: f64,
    },
    /// Direct ledger adjustment.
    Funds {
        /// Signed amount credited (positive) or debited (negative).
        amount: i64,
    },
}

/// An ordered, all-or-nothing list of steps with an optional guard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// When present and not satisfied, `fallback` runs instead of `steps`.
    #[serde(default)]
    pub condition: Option<Condition>,
    /// Steps executed in order when the effect applies.
    pub steps: Vec<EffectStep>,
    /// Steps executed in order when the condition is not satisfied.
    #[serde(default)]
    pub fallback: Vec<EffectStep>,
}

impl Effect {
    /// An unconditional effect.
    pub const fn always(steps: Vec<EffectStep>) -> Self {
        Self {
            condition: None,
            steps,
            fallback: Vec::new(),
        }
    }

    /// An effect that only applies when `condition` holds.
    pub const fn when(condition: Condition, steps: Vec<EffectStep>) -> Self {
        Self {
            condition: Some(condition),
            steps,
            fallback: Vec::new(),
        }
    }

    /// Attach steps that run when the condition is not satisfied.
    #[must_use]
    pub fn otherwise(mut self, fallback: Vec<EffectStep>) -> Self {
        self.fallback = fallback;
        self
    }
}

/// An initialization modifier applied exactly once at student creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitModifier {
    /// Add a flat amount to a skill (ceiling 100).
    RaiseSkill {
        /// Affected skill.
        skill: Skill,
        /// Amount added.
        amount: f64,
    },
    /// Raise a skill to at least `floor` (`max(current, floor)`).
    FloorSkill {
        /// Affected skill.
        skill: Skill,
        /// Minimum value after the modifier.
        floor: f64,
    },
    /// Lower a skill to at most `cap` (`min(current, cap)`).
    CapSkill {
        /// Affected skill.
        skill: Skill,
        /// Maximum value after the modifier.
        cap: f64,
    },
    /// Multiply stress sensitivity.
    ScaleStressSensitivity(f64),
    /// Multiply one skill's learning rate.
    ScaleLearningRate {
        /// Affected skill.
        skill: Skill,
        /// Multiplier.
        factor: f64,
    },
    /// Multiply every learning rate.
    ScaleAllLearningRates(f64),
}
