//! The student entity and its state transitions.
//!
//! A [`Student`] owns four skill attributes in `[0, 100]`, per-skill
//! learning rates, temporary contest bonuses, stress, and a participation
//! [`Status`]. Every mutating method is a no-op once the student has
//! withdrawn, so callers never need to filter before applying an effect.
//!
//! # Invariants
//!
//! - No attribute ever exceeds 100, and no regression takes one below 0.
//! - Stress is never negative.
//! - `Active -> Withdrawn` is the only status transition.

use serde::Serialize;
use stargazer_types::{
    Dice, Skill, SkillMap, Status, StudentId, Tier, TraitKind, VarianceProfile,
};
use tracing::info;

use crate::config::{StudentConfig, VarianceRanges};

/// Attribute ceiling.
pub const MAX_ATTRIBUTE: f64 = 100.0;

/// A club member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    /// Unique identifier.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// Permanent skill values in `[0, 100]`.
    pub attributes: SkillMap,
    /// Additive bonuses valid during the current contest tier only.
    pub temporary: SkillMap,
    /// Per-skill multiplier applied to every gain or loss.
    pub learning_rates: SkillMap,
    /// Accumulated stress, never negative.
    pub stress: f64,
    /// Multiplier applied to every incoming stress delta.
    pub stress_sensitivity: f64,
    /// Participation status.
    pub status: Status,
    /// Highest tier promoted out of this year, if any.
    pub honor: Option<Tier>,
    /// Traits drawn at creation, in draw order.
    pub traits: Vec<TraitKind>,
}

impl Student {
    /// A neutral student: every attribute at `base`, every rate at 1.0,
    /// zero stress, sensitivity 1.0, no traits.
    pub fn uniform(name: impl Into<String>, base: f64) -> Self {
        Self {
            id: StudentId::new(),
            name: name.into(),
            attributes: Skill::ALL.iter().map(|s| (*s, base)).collect(),
            temporary: SkillMap::new(),
            learning_rates: Skill::ALL.iter().map(|s| (*s, 1.0)).collect(),
            stress: 0.0,
            stress_sensitivity: 1.0,
            status: Status::Active,
            honor: None,
            traits: Vec::new(),
        }
    }

    /// Whether the student is still in the club.
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Permanent value of `skill` (0 if never set).
    pub fn attribute(&self, skill: Skill) -> f64 {
        self.attributes.get(&skill).copied().unwrap_or(0.0)
    }

    /// Permanent value plus the current temporary bonus.
    pub fn effective(&self, skill: Skill) -> f64 {
        self.attribute(skill) + self.temporary.get(&skill).copied().unwrap_or(0.0)
    }

    /// Learning rate for `skill` (1.0 if never set).
    pub fn learning_rate(&self, skill: Skill) -> f64 {
        self.learning_rates.get(&skill).copied().unwrap_or(1.0)
    }

    /// Whether the student holds `kind`.
    pub fn has_trait(&self, kind: TraitKind) -> bool {
        self.traits.contains(&kind)
    }

    /// The score perturbation profile implied by the student's traits.
    pub fn variance_profile(&self) -> VarianceProfile {
        VarianceProfile::from_traits(&self.traits)
    }

    /// Apply positive gains, scaled by learning rate and `factor`.
    ///
    /// Entries whose scaled delta is not positive are ignored, so `train`
    /// never lowers a skill. Results are capped at [`MAX_ATTRIBUTE`].
    pub fn train(&mut self, gains: &SkillMap, factor: f64) {
        if !self.is_active() {
            return;
        }
        for (skill, gain) in gains {
            let delta = gain * self.learning_rate(*skill) * factor;
            if delta > 0.0 {
                let value = (self.attribute(*skill) + delta).min(MAX_ATTRIBUTE);
                self.attributes.insert(*skill, value);
            }
        }
    }

    /// Apply negative deltas, scaled by learning rate and `factor`.
    ///
    /// Entries whose scaled delta is not negative are ignored. Results are
    /// floored at 0.
    pub fn regress(&mut self, losses: &SkillMap, factor: f64) {
        if !self.is_active() {
            return;
        }
        for (skill, loss) in losses {
            let delta = loss * self.learning_rate(*skill) * factor;
            if delta < 0.0 {
                let value = (self.attribute(*skill) + delta).max(0.0);
                self.attributes.insert(*skill, value);
            }
        }
    }

    /// Apply a signed skill-delta map: positive entries train, negative
    /// entries regress.
    pub fn adjust_skills(&mut self, deltas: &SkillMap, factor: f64) {
        self.train(deltas, factor);
        self.regress(deltas, factor);
    }

    /// Add temporary contest bonuses, scaled by `factor`.
    pub fn boost(&mut self, deltas: &SkillMap, factor: f64) {
        if !self.is_active() {
            return;
        }
        for (skill, delta) in deltas {
            let entry = self.temporary.entry(*skill).or_insert(0.0);
            *entry += delta * factor;
        }
    }

    /// Drop every temporary bonus.
    pub fn clear_boosts(&mut self) {
        self.temporary.clear();
    }

    /// Apply a raw stress delta, scaled by sensitivity and floored at 0.
    ///
    /// When the resulting stress is strictly above the configured
    /// threshold, the student withdraws with the configured probability.
    /// Returns whether a withdrawal happened on this call.
    pub fn apply_stress(&mut self, amount: f64, config: &StudentConfig, dice: &mut dyn Dice) -> bool {
        if !self.is_active() {
            return false;
        }
        self.stress = amount.mul_add(self.stress_sensitivity, self.stress).max(0.0);
        if self.stress > config.withdrawal_threshold && dice.chance(config.withdrawal_probability) {
            self.status = Status::Withdrawn;
            info!(student = %self.name, stress = self.stress, "Student withdrew under stress");
            return true;
        }
        false
    }

    /// Score the student against a skill-weight map.
    ///
    /// The weighted mean of effective attributes is multiplied by
    /// `1 + r`, with `r` drawn from the student's variance range, and
    /// clamped to `[0, 100]`. A map with no positive total weight scores 0.
    /// Withdrawn students score 0 without consuming a draw.
    pub fn contest_score(
        &self,
        weights: &SkillMap,
        variance: &VarianceRanges,
        dice: &mut dyn Dice,
    ) -> f64 {
        if !self.is_active() {
            return 0.0;
        }
        let total: f64 = weights.values().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let weighted: f64 = weights
            .iter()
            .map(|(skill, weight)| self.effective(*skill) * weight)
            .sum();
        let base = weighted / total;
        let span = variance.for_profile(self.variance_profile());
        let r = dice.uniform(span.low, span.high);
        (base * (1.0 + r)).clamp(0.0, MAX_ATTRIBUTE)
    }

    /// Record promotion out of `tier`, superseding any earlier honor.
    pub const fn award_honor(&mut self, tier: Tier) {
        self.honor = Some(tier);
    }

    /// Whether the student's honor is exactly `tier`.
    pub fn holds_honor(&self, tier: Tier) -> bool {
        self.honor == Some(tier)
    }
}
