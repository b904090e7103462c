//! Configurable parameters for student creation and stress mechanics.
//!
//! These values correspond to the `roster` section of
//! `stargazer-config.yaml`. The [`StudentConfig`] struct bundles every
//! tunable so that callers (session setup, tests) can override defaults.
//! A missing key falls back to the built-in game value.

use serde::Deserialize;
use stargazer_types::VarianceProfile;

/// A closed real interval used for uniform draws.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Span {
    /// Lower bound.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
}

impl Span {
    /// Build a span from its bounds.
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Contest-score perturbation ranges per variance profile.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VarianceRanges {
    /// Symmetric range for students without a luck trait (default: ±0.1).
    #[serde(default = "default_neutral")]
    pub neutral: Span,
    /// Range for lucky students (default: -0.05..0.25).
    #[serde(default = "default_lucky")]
    pub lucky: Span,
    /// Range for unlucky students (default: -0.25..0.05).
    #[serde(default = "default_unlucky")]
    pub unlucky: Span,
}

impl VarianceRanges {
    /// The range a student with `profile` draws from.
    pub const fn for_profile(&self, profile: VarianceProfile) -> Span {
        match profile {
            VarianceProfile::Neutral => self.neutral,
            VarianceProfile::Lucky => self.lucky,
            VarianceProfile::Unlucky => self.unlucky,
        }
    }
}

impl Default for VarianceRanges {
    fn default() -> Self {
        Self {
            neutral: default_neutral(),
            lucky: default_lucky(),
            unlucky: default_unlucky(),
        }
    }
}

/// Configuration for student creation and stress handling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentConfig {
    /// Roster size used when the requested size is malformed (default: 4).
    #[serde(default = "default_size")]
    pub default_size: usize,

    /// Smallest accepted roster size (default: 1).
    #[serde(default = "default_min_size")]
    pub min_size: usize,

    /// Largest accepted roster size (default: 10).
    #[serde(default = "default_max_size")]
    pub max_size: usize,

    /// Range for every base attribute (default: 10..30).
    #[serde(default = "default_attribute_range")]
    pub attribute_range: Span,

    /// Range for every per-skill learning rate (default: 0.8..1.2).
    #[serde(default = "default_rate_range")]
    pub learning_rate_range: Span,

    /// Range for starting stress (default: 5..20).
    #[serde(default = "default_stress_range")]
    pub stress_range: Span,

    /// Range for stress sensitivity (default: 0.8..1.2).
    #[serde(default = "default_rate_range")]
    pub sensitivity_range: Span,

    /// Weights for drawing 0, 1, or 2 traits (default: 0.3 / 0.4 / 0.3).
    #[serde(default = "default_trait_count_weights")]
    pub trait_count_weights: Vec<f64>,

    /// Stress strictly above this value may trigger withdrawal (default: 100).
    #[serde(default = "default_withdrawal_threshold")]
    pub withdrawal_threshold: f64,

    /// Probability of withdrawing once over the threshold (default: 0.8).
    #[serde(default = "default_withdrawal_probability")]
    pub withdrawal_probability: f64,

    /// Contest-score perturbation ranges.
    #[serde(default)]
    pub variance: VarianceRanges,
}

impl StudentConfig {
    /// Clamp a requested roster size into `[min_size, max_size]`.
    pub fn clamp_size(&self, requested: usize) -> usize {
        requested.clamp(self.min_size, self.max_size.max(self.min_size))
    }
}

impl Default for StudentConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            attribute_range: default_attribute_range(),
            learning_rate_range: default_rate_range(),
            stress_range: default_stress_range(),
            sensitivity_range: default_rate_range(),
            trait_count_weights: default_trait_count_weights(),
            withdrawal_threshold: default_withdrawal_threshold(),
            withdrawal_probability: default_withdrawal_probability(),
            variance: VarianceRanges::default(),
        }
    }
}

const fn default_size() -> usize {
    4
}

const fn default_min_size() -> usize {
    1
}

const fn default_max_size() -> usize {
    10
}

const fn default_attribute_range() -> Span {
    Span::new(10.0, 30.0)
}

const fn default_rate_range() -> Span {
    Span::new(0.8, 1.2)
}

const fn default_stress_range() -> Span {
    Span::new(5.0, 20.0)
}

fn default_trait_count_weights() -> Vec<f64> {
    vec![0.3, 0.4, 0.3]
}

const fn default_withdrawal_threshold() -> f64 {
    100.0
}

const fn default_withdrawal_probability() -> f64 {
    0.8
}

const fn default_neutral() -> Span {
    Span::new(-0.1, 0.1)
}

const fn default_lucky() -> Span {
    Span::new(-0.05, 0.25)
}

const fn default_unlucky() -> Span {
    Span::new(-0.25, 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_clamped() {
        let config = StudentConfig::default();
        assert_eq!(config.clamp_size(0), 1);
        assert_eq!(config.clamp_size(4), 4);
        assert_eq!(config.clamp_size(99), 10);
    }

    #[test]
    fn profiles_select_their_range() {
        let ranges = VarianceRanges::default();
        let lucky = ranges.for_profile(VarianceProfile::Lucky);
        assert!(lucky.high > lucky.low.abs());
        let unlucky = ranges.for_profile(VarianceProfile::Unlucky);
        assert!(unlucky.low.abs() > unlucky.high);
    }
}
