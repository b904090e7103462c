//! Configuration loading and typed config structures for the Stargazer simulation.
//!
//! The canonical configuration lives in `stargazer-config.yaml` in the
//! working directory. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads and validates the
//! file. Every key is optional: a missing key falls back to the built-in
//! game value, so an empty document is a valid configuration.

use std::path::Path;

use serde::Deserialize;
use stargazer_roster::StudentConfig;
use stargazer_types::{Skill, SkillMap, Tier, skill_map};
use stargazer_world::WeatherTable;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `stargazer-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Session length.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Funds and recurring income.
    #[serde(default)]
    pub economy: EconomyConfig,

    /// Student creation ranges and stress rules.
    #[serde(default)]
    pub roster: StudentConfig,

    /// Weekly weather distribution.
    #[serde(default)]
    pub weather: WeatherTable,

    /// Weekly training menu.
    #[serde(default)]
    pub training: TrainingConfig,

    /// Player-facing log.
    #[serde(default)]
    pub journal: JournalConfig,

    /// Contest tiers and shared contest parameters.
    #[serde(default)]
    pub contest: ContestConfig,
}

impl SimulationConfig {
    /// Load and validate configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value fails validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value fails validation.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calendar.horizon_years == 0 {
            return Err(invalid("calendar.horizon_years must be at least 1"));
        }
        if self.journal.capacity == 0 {
            return Err(invalid("journal.capacity must be at least 1"));
        }
        if self.contest.offers_per_day == 0 {
            return Err(invalid("contest.offers_per_day must be at least 1"));
        }
        let roster = &self.roster;
        if !(0.0..=1.0).contains(&roster.withdrawal_probability) {
            return Err(invalid("roster.withdrawal_probability must lie in [0, 1]"));
        }
        if roster.min_size == 0 || roster.min_size > roster.max_size {
            return Err(invalid("roster sizes must satisfy 1 <= min_size <= max_size"));
        }
        if !roster.trait_count_weights.iter().any(|w| *w > 0.0) {
            return Err(invalid("roster.trait_count_weights needs a positive weight"));
        }
        for tier in Tier::ALL {
            self.contest.tiers.rules(tier).validate(tier)?;
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        reason: reason.into(),
    }
}

/// Session length.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    /// Number of academic years before the session ends (default: 3).
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            horizon_years: default_horizon_years(),
        }
    }
}

/// Funds and recurring income.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EconomyConfig {
    /// Opening balance (default: 2000).
    #[serde(default = "default_starting_funds")]
    pub starting_funds: i64,

    /// Credited at week 1 of every month (default: 500).
    #[serde(default = "default_monthly_allowance")]
    pub monthly_allowance: i64,

    /// Credited at recruitment per Patron student (default: 2000).
    #[serde(default = "default_patron_sponsorship")]
    pub patron_sponsorship: i64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_funds: default_starting_funds(),
            monthly_allowance: default_monthly_allowance(),
            patron_sponsorship: default_patron_sponsorship(),
        }
    }
}

/// Weekly training menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainingConfig {
    /// Catalog activities offered each week, before the idle entry (default: 5).
    #[serde(default = "default_menu_size")]
    pub menu_size: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            menu_size: default_menu_size(),
        }
    }
}

/// Player-facing log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JournalConfig {
    /// Most recent entries kept (default: 10).
    #[serde(default = "default_journal_capacity")]
    pub capacity: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            capacity: default_journal_capacity(),
        }
    }
}

/// How many ranked participants may promote out of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cutoff {
    /// A share of the scored field, rounded down, never below one.
    Fraction(f64),
    /// An absolute number of places.
    Headcount(usize),
}

impl Cutoff {
    /// Number of promotion places for a field of `participants`.
    pub fn limit(self, participants: usize) -> usize {
        match self {
            Self::Fraction(share) => {
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss
                )]
                let places = (participants as f64 * share).floor() as usize;
                places.max(1)
            }
            Self::Headcount(places) => places,
        }
    }
}

/// Scoring and promotion rules of one contest tier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TierRules {
    /// Skill weights for the contest score.
    pub weights: SkillMap,

    /// Promotion places.
    pub cutoff: Cutoff,

    /// Minimum score to promote, even within the cutoff.
    pub score_floor: f64,

    /// Days of mini-events before scoring (default: 0).
    #[serde(default)]
    pub interactive_days: u32,

    /// Skill whose weight drops to zero under overcast or rain.
    #[serde(default)]
    pub adverse_weather_drops: Option<Skill>,
}

impl TierRules {
    fn validate(&self, tier: Tier) -> Result<(), ConfigError> {
        if self.weights.values().any(|w| *w < 0.0) {
            return Err(invalid(format!("{tier} has a negative skill weight")));
        }
        match self.cutoff {
            Cutoff::Fraction(share) if !(share > 0.0 && share <= 1.0) => {
                Err(invalid(format!("{tier} cutoff fraction must lie in (0, 1]")))
            }
            Cutoff::Headcount(0) => Err(invalid(format!("{tier} cutoff headcount must be positive"))),
            _ => Ok(()),
        }
    }
}

/// Rules for every tier of the ladder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TierTable {
    /// City qualifier.
    #[serde(default = "default_city")]
    pub city: TierRules,
    /// Province round.
    #[serde(default = "default_province")]
    pub province: TierRules,
    /// National preliminary.
    #[serde(default = "default_national_preliminary")]
    pub national_preliminary: TierRules,
    /// National final.
    #[serde(default = "default_national_final")]
    pub national_final: TierRules,
    /// International olympiad.
    #[serde(default = "default_international")]
    pub international: TierRules,
}

impl TierTable {
    /// Rules for `tier`.
    pub const fn rules(&self, tier: Tier) -> &TierRules {
        match tier {
            Tier::City => &self.city,
            Tier::Province => &self.province,
            Tier::NationalPreliminary => &self.national_preliminary,
            Tier::NationalFinal => &self.national_final,
            Tier::International => &self.international,
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            city: default_city(),
            province: default_province(),
            national_preliminary: default_national_preliminary(),
            national_final: default_national_final(),
            international: default_international(),
        }
    }
}

/// Contest tiers and shared contest parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContestConfig {
    /// Per-tier rules.
    #[serde(default)]
    pub tiers: TierTable,

    /// Mini-events offered per interactive day (default: 3).
    #[serde(default = "default_offers_per_day")]
    pub offers_per_day: usize,

    /// Stress applied to every scored participant (default: 15).
    #[serde(default = "default_contest_stress")]
    pub contest_stress: f64,

    /// Extra stress for every participant who does not promote (default: 15).
    #[serde(default = "default_elimination_stress")]
    pub elimination_stress: f64,

    /// Effect multiplier for social choices when a socialite takes part (default: 2.0).
    #[serde(default = "default_social_factor")]
    pub social_factor: f64,
}

impl Default for ContestConfig {
    fn default() -> Self {
        Self {
            tiers: TierTable::default(),
            offers_per_day: default_offers_per_day(),
            contest_stress: default_contest_stress(),
            elimination_stress: default_elimination_stress(),
            social_factor: default_social_factor(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

const fn default_horizon_years() -> u32 {
    3
}

const fn default_starting_funds() -> i64 {
    2000
}

const fn default_monthly_allowance() -> i64 {
    500
}

const fn default_patron_sponsorship() -> i64 {
    2000
}

const fn default_menu_size() -> usize {
    5
}

const fn default_journal_capacity() -> usize {
    10
}

const fn default_offers_per_day() -> usize {
    3
}

const fn default_contest_stress() -> f64 {
    15.0
}

const fn default_elimination_stress() -> f64 {
    15.0
}

const fn default_social_factor() -> f64 {
    2.0
}

fn default_city() -> TierRules {
    TierRules {
        weights: skill_map([
            (Skill::Theory, 0.3),
            (Skill::Knowledge, 0.5),
            (Skill::Observation, 0.2),
        ]),
        cutoff: Cutoff::Fraction(0.9),
        score_floor: 32.0,
        interactive_days: 0,
        adverse_weather_drops: None,
    }
}

fn default_province() -> TierRules {
    TierRules {
        weights: skill_map([
            (Skill::Theory, 0.3),
            (Skill::Observation, 0.3),
            (Skill::Practical, 0.3),
            (Skill::Knowledge, 0.1),
        ]),
        cutoff: Cutoff::Fraction(0.8),
        score_floor: 32.0,
        interactive_days: 2,
        adverse_weather_drops: Some(Skill::Observation),
    }
}

fn default_national_preliminary() -> TierRules {
    TierRules {
        weights: skill_map([(Skill::Theory, 0.7), (Skill::Knowledge, 0.3)]),
        cutoff: Cutoff::Fraction(0.2),
        score_floor: 32.0,
        interactive_days: 0,
        adverse_weather_drops: None,
    }
}

fn default_national_final() -> TierRules {
    TierRules {
        weights: skill_map([
            (Skill::Theory, 0.4),
            (Skill::Observation, 0.3),
            (Skill::Practical, 0.3),
        ]),
        cutoff: Cutoff::Headcount(5),
        score_floor: 40.0,
        interactive_days: 5,
        adverse_weather_drops: None,
    }
}

fn default_international() -> TierRules {
    TierRules {
        cutoff: Cutoff::Headcount(1),
        interactive_days: 0,
        ..default_national_final()
    }
}
