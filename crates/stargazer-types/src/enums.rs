//! Enumeration types for the Stargazer simulation.
//!
//! Every categorical field of the simulation (skill axis, weather, student
//! status, contest tier, trait) is a closed enum so each use site is
//! checked for exhaustiveness by the compiler.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// One of the four fixed skill axes every student carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Theoretical astrophysics and problem solving.
    Theory,
    /// Sky observation and instrument handling.
    Observation,
    /// Practical data analysis and measurement.
    Practical,
    /// General astronomy knowledge.
    Knowledge,
}

impl Skill {
    /// All skill axes in display order.
    pub const ALL: [Self; 4] = [
        Self::Theory,
        Self::Observation,
        Self::Practical,
        Self::Knowledge,
    ];

    /// Short human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Theory => "Theory",
            Self::Observation => "Observation",
            Self::Practical => "Practical",
            Self::Knowledge => "Knowledge",
        }
    }
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Weekly weather, drawn once at the start of every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    /// Clear skies.
    Clear,
    /// A few clouds, still good for observing.
    FewClouds,
    /// Broken cloud cover.
    Cloudy,
    /// Fully overcast. Its weight grows with every active cloud-bringer.
    Overcast,
    /// Rain.
    Rain,
}

impl Weather {
    /// All weather values in weight-table order.
    pub const ALL: [Self; 5] = [
        Self::Clear,
        Self::FewClouds,
        Self::Cloudy,
        Self::Overcast,
        Self::Rain,
    ];

    /// Whether this weather cancels outdoor observation rounds.
    pub const fn is_adverse(self) -> bool {
        matches!(self, Self::Overcast | Self::Rain)
    }

    /// Short human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::FewClouds => "few clouds",
            Self::Cloudy => "cloudy",
            Self::Overcast => "overcast",
            Self::Rain => "rain",
        }
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Participation status of a student.
///
/// The only legal transition is `Active -> Withdrawn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Still training and eligible for contests.
    Active,
    /// Left the club under stress. Terminal.
    Withdrawn,
}

// ---------------------------------------------------------------------------
// Contest tiers
// ---------------------------------------------------------------------------

/// A tier of the competition ladder, in strict ladder order.
///
/// A tier doubles as the honor label written onto students promoted out
/// of it, so `Ord` reflects seniority: a later tier always supersedes an
/// earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// City qualifier, open to every active student.
    City,
    /// Province round, gated on the city honor.
    Province,
    /// National preliminary, open to every active student.
    NationalPreliminary,
    /// National final, gated on the national-preliminary honor.
    NationalFinal,
    /// International olympiad, gated on national team membership.
    International,
}

impl Tier {
    /// All tiers in ladder order.
    pub const ALL: [Self; 5] = [
        Self::City,
        Self::Province,
        Self::NationalPreliminary,
        Self::NationalFinal,
        Self::International,
    ];

    /// Human-readable contest name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::City => "City Qualifier",
            Self::Province => "Province Round",
            Self::NationalPreliminary => "National Preliminary",
            Self::NationalFinal => "National Final",
            Self::International => "International Olympiad",
        }
    }

    /// Human-readable honor title earned by promotion out of this tier.
    pub const fn honor_title(self) -> &'static str {
        match self {
            Self::City => "city team",
            Self::Province => "province team",
            Self::NationalPreliminary => "national qualifier",
            Self::NationalFinal => "national team",
            Self::International => "medalist",
        }
    }

    /// The honor a student must hold to enter this tier, if gated.
    ///
    /// The international tier is gated on the national team recorded at
    /// the year boundary rather than on a live honor label.
    pub const fn required_honor(self) -> Option<Self> {
        match self {
            Self::Province => Some(Self::City),
            Self::NationalFinal => Some(Self::NationalPreliminary),
            Self::International => Some(Self::NationalFinal),
            Self::City | Self::NationalPreliminary => None,
        }
    }
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A personality trait drawn at student creation.
///
/// Some traits carry initialization modifiers (see the trait catalog);
/// others only influence later probability tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    /// Loves anything fluffy. More knowledge, more stress sensitivity.
    Furry,
    /// Clouds follow them around. Raises the overcast weight.
    CloudBringer,
    /// Gear collector. Strong observer, slow at data work.
    Astrophotographer,
    /// Wealthy family. Resilient, and sponsors the club.
    Patron,
    /// Thin-skinned. High stress sensitivity, fast theory learner.
    Fragile,
    /// Fringe theorist. Slow knowledge learner.
    Crank,
    /// Sleeps four hours a night. Every learning rate slightly up.
    NightOwl,
    /// Exam luck skewed upward.
    Lucky,
    /// Exam luck skewed downward.
    Unlucky,
    /// Theory prodigy. High floor and learning rate in theory.
    TheoryProdigy,
    /// Unusual tastes, no mechanical effect.
    Eccentric,
    /// Needs ten hours of sleep. Resilient but slower in theory and observation.
    Sleepyhead,
    /// 3D modelling addict. High practical floor.
    DataWizard,
    /// Great talker, shaky in exams. High knowledge floor.
    Bluffer,
    /// Enjoys cross-dressing; keeps the mood light.
    CrossDresser,
    /// Believes in alien life. Slightly faster theory learner.
    XenoEnthusiast,
    /// Short-sighted. Observation capped at creation.
    Nearsighted,
    /// Social butterfly. Doubles social contest activities.
    Socialite,
    /// Stays home. Resilient, slow knowledge learner.
    Homebody,
}

// ---------------------------------------------------------------------------
// Variance profile
// ---------------------------------------------------------------------------

/// The contest-score perturbation range a student draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceProfile {
    /// Symmetric perturbation.
    Neutral,
    /// Skewed toward positive perturbation.
    Lucky,
    /// Skewed toward negative perturbation.
    Unlucky,
}

impl VarianceProfile {
    /// Derive the profile from a student's traits.
    ///
    /// [`TraitKind::Lucky`] takes precedence when both luck traits are held.
    pub fn from_traits(traits: &[TraitKind]) -> Self {
        if traits.contains(&TraitKind::Lucky) {
            Self::Lucky
        } else if traits.contains(&TraitKind::Unlucky) {
            Self::Unlucky
        } else {
            Self::Neutral
        }
    }
}
