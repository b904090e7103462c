//! The weekly training catalog.
//!
//! Each week the session samples a handful of these templates (plus the
//! idle entry, which is not part of the catalog) to build the menu.
//! Magnitudes come from the shared [`magnitude`](crate::magnitude) scale.

use stargazer_types::{Skill, TraitKind, TrainingTemplate, Weather, skill_map};

use crate::magnitude::{
    GAIN, GAIN_MAJOR, GAIN_MINOR, GAIN_SLIGHT, LOSS_MINOR, STRESS_DOWN, STRESS_DOWN_MAJOR,
    STRESS_DOWN_MINOR, STRESS_UP, STRESS_UP_MAJOR, STRESS_UP_MINOR,
};

/// Weather that allows outdoor observing.
const OBSERVING_SKY: [Weather; 2] = [Weather::Clear, Weather::FewClouds];

fn entry(name: &str, cost: i64, stress: f64, gains: &[(Skill, f64)]) -> TrainingTemplate {
    TrainingTemplate {
        name: name.to_owned(),
        cost,
        stress,
        gains: gains.iter().copied().collect(),
        weather: None,
        required_trait: None,
        fund_gain: 0,
    }
}

fn outdoor(name: &str, cost: i64, stress: f64, gains: &[(Skill, f64)]) -> TrainingTemplate {
    TrainingTemplate {
        weather: Some(OBSERVING_SKY.to_vec()),
        ..entry(name, cost, stress, gains)
    }
}

fn outing(name: &str, cost: i64, required: TraitKind) -> TrainingTemplate {
    TrainingTemplate {
        name: name.to_owned(),
        cost,
        stress: STRESS_DOWN_MAJOR,
        gains: skill_map([(Skill::Knowledge, LOSS_MINOR)]),
        weather: None,
        required_trait: Some(required),
        fund_gain: 0,
    }
}

/// The full training catalog.
pub fn training_catalog() -> Vec<TrainingTemplate> {
    use Skill::{Knowledge, Observation, Practical, Theory};

    vec![
        // Core training
        entry("Mock written exam", 100, STRESS_UP, &[(Theory, GAIN), (Practical, GAIN_MINOR)]),
        entry("Past olympiad papers", 50, STRESS_UP_MAJOR, &[(Theory, GAIN_MAJOR), (Knowledge, GAIN_MINOR)]),
        outdoor("Field observation", 400, STRESS_UP_MINOR, &[(Observation, GAIN_MAJOR), (Practical, GAIN_MINOR)]),
        entry("Data reduction", 150, STRESS_UP, &[(Practical, GAIN), (Theory, GAIN_SLIGHT)]),
        entry("Knowledge lecture", 200, STRESS_DOWN_MINOR, &[(Knowledge, GAIN_MAJOR), (Theory, GAIN_SLIGHT)]),
        // Recovery and income
        entry("Professional massage", 800, STRESS_DOWN_MAJOR, &[(Knowledge, GAIN_SLIGHT)]),
        TrainingTemplate {
            fund_gain: 400,
            ..entry("Club commissions", 0, STRESS_UP, &[(Practical, GAIN_SLIGHT)])
        },
        entry("Documentary night", 200, STRESS_DOWN, &[(Knowledge, GAIN_MAJOR)]),
        outing("Furry meetup", 800, TraitKind::Furry),
        outing("Cross-dressing party", 500, TraitKind::CrossDresser),
        // Mixed training
        entry("Interdisciplinary seminar", 0, STRESS_UP, &[(Theory, GAIN_MINOR), (Practical, GAIN_MINOR)]),
        entry("Popular science article", 0, STRESS_UP, &[(Knowledge, GAIN), (Theory, GAIN_MINOR)]),
        outdoor("Nova hunt", 500, STRESS_UP_MINOR, &[(Observation, GAIN), (Practical, GAIN)]),
        entry("Orbit computation", 100, STRESS_UP_MAJOR, &[(Practical, GAIN_MAJOR), (Theory, GAIN)]),
        entry("Star chart drills", 100, STRESS_UP, &[(Observation, GAIN_MAJOR), (Knowledge, GAIN)]),
        entry("Black hole talk", 150, STRESS_DOWN_MINOR, &[(Theory, GAIN), (Knowledge, GAIN)]),
        entry("Wilderness survival", 500, STRESS_DOWN, &[(Observation, GAIN), (Knowledge, GAIN)]),
        entry("Programming algorithms", 50, STRESS_UP_MAJOR, &[(Practical, GAIN_MAJOR)]),
        entry("Philosophy debate", 0, STRESS_UP_MINOR, &[(Theory, GAIN_SLIGHT)]),
        outdoor("Meteor shower watch", 400, STRESS_DOWN, &[(Observation, GAIN)]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_well_formed() {
        let catalog = training_catalog();
        assert_eq!(catalog.len(), 20);
        assert!(catalog.iter().all(|t| t.cost >= 0 && !t.gains.is_empty()));
    }

    #[test]
    fn gated_entries() {
        let catalog = training_catalog();
        let outdoor = catalog.iter().filter(|t| t.weather.is_some()).count();
        let trait_gated = catalog.iter().filter(|t| t.required_trait.is_some()).count();
        assert_eq!(outdoor, 3);
        assert_eq!(trait_gated, 2);
        assert!(catalog.iter().any(|t| t.fund_gain == 400 && t.cost == 0));
    }
}
