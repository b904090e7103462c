//! Generic application of trait initialization modifiers.
//!
//! Traits carry [`TraitModifier`] descriptors instead of behavior. This
//! module is the single place that interprets them. Modifiers run once, at
//! creation, in trait draw order, so a floor applied by an earlier trait is
//! never lowered by a later one.

use stargazer_types::{Skill, TraitModifier};

use crate::student::{MAX_ATTRIBUTE, Student};

/// Apply one modifier to a freshly created student.
pub fn apply_modifier(student: &mut Student, modifier: &TraitModifier) {
    match *modifier {
        TraitModifier::RaiseSkill { skill, amount } => {
            let value = (student.attribute(skill) + amount).clamp(0.0, MAX_ATTRIBUTE);
            student.attributes.insert(skill, value);
        }
        TraitModifier::FloorSkill { skill, floor } => {
            let value = student.attribute(skill).max(floor).min(MAX_ATTRIBUTE);
            student.attributes.insert(skill, value);
        }
        TraitModifier::CapSkill { skill, cap } => {
            let value = student.attribute(skill).min(cap);
            student.attributes.insert(skill, value);
        }
        TraitModifier::ScaleStressSensitivity(factor) => {
            student.stress_sensitivity *= factor;
        }
        TraitModifier::ScaleLearningRate { skill, factor } => {
            scale_rate(student, skill, factor);
        }
        TraitModifier::ScaleAllLearningRates(factor) => {
            for skill in Skill::ALL {
                scale_rate(student, skill, factor);
            }
        }
    }
}

/// Apply every modifier in order.
pub fn apply_all(student: &mut Student, modifiers: &[TraitModifier]) {
    for modifier in modifiers {
        apply_modifier(student, modifier);
    }
}

fn scale_rate(student: &mut Student, skill: Skill, factor: f64) {
    let rate = student.learning_rate(skill) * factor;
    student.learning_rates.insert(skill, rate);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn floor_never_lowers_an_already_raised_value() {
        let mut student = Student::uniform("Zhou", 20.0);
        apply_all(
            &mut student,
            &[
                TraitModifier::FloorSkill { skill: Skill::Theory, floor: 60.0 },
                TraitModifier::FloorSkill { skill: Skill::Theory, floor: 50.0 },
            ],
        );
        assert!(close(student.attribute(Skill::Theory), 60.0));
    }

    #[test]
    fn raise_is_capped() {
        let mut student = Student::uniform("Zhou", 95.0);
        apply_modifier(
            &mut student,
            &TraitModifier::RaiseSkill { skill: Skill::Knowledge, amount: 15.0 },
        );
        assert!(close(student.attribute(Skill::Knowledge), 100.0));
    }

    #[test]
    fn cap_lowers_only_values_above_it() {
        let mut student = Student::uniform("Zhou", 25.0);
        apply_modifier(
            &mut student,
            &TraitModifier::CapSkill { skill: Skill::Observation, cap: 15.0 },
        );
        assert!(close(student.attribute(Skill::Observation), 15.0));
        apply_modifier(
            &mut student,
            &TraitModifier::CapSkill { skill: Skill::Observation, cap: 40.0 },
        );
        assert!(close(student.attribute(Skill::Observation), 15.0));
    }

    #[test]
    fn rate_and_sensitivity_multipliers_compound() {
        let mut student = Student::uniform("Zhou", 20.0);
        apply_all(
            &mut student,
            &[
                TraitModifier::ScaleAllLearningRates(1.1),
                TraitModifier::ScaleLearningRate { skill: Skill::Theory, factor: 2.0 },
                TraitModifier::ScaleStressSensitivity(0.5),
                TraitModifier::ScaleStressSensitivity(0.5),
            ],
        );
        assert!(close(student.learning_rate(Skill::Theory), 2.2));
        assert!(close(student.learning_rate(Skill::Practical), 1.1));
        assert!(close(student.stress_sensitivity, 0.25));
    }
}
