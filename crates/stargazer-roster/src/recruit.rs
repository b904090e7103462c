//! Student creation.
//!
//! [`create_student`] draws every base value from the configured uniform
//! ranges, draws a trait count from the configured discrete weights, picks
//! that many distinct traits from the catalog, and applies each trait's
//! modifiers in draw order.

use stargazer_types::{Dice, Skill, SkillMap, Status, StudentId, TraitTemplate};
use tracing::debug;

use crate::config::{Span, StudentConfig};
use crate::error::RosterError;
use crate::modifiers::apply_all;
use crate::student::Student;

/// Create a new active student named `name`.
///
/// # Errors
///
/// Returns [`RosterError::InvalidTraitWeights`] if no trait count can be
/// drawn, and [`RosterError::EmptyTraitCatalog`] if a non-zero trait count
/// is drawn from an empty catalog.
pub fn create_student(
    name: String,
    config: &StudentConfig,
    catalog: &[TraitTemplate],
    dice: &mut dyn Dice,
) -> Result<Student, RosterError> {
    let attributes = draw_per_skill(config.attribute_range, dice);
    let learning_rates = draw_per_skill(config.learning_rate_range, dice);
    let stress = dice.uniform(config.stress_range.low, config.stress_range.high);
    let stress_sensitivity = dice.uniform(config.sensitivity_range.low, config.sensitivity_range.high);

    let count = dice
        .weighted(&config.trait_count_weights)
        .ok_or(RosterError::InvalidTraitWeights)?;
    if count > 0 && catalog.is_empty() {
        return Err(RosterError::EmptyTraitCatalog { requested: count });
    }
    let drawn: Vec<&TraitTemplate> = dice
        .distinct(catalog.len(), count)
        .into_iter()
        .filter_map(|index| catalog.get(index))
        .collect();

    let mut student = Student {
        id: StudentId::new(),
        name,
        attributes,
        temporary: SkillMap::new(),
        learning_rates,
        stress,
        stress_sensitivity,
        status: Status::Active,
        honor: None,
        traits: drawn.iter().map(|t| t.kind).collect(),
    };
    for template in drawn {
        apply_all(&mut student, &template.modifiers);
    }

    debug!(
        student = %student.name,
        traits = ?student.traits,
        stress = student.stress,
        "Student created"
    );
    Ok(student)
}

fn draw_per_skill(span: Span, dice: &mut dyn Dice) -> SkillMap {
    Skill::ALL
        .iter()
        .map(|skill| (*skill, dice.uniform(span.low, span.high)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use stargazer_types::{TraitKind, TraitModifier};

    use super::*;

    fn template(kind: TraitKind, modifiers: Vec<TraitModifier>) -> TraitTemplate {
        TraitTemplate {
            kind,
            name: format!("{kind:?}"),
            description: String::new(),
            modifiers,
        }
    }

    fn catalog() -> Vec<TraitTemplate> {
        vec![
            template(
                TraitKind::TheoryProdigy,
                vec![TraitModifier::FloorSkill { skill: Skill::Theory, floor: 60.0 }],
            ),
            template(TraitKind::Lucky, Vec::new()),
            template(
                TraitKind::Fragile,
                vec![TraitModifier::ScaleStressSensitivity(1.5)],
            ),
        ]
    }

    #[test]
    fn created_students_respect_ranges() {
        let config = StudentConfig::default();
        let catalog = catalog();
        let mut rng = SmallRng::seed_from_u64(42);
        for i in 0..100 {
            let student = create_student(format!("S{i}"), &config, &catalog, &mut rng).unwrap();
            assert!(student.is_active());
            assert!(student.traits.len() <= 2);
            assert!((5.0..=20.0).contains(&student.stress));
            for skill in Skill::ALL {
                let rate = student.learning_rate(skill);
                assert!((0.8..=1.2).contains(&rate));
                let value = student.attribute(skill);
                if student.has_trait(TraitKind::TheoryProdigy) && skill == Skill::Theory {
                    assert!(value >= 60.0);
                } else {
                    assert!((10.0..=30.0).contains(&value));
                }
            }
        }
    }

    #[test]
    fn traits_are_distinct() {
        let config = StudentConfig {
            trait_count_weights: vec![0.0, 0.0, 1.0],
            ..StudentConfig::default()
        };
        let catalog = catalog();
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..50 {
            let student = create_student("S".into(), &config, &catalog, &mut rng).unwrap();
            assert_eq!(student.traits.len(), 2);
            assert_ne!(student.traits.first(), student.traits.get(1));
        }
    }

    #[test]
    fn empty_catalog_fails_only_for_nonzero_draws() {
        let mut rng = SmallRng::seed_from_u64(1);
        let none = StudentConfig {
            trait_count_weights: vec![1.0],
            ..StudentConfig::default()
        };
        assert!(create_student("S".into(), &none, &[], &mut rng).is_ok());

        let one = StudentConfig {
            trait_count_weights: vec![0.0, 1.0],
            ..StudentConfig::default()
        };
        assert!(matches!(
            create_student("S".into(), &one, &[], &mut rng),
            Err(RosterError::EmptyTraitCatalog { requested: 1 })
        ));
    }

    #[test]
    fn degenerate_weights_are_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = StudentConfig {
            trait_count_weights: vec![0.0, 0.0],
            ..StudentConfig::default()
        };
        assert!(matches!(
            create_student("S".into(), &config, &catalog(), &mut rng),
            Err(RosterError::InvalidTraitWeights)
        ));
    }
}
