//! The trait catalog.
//!
//! Traits with an empty modifier list have no creation-time effect and
//! only matter to later probability tables (weather, score variance,
//! ambient events, social mini-events).

use stargazer_types::{Skill, TraitKind, TraitModifier, TraitTemplate};

fn template(kind: TraitKind, name: &str, description: &str, modifiers: Vec<TraitModifier>) -> TraitTemplate {
    TraitTemplate {
        kind,
        name: name.to_owned(),
        description: description.to_owned(),
        modifiers,
    }
}

/// The full trait catalog, one template per [`TraitKind`].
pub fn trait_catalog() -> Vec<TraitTemplate> {
    use TraitModifier::{
        CapSkill, FloorSkill, RaiseSkill, ScaleAllLearningRates, ScaleLearningRate,
        ScaleStressSensitivity,
    };

    vec![
        template(
            TraitKind::Furry,
            "Furry",
            "Cannot resist anything fluffy. Extra knowledge, slightly more stress-sensitive.",
            vec![
                RaiseSkill { skill: Skill::Knowledge, amount: 15.0 },
                ScaleStressSensitivity(1.2),
            ],
        ),
        template(
            TraitKind::CloudBringer,
            "Cloud Bringer",
            "Clouds gather wherever they go. Overcast weeks become more likely.",
            Vec::new(),
        ),
        template(
            TraitKind::Astrophotographer,
            "Astrophotographer",
            "Gear collector. Strong observer who hates reducing data.",
            vec![
                FloorSkill { skill: Skill::Observation, floor: 60.0 },
                ScaleLearningRate { skill: Skill::Practical, factor: 0.8 },
            ],
        ),
        template(
            TraitKind::Patron,
            "Patron",
            "Wealthy family, cheerful and resilient. Sponsors the club at recruitment.",
            vec![ScaleStressSensitivity(0.8)],
        ),
        template(
            TraitKind::Fragile,
            "Fragile",
            "Very sensitive and quick to quit, but learns theory fast.",
            vec![
                ScaleStressSensitivity(1.5),
                ScaleLearningRate { skill: Skill::Theory, factor: 1.3 },
            ],
        ),
        template(
            TraitKind::Crank,
            "Crank",
            "Always has a shocking new theory. Slow to absorb established knowledge.",
            vec![ScaleLearningRate { skill: Skill::Knowledge, factor: 0.5 }],
        ),
        template(
            TraitKind::NightOwl,
            "Night Owl",
            "Sleeps four hours a night. Every learning rate slightly up.",
            vec![ScaleAllLearningRates(1.1)],
        ),
        template(
            TraitKind::Lucky,
            "Lucky",
            "Exam luck is remarkably good.",
            Vec::new(),
        ),
        template(
            TraitKind::Unlucky,
            "Unlucky",
            "Exam luck is remarkably bad.",
            Vec::new(),
        ),
        template(
            TraitKind::TheoryProdigy,
            "Theory Prodigy",
            "Obsessed with derivations. Strong theory and learns it fast.",
            vec![
                FloorSkill { skill: Skill::Theory, floor: 60.0 },
                ScaleLearningRate { skill: Skill::Theory, factor: 1.3 },
            ],
        ),
        template(
            TraitKind::Eccentric,
            "Eccentric",
            "A little odd. Harmless.",
            Vec::new(),
        ),
        template(
            TraitKind::Sleepyhead,
            "Sleepyhead",
            "Needs ten hours of sleep. Resilient, slower in theory and observation.",
            vec![
                ScaleStressSensitivity(0.7),
                ScaleLearningRate { skill: Skill::Theory, factor: 0.8 },
                ScaleLearningRate { skill: Skill::Observation, factor: 0.8 },
            ],
        ),
        template(
            TraitKind::DataWizard,
            "Data Wizard",
            "Addicted to 3D modelling. Strong practical skills, slightly faster theory.",
            vec![
                FloorSkill { skill: Skill::Practical, floor: 50.0 },
                ScaleLearningRate { skill: Skill::Theory, factor: 1.1 },
            ],
        ),
        template(
            TraitKind::Bluffer,
            "Bluffer",
            "Astonishing trivia, falls apart in exams.",
            vec![FloorSkill { skill: Skill::Knowledge, floor: 55.0 }],
        ),
        template(
            TraitKind::CrossDresser,
            "Cross-Dresser",
            "Keeps the club lively. Slightly less stress-sensitive.",
            vec![ScaleStressSensitivity(0.9)],
        ),
        template(
            TraitKind::XenoEnthusiast,
            "Xeno Enthusiast",
            "Believes in alien life. Slightly faster theory learner.",
            vec![ScaleLearningRate { skill: Skill::Theory, factor: 1.1 }],
        ),
        template(
            TraitKind::Nearsighted,
            "Nearsighted",
            "Cannot see much through the eyepiece. Observation starts low.",
            vec![CapSkill { skill: Skill::Observation, cap: 15.0 }],
        ),
        template(
            TraitKind::Socialite,
            "Socialite",
            "Talks to everyone. Doubles the effect of social activities at contests.",
            Vec::new(),
        ),
        template(
            TraitKind::Homebody,
            "Homebody",
            "Rarely leaves the house. Resilient, slower at general knowledge.",
            vec![
                ScaleStressSensitivity(0.8),
                ScaleLearningRate { skill: Skill::Knowledge, factor: 0.8 },
            ],
        ),
    ]
}

/// Find the template for `kind` in `catalog`.
pub fn find_trait(catalog: &[TraitTemplate], kind: TraitKind) -> Option<&TraitTemplate> {
    catalog.iter().find(|t| t.kind == kind)
}
