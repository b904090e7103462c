//! The contest mini-event catalog.
//!
//! During a tier's interactive phase, each day offers a few of these.
//! The controlling party picks one and then one of its choices; a weighted
//! outcome of that choice is drawn and applied to the participants.

use stargazer_types::{
    Condition, Effect, EffectStep, MiniChoice, MiniEvent, MiniOutcome, Skill, Target, Tier,
    skill_map,
};

use crate::magnitude::{
    GAIN, GAIN_MINOR, STRESS_DOWN, STRESS_DOWN_MAJOR, STRESS_DOWN_MINOR, STRESS_UP,
    STRESS_UP_MINOR,
};

const fn stress(amount: f64) -> EffectStep {
    EffectStep::Stress {
        target: Target::Everyone,
        amount,
    }
}

/// Stress from whatever happened during a social outing; a socialite
/// does not amplify it.
const fn aftermath(amount: f64) -> EffectStep {
    EffectStep::FixedStress {
        target: Target::Everyone,
        amount,
    }
}

fn learn(skill: Skill, amount: f64) -> EffectStep {
    EffectStep::Skills {
        target: Target::Everyone,
        deltas: skill_map([(skill, amount)]),
    }
}

fn boost(skill: Skill, amount: f64) -> EffectStep {
    EffectStep::Boost {
        target: Target::Everyone,
        deltas: skill_map([(skill, amount)]),
    }
}

fn outcome(weight: f64, description: &str, effect: Effect) -> MiniOutcome {
    MiniOutcome {
        weight,
        description: description.to_owned(),
        effect,
    }
}

fn choice(label: &str, social: bool, outcomes: Vec<MiniOutcome>) -> MiniChoice {
    MiniChoice {
        label: label.to_owned(),
        social,
        outcomes,
    }
}

/// A choice with a single certain outcome.
fn certain(label: &str, description: &str, effect: Effect) -> MiniChoice {
    choice(label, false, vec![outcome(1.0, description, effect)])
}

fn mini_event(name: &str, choices: Vec<MiniChoice>) -> MiniEvent {
    MiniEvent {
        name: name.to_owned(),
        choices,
    }
}

/// The full mini-event catalog.
pub fn mini_event_catalog() -> Vec<MiniEvent> {
    vec![
        mini_event(
            "Last-minute cramming",
            vec![
                certain(
                    "Grind problem sets in the hotel",
                    "Everyone grinds problem sets late into the night.",
                    Effect::always(vec![boost(Skill::Theory, GAIN), stress(STRESS_UP_MINOR)]),
                ),
                certain(
                    "Review data-analysis tricks",
                    "A quiet evening of reviewing error propagation.",
                    Effect::always(vec![boost(Skill::Practical, GAIN_MINOR)]),
                ),
            ],
        ),
        mini_event(
            "Mingle with other schools",
            vec![
                choice(
                    "Go and chat",
                    true,
                    vec![
                        outcome(
                            1.0,
                            "Met a legendary prodigy and felt crushed.",
                            Effect::always(vec![
                                learn(Skill::Knowledge, GAIN_MINOR),
                                stress(STRESS_DOWN_MINOR),
                                aftermath(STRESS_UP_MINOR),
                            ]),
                        ),
                        outcome(
                            1.0,
                            "Met someone charming and left in a great mood.",
                            Effect::always(vec![
                                learn(Skill::Knowledge, GAIN_MINOR),
                                stress(STRESS_DOWN_MINOR),
                                aftermath(STRESS_DOWN_MINOR),
                            ]),
                        ),
                        outcome(
                            1.0,
                            "Heard the rival school all caught a cold. Secret glee.",
                            Effect::always(vec![
                                learn(Skill::Knowledge, GAIN_MINOR),
                                stress(STRESS_DOWN_MINOR),
                                aftermath(STRESS_DOWN_MINOR),
                            ]),
                        ),
                    ],
                ),
                certain(
                    "Stay in the room",
                    "Everyone stays in and reads quietly.",
                    Effect::always(vec![stress(STRESS_DOWN_MINOR)]),
                ),
            ],
        ),
        mini_event(
            "Unwind before the exam",
            vec![
                certain(
                    "Treat everyone to a feast",
                    "A proper dinner works wonders.",
                    Effect::always(vec![stress(STRESS_DOWN_MAJOR)]),
                ),
                choice(
                    "Hotel karaoke night",
                    true,
                    vec![outcome(
                        1.0,
                        "Singing until the front desk calls.",
                        Effect::always(vec![stress(STRESS_DOWN)]),
                    )],
                ),
            ],
        ),
        mini_event(
            "Scout the venue",
            vec![certain(
                "Walk the observing field",
                "Scouting the exam venue pays off.",
                Effect::when(
                    Condition::TierIn(vec![Tier::Province, Tier::NationalFinal]),
                    vec![boost(Skill::Observation, GAIN)],
                )
                .otherwise(vec![stress(STRESS_UP_MINOR)]),
            )],
        ),
        mini_event(
            "A rival's challenge",
            vec![
                choice(
                    "Accept the mock exam",
                    false,
                    vec![
                        outcome(
                            1.0,
                            "Beat the rivals. Confidence is sky high.",
                            Effect::always(vec![
                                boost(Skill::Practical, GAIN),
                                stress(STRESS_DOWN_MINOR),
                            ]),
                        ),
                        outcome(
                            1.0,
                            "Lost badly. Morale takes a hit.",
                            Effect::always(vec![stress(STRESS_UP)]),
                        ),
                    ],
                ),
                certain(
                    "Politely decline",
                    "No need to prove anything tonight.",
                    Effect::always(vec![stress(STRESS_DOWN_MINOR)]),
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_choice_has_a_positive_outcome_weight() {
        for event in mini_event_catalog() {
            assert!(!event.choices.is_empty(), "{} has no choices", event.name);
            for choice in &event.choices {
                assert!(choice.outcomes.iter().any(|o| o.weight > 0.0));
            }
        }
    }

    #[test]
    fn catalog_is_larger_than_a_day_offer() {
        assert!(mini_event_catalog().len() > 3);
    }

    #[test]
    fn chat_aftermath_is_not_amplified() {
        let catalog = mini_event_catalog();
        let chat = catalog
            .iter()
            .flat_map(|event| &event.choices)
            .find(|choice| choice.label == "Go and chat");
        assert!(chat.is_some_and(|choice| choice.social));
        for outcome in chat.iter().flat_map(|choice| &choice.outcomes) {
            let fixed = outcome
                .effect
                .steps
                .iter()
                .filter(|step| matches!(step, EffectStep::FixedStress { .. }))
                .count();
            assert_eq!(fixed, 1, "{}", outcome.description);
        }
    }
}
