//! The ambient weekly event catalog.
//!
//! Evaluated in order once per non-contest week. Each entry fires on its
//! own independent trial, so several can fire in the same week.

use stargazer_types::{
    AmbientEvent, Condition, Effect, EffectStep, Skill, Target, TraitKind, Weather, skill_map,
};

use crate::magnitude::{
    GAIN, GAIN_MINOR, LOSS_MAJOR, LOSS_MINOR, LOSS_SLIGHT, STRESS_DOWN, STRESS_DOWN_MAJOR,
    STRESS_DOWN_MINOR, STRESS_UP, STRESS_UP_MAJOR, STRESS_UP_MINOR,
};

fn event(probability: f64, description: &str, effect: Effect) -> AmbientEvent {
    AmbientEvent {
        probability,
        description: description.to_owned(),
        effect,
    }
}

const fn stress(amount: f64) -> EffectStep {
    EffectStep::Stress {
        target: Target::Everyone,
        amount,
    }
}

fn skills(deltas: &[(Skill, f64)]) -> EffectStep {
    EffectStep::Skills {
        target: Target::Everyone,
        deltas: deltas.iter().copied().collect(),
    }
}

const fn funds(amount: i64) -> EffectStep {
    EffectStep::Funds { amount }
}

/// The full ambient event catalog, in evaluation order.
pub fn ambient_events() -> Vec<AmbientEvent> {
    use Skill::{Knowledge, Observation, Practical, Theory};

    vec![
        event(
            0.04,
            "A member was caught browsing dubious sites; everyone writes a self-criticism.",
            Effect::always(vec![stress(STRESS_UP)]),
        ),
        event(
            0.03,
            "Flat-earthers invade the club room. Blood pressure soars and knowledge dips.",
            Effect::always(vec![stress(STRESS_UP_MAJOR), skills(&[(Knowledge, LOSS_MINOR)])]),
        ),
        event(
            0.03,
            "A cursed video loops in the club room. Observation, practical and knowledge drop sharply.",
            Effect::always(vec![
                stress(STRESS_UP_MAJOR),
                skills(&[(Knowledge, LOSS_MAJOR), (Observation, LOSS_MAJOR), (Practical, LOSS_MAJOR)]),
            ]),
        ),
        event(
            0.03,
            "A rival academy is livestreaming and everyone is distracted.",
            Effect::always(vec![
                stress(STRESS_UP_MINOR),
                skills(&[(Theory, LOSS_SLIGHT), (Observation, LOSS_SLIGHT), (Practical, LOSS_SLIGHT)]),
            ]),
        ),
        event(
            0.02,
            "The patron member treats the club: +1000 funds.",
            Effect::when(Condition::RosterHas(TraitKind::Patron), vec![funds(1000)]),
        ),
        event(
            0.03,
            "Someone shows up to training in a dress. Morale soars!",
            Effect::always(vec![stress(STRESS_DOWN_MAJOR)]),
        ),
        event(
            0.01,
            "The astrophotographer captured a black hole image.",
            Effect::always(vec![EffectStep::Skills {
                target: Target::Holding(TraitKind::Astrophotographer),
                deltas: skill_map([(Observation, GAIN_MINOR)]),
            }]),
        ),
        event(
            0.02,
            "The cafeteria launched a 'starry drink' (an awful deep blue liquid).",
            Effect::always(vec![stress(STRESS_UP_MINOR)]),
        ),
        event(
            0.04,
            "Days of grey skies and rain. Spirits sink.",
            Effect::when(
                Condition::WeatherIn(vec![Weather::Overcast, Weather::Rain]),
                vec![stress(STRESS_UP_MINOR), skills(&[(Observation, LOSS_MINOR)])],
            ),
        ),
        event(
            0.02,
            "Athletes used the club telescope as a dumbbell. Repairs cost 500.",
            Effect::always(vec![funds(-500)]),
        ),
        event(
            0.02,
            "A fortune-telling stall at the comic convention earned 300.",
            Effect::always(vec![funds(300)]),
        ),
        event(
            0.03,
            "Furry conventions swallow the weekend; coursework suffers.",
            Effect::always(vec![EffectStep::Skills {
                target: Target::Holding(TraitKind::Furry),
                deltas: skill_map([(Knowledge, LOSS_MINOR), (Theory, LOSS_MINOR)]),
            }]),
        ),
        event(
            0.04,
            "Someone found a gossip magazine about famous astronomers.",
            Effect::always(vec![skills(&[(Knowledge, GAIN_MINOR)])]),
        ),
        event(
            0.02,
            "A member looked at the sun without a solar filter. Hospital bills: 500.",
            Effect::always(vec![funds(-500)]),
        ),
        event(
            0.03,
            "A theory craze sweeps the club.",
            Effect::always(vec![skills(&[(Theory, GAIN_MINOR)])]),
        ),
        event(
            0.02,
            "The club president got into astrology and spent 300 on crystal balls.",
            Effect::always(vec![funds(-300)]),
        ),
        event(
            0.03,
            "The club performed a space-opera dance at the school festival.",
            Effect::always(vec![skills(&[(Knowledge, GAIN)])]),
        ),
        event(
            0.08,
            "No-homework day!",
            Effect::always(vec![stress(STRESS_DOWN)]),
        ),
        event(
            0.03,
            "A fragile member had a breakthrough and cheered everyone up.",
            Effect::always(vec![
                stress(STRESS_DOWN),
                EffectStep::Stress {
                    target: Target::Holding(TraitKind::Fragile),
                    amount: STRESS_DOWN_MAJOR,
                },
            ]),
        ),
        event(
            0.02,
            "The planetarium software shipped a great update.",
            Effect::always(vec![skills(&[(Practical, GAIN_MINOR)]), stress(STRESS_DOWN_MINOR)]),
        ),
        event(
            0.01,
            "Horseplay after an observing night. Painful, but everyone is closer now.",
            Effect::always(vec![stress(STRESS_DOWN_MAJOR)]),
        ),
        event(
            0.02,
            "A heated debate about the geopolitics of spaceflight.",
            Effect::always(vec![skills(&[(Theory, GAIN_MINOR)])]),
        ),
        event(
            0.02,
            "A member keeps bragging about acing every olympiad.",
            Effect::always(vec![skills(&[(Knowledge, GAIN_MINOR)]), stress(STRESS_UP)]),
        ),
        event(
            0.01,
            "Meteor storm night! A rare outburst lights up the sky.",
            Effect::always(vec![
                skills(&[(Practical, GAIN_MINOR), (Observation, GAIN_MINOR)]),
                stress(STRESS_DOWN_MAJOR),
            ]),
        ),
        event(
            0.01,
            "Rooftop observing was mistaken for a cult gathering.",
            Effect::always(vec![stress(STRESS_UP_MAJOR)]),
        ),
        event(
            0.02,
            "The student council confiscated the club mascot for being too cute.",
            Effect::always(vec![stress(STRESS_UP_MINOR)]),
        ),
        event(
            0.01,
            "A member spent all night arguing with flat-earthers online.",
            Effect::always(vec![skills(&[(Knowledge, GAIN_MINOR)])]),
        ),
        event(
            0.01,
            "A member swears horoscopes beat physics. The arguments never end.",
            Effect::always(vec![
                skills(&[(Knowledge, LOSS_MINOR), (Theory, GAIN_MINOR)]),
                stress(STRESS_UP_MINOR),
            ]),
        ),
    ]
}
