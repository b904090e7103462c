//! The ambient event engine.
//!
//! Every non-contest week the catalog is walked in order and each entry
//! gets its own Bernoulli trial. Entries are independent: any number of
//! them, including none, may fire in the same week.

use stargazer_ledger::{EntryKind, Ledger};
use stargazer_roster::Roster;
use stargazer_types::{AmbientEvent, Dice, StudentId};
use tracing::debug;

use crate::effects::{EffectContext, EffectReport, apply_effect};

/// An ambient event that fired and had an effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredEvent {
    /// The event's journal text.
    pub description: String,
    /// What the effect did.
    pub report: EffectReport,
}

/// Evaluate the ambient catalog once against every active student.
///
/// An entry whose trial succeeds but whose guard does not hold (and has no
/// fallback) is dropped from the result.
pub fn run_ambient_events(
    events: &[AmbientEvent],
    roster: &mut Roster,
    ledger: &mut Ledger,
    context: &EffectContext<'_>,
    dice: &mut dyn Dice,
) -> Vec<FiredEvent> {
    let mut fired = Vec::new();
    for event in events {
        if !dice.chance(event.probability) {
            continue;
        }
        let scope: Vec<StudentId> = roster.active().map(|s| s.id).collect();
        let report = apply_effect(
            &event.effect,
            &scope,
            roster,
            ledger,
            (EntryKind::Event, &event.description),
            context,
            dice,
        );
        if report.ran() {
            debug!(event = %event.description, withdrawn = report.withdrawn.len(), "Ambient event fired");
            fired.push(FiredEvent {
                description: event.description.clone(),
                report,
            });
        }
    }
    fired
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use stargazer_roster::{Student, StudentConfig};
    use stargazer_types::{Condition, Effect, EffectStep, Target, TraitKind, Weather};

    use super::*;

    fn event(probability: f64, description: &str, effect: Effect) -> AmbientEvent {
        AmbientEvent {
            probability,
            description: description.to_owned(),
            effect,
        }
    }

    fn stress(amount: f64) -> Effect {
        Effect::always(vec![EffectStep::Stress {
            target: Target::Everyone,
            amount,
        }])
    }

    #[test]
    fn certain_events_all_fire_in_order() {
        let config = StudentConfig::default();
        let context = EffectContext {
            weather: Weather::Clear,
            tier: None,
            factor: 1.0,
            students: &config,
        };
        let events = vec![
            event(1.0, "first", stress(4.0)),
            event(0.0, "never", stress(50.0)),
            event(1.0, "second", Effect::always(vec![EffectStep::Funds { amount: -300 }])),
        ];
        let mut roster: Roster = std::iter::once(Student::uniform("A", 20.0)).collect();
        let mut ledger = Ledger::new(100);
        let mut rng = SmallRng::seed_from_u64(2);
        let fired = run_ambient_events(&events, &mut roster, &mut ledger, &context, &mut rng);

        let names: Vec<&str> = fired.iter().map(|f| f.description.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(ledger.balance(), -200);
        assert!(fired.last().unwrap().report.overdrew());
        let student = roster.iter().next().unwrap();
        assert!((student.stress - 4.0).abs() < 1e-9);
    }

    #[test]
    fn guarded_events_without_their_condition_are_not_reported() {
        let config = StudentConfig::default();
        let context = EffectContext {
            weather: Weather::Clear,
            tier: None,
            factor: 1.0,
            students: &config,
        };
        let events = vec![event(
            1.0,
            "patron treat",
            Effect::when(
                Condition::RosterHas(TraitKind::Patron),
                vec![EffectStep::Funds { amount: 1000 }],
            ),
        )];
        let mut roster: Roster = std::iter::once(Student::uniform("A", 20.0)).collect();
        let mut ledger = Ledger::new(0);
        let mut rng = SmallRng::seed_from_u64(2);
        let fired = run_ambient_events(&events, &mut roster, &mut ledger, &context, &mut rng);
        assert!(fired.is_empty());
        assert_eq!(ledger.balance(), 0);
    }

    #[test]
    fn withdrawn_students_are_not_affected() {
        let config = StudentConfig::default();
        let context = EffectContext {
            weather: Weather::Clear,
            tier: None,
            factor: 1.0,
            students: &config,
        };
        let mut gone = Student::uniform("Gone", 20.0);
        gone.status = stargazer_types::Status::Withdrawn;
        let mut roster: Roster = std::iter::once(gone).collect();
        let mut ledger = Ledger::new(0);
        let mut rng = SmallRng::seed_from_u64(2);
        run_ambient_events(
            &[event(1.0, "bad week", stress(30.0))],
            &mut roster,
            &mut ledger,
            &context,
            &mut rng,
        );
        assert!(roster.iter().next().unwrap().stress.abs() < 1e-9);
    }
}
