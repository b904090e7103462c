//! The generic effect application path.
//!
//! Ambient events and contest mini-event outcomes carry [`Effect`]
//! descriptors. [`apply_effect`] is the only code that interprets them: it
//! checks the guard, picks the step list, and runs every step in order
//! against the active students in scope.

use stargazer_ledger::{Adjustment, EntryKind, Ledger};
use stargazer_roster::{Roster, Student, StudentConfig};
use stargazer_types::{Condition, Dice, Effect, EffectStep, StudentId, Target, Tier, Weather};

/// Ambient state an effect is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct EffectContext<'a> {
    /// This week's weather.
    pub weather: Weather,
    /// The contest tier being run, if any.
    pub tier: Option<Tier>,
    /// Multiplier for skill, boost, and stress steps. Funds are never scaled.
    pub factor: f64,
    /// Stress rules for withdrawal checks.
    pub students: &'a StudentConfig,
}

/// Which step list an effect ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// The guard held (or there was none): the main steps ran.
    Steps,
    /// The guard failed and the fallback steps ran.
    Fallback,
    /// The guard failed and there was no fallback.
    Nothing,
}

/// What an effect application did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectReport {
    /// Which step list ran.
    pub branch: Branch,
    /// Names of students who withdrew during the application.
    pub withdrawn: Vec<String>,
    /// Ledger movements, in step order.
    pub funds: Vec<Adjustment>,
}

impl EffectReport {
    /// Whether any step list ran.
    pub fn ran(&self) -> bool {
        self.branch != Branch::Nothing
    }

    /// Whether any ledger movement left the balance negative.
    pub fn overdrew(&self) -> bool {
        self.funds.iter().any(|a| a.overdrawn)
    }
}

/// Whether `condition` holds for the current roster and context.
pub fn condition_holds(condition: &Condition, roster: &Roster, context: &EffectContext<'_>) -> bool {
    match condition {
        Condition::WeatherIn(weathers) => weathers.contains(&context.weather),
        Condition::RosterHas(kind) => roster.any_active_with(*kind),
        Condition::TierIn(tiers) => context.tier.is_some_and(|tier| tiers.contains(&tier)),
    }
}

/// Apply `effect` to the active students in `scope`.
///
/// Every step of the chosen list runs; a student who withdraws part way
/// through is untouched by the remaining steps.
pub fn apply_effect(
    effect: &Effect,
    scope: &[StudentId],
    roster: &mut Roster,
    ledger: &mut Ledger,
    reason: (EntryKind, &str),
    context: &EffectContext<'_>,
    dice: &mut dyn Dice,
) -> EffectReport {
    let (branch, steps) = match &effect.condition {
        Some(condition) if !condition_holds(condition, roster, context) => {
            if effect.fallback.is_empty() {
                (Branch::Nothing, effect.fallback.as_slice())
            } else {
                (Branch::Fallback, effect.fallback.as_slice())
            }
        }
        _ => (Branch::Steps, effect.steps.as_slice()),
    };

    let mut report = EffectReport {
        branch,
        withdrawn: Vec::new(),
        funds: Vec::new(),
    };
    for step in steps {
        apply_step(step, scope, roster, ledger, reason, context, dice, &mut report);
    }
    report
}

#[allow(clippy::too_many_arguments)]
fn apply_step(
    step: &EffectStep,
    scope: &[StudentId],
    roster: &mut Roster,
    ledger: &mut Ledger,
    (kind, reason): (EntryKind, &str),
    context: &EffectContext<'_>,
    dice: &mut dyn Dice,
    report: &mut EffectReport,
) {
    let factor = context.factor;
    match step {
        EffectStep::Skills { target, deltas } => {
            for student in roster.active_mut() {
                if is_targeted(student, *target, scope) {
                    student.adjust_skills(deltas, factor);
                }
            }
        }
        EffectStep::Boost { target, deltas } => {
            for student in roster.active_mut() {
                if is_targeted(student, *target, scope) {
                    student.boost(deltas, factor);
                }
            }
        }
        EffectStep::Stress { target, amount } | EffectStep::FixedStress { target, amount } => {
            let amount = if matches!(step, EffectStep::Stress { .. }) {
                amount * factor
            } else {
                *amount
            };
            for student in roster.active_mut() {
                if is_targeted(student, *target, scope)
                    && student.apply_stress(amount, context.students, dice)
                {
                    report.withdrawn.push(student.name.clone());
                }
            }
        }
        EffectStep::Funds { amount } => {
            report.funds.push(ledger.adjust(*amount, kind, reason));
        }
    }
}

fn is_targeted(student: &Student, target: Target, scope: &[StudentId]) -> bool {
    let holds = match target {
        Target::Everyone => true,
        Target::Holding(kind) => student.has_trait(kind),
    };
    holds && scope.contains(&student.id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use stargazer_types::{Skill, TraitKind, skill_map};

    use super::*;

    fn context(students: &StudentConfig) -> EffectContext<'_> {
        EffectContext {
            weather: Weather::Clear,
            tier: None,
            factor: 1.0,
            students,
        }
    }

    fn roster_with_traits(traits: &[&[TraitKind]]) -> Roster {
        traits
            .iter()
            .enumerate()
            .map(|(i, held)| {
                let mut student = Student::uniform(format!("S{i}"), 20.0);
                student.traits = held.to_vec();
                student
            })
            .collect()
    }

    fn everyone(roster: &Roster) -> Vec<StudentId> {
        roster.iter().map(|s| s.id).collect()
    }

    #[test]
    fn holding_targets_only_trait_holders() {
        let config = StudentConfig::default();
        let mut roster = roster_with_traits(&[&[TraitKind::Fragile], &[]]);
        let scope = everyone(&roster);
        let effect = Effect::always(vec![EffectStep::Stress {
            target: Target::Holding(TraitKind::Fragile),
            amount: 10.0,
        }]);
        let mut ledger = Ledger::new(0);
        let mut rng = SmallRng::seed_from_u64(1);
        apply_effect(
            &effect,
            &scope,
            &mut roster,
            &mut ledger,
            (EntryKind::Event, "test"),
            &context(&config),
            &mut rng,
        );
        let stresses: Vec<f64> = roster.iter().map(|s| s.stress).collect();
        assert!((stresses.first().copied().unwrap() - 10.0).abs() < 1e-9);
        assert!(stresses.get(1).copied().unwrap().abs() < 1e-9);
    }

    #[test]
    fn unmet_guard_without_fallback_does_nothing() {
        let config = StudentConfig::default();
        let mut roster = roster_with_traits(&[&[]]);
        let scope = everyone(&roster);
        let effect = Effect::when(
            Condition::RosterHas(TraitKind::Patron),
            vec![EffectStep::Funds { amount: 1000 }],
        );
        let mut ledger = Ledger::new(100);
        let mut rng = SmallRng::seed_from_u64(1);
        let report = apply_effect(
            &effect,
            &scope,
            &mut roster,
            &mut ledger,
            (EntryKind::Event, "treat"),
            &context(&config),
            &mut rng,
        );
        assert_eq!(report.branch, Branch::Nothing);
        assert!(!report.ran());
        assert_eq!(ledger.balance(), 100);
    }

    #[test]
    fn unmet_guard_runs_the_fallback() {
        let config = StudentConfig::default();
        let mut roster = roster_with_traits(&[&[]]);
        let scope = everyone(&roster);
        let effect = Effect::when(
            Condition::TierIn(vec![Tier::Province]),
            vec![EffectStep::Boost {
                target: Target::Everyone,
                deltas: skill_map([(Skill::Observation, 3.0)]),
            }],
        )
        .otherwise(vec![EffectStep::Stress {
            target: Target::Everyone,
            amount: 3.0,
        }]);
        let mut ledger = Ledger::new(0);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ctx = context(&config);
        ctx.tier = Some(Tier::City);
        let report = apply_effect(
            &effect,
            &scope,
            &mut roster,
            &mut ledger,
            (EntryKind::Contest, "scouting"),
            &ctx,
            &mut rng,
        );
        assert_eq!(report.branch, Branch::Fallback);
        let student = roster.iter().next().unwrap();
        assert!((student.stress - 3.0).abs() < 1e-9);
        assert!(student.temporary.is_empty());
    }

    #[test]
    fn factor_scales_skills_but_not_funds() {
        let config = StudentConfig::default();
        let mut roster = roster_with_traits(&[&[]]);
        let scope = everyone(&roster);
        let effect = Effect::always(vec![
            EffectStep::Skills {
                target: Target::Everyone,
                deltas: skill_map([(Skill::Knowledge, 1.5)]),
            },
            EffectStep::Funds { amount: -200 },
        ]);
        let mut ledger = Ledger::new(100);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ctx = context(&config);
        ctx.factor = 2.0;
        let report = apply_effect(
            &effect,
            &scope,
            &mut roster,
            &mut ledger,
            (EntryKind::Contest, "night out"),
            &ctx,
            &mut rng,
        );
        let student = roster.iter().next().unwrap();
        assert!((student.attribute(Skill::Knowledge) - 23.0).abs() < 1e-9);
        assert_eq!(ledger.balance(), -100);
        assert!(report.overdrew());
    }

    #[test]
    fn fixed_stress_ignores_the_factor() {
        let config = StudentConfig::default();
        let mut roster = roster_with_traits(&[&[]]);
        let scope = everyone(&roster);
        let effect = Effect::always(vec![
            EffectStep::Stress {
                target: Target::Everyone,
                amount: 3.0,
            },
            EffectStep::FixedStress {
                target: Target::Everyone,
                amount: 5.0,
            },
        ]);
        let mut ledger = Ledger::new(0);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ctx = context(&config);
        ctx.factor = 2.0;
        apply_effect(
            &effect,
            &scope,
            &mut roster,
            &mut ledger,
            (EntryKind::Contest, "chat"),
            &ctx,
            &mut rng,
        );
        let student = roster.iter().next().unwrap();
        assert!((student.stress - 11.0).abs() < 1e-9);
    }

    #[test]
    fn students_outside_the_scope_are_untouched() {
        let config = StudentConfig::default();
        let mut roster = roster_with_traits(&[&[], &[]]);
        let scope: Vec<StudentId> = roster.iter().take(1).map(|s| s.id).collect();
        let effect = Effect::always(vec![EffectStep::Skills {
            target: Target::Everyone,
            deltas: skill_map([(Skill::Theory, 4.0)]),
        }]);
        let mut ledger = Ledger::new(0);
        let mut rng = SmallRng::seed_from_u64(1);
        apply_effect(
            &effect,
            &scope,
            &mut roster,
            &mut ledger,
            (EntryKind::Contest, "cramming"),
            &context(&config),
            &mut rng,
        );
        let theory: Vec<f64> = roster.iter().map(|s| s.attribute(Skill::Theory)).collect();
        assert_eq!(theory.len(), 2);
        assert!((theory.first().copied().unwrap() - 24.0).abs() < 1e-9);
        assert!((theory.get(1).copied().unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn weather_guard_reads_the_context() {
        let config = StudentConfig::default();
        let roster = roster_with_traits(&[&[]]);
        let mut ctx = context(&config);
        let grey = Condition::WeatherIn(vec![Weather::Overcast, Weather::Rain]);
        assert!(!condition_holds(&grey, &roster, &ctx));
        ctx.weather = Weather::Rain;
        assert!(condition_holds(&grey, &roster, &ctx));
    }
}
