//! The contest pipeline.
//!
//! A checkpoint week runs one tier of the ladder instead of the normal
//! weekly cycle:
//!
//! 1. **Eligibility** -- the candidate set is derived from the roster (or,
//!    for the international tier, from the national team recorded at the
//!    year boundary). Only active candidates take part; an empty field
//!    skips the tier.
//! 2. **Interactive phase** -- temporary bonuses are cleared, then each
//!    interactive day offers a few mini-events. The chosen branch's weighted
//!    outcome is applied to the participants through the generic effect
//!    path.
//! 3. **Scoring and ranking** -- every participant is scored against the
//!    tier's weights and ranked best first.
//! 4. **Promotion** -- participants within the cutoff and at or above the
//!    score floor promote and take the tier as their honor.
//! 5. **Stress** -- every participant takes contest stress, and everyone
//!    who did not promote takes elimination stress on top.
//!
//! The participant set is passed explicitly; the roster itself is never
//! filtered or swapped out.

use stargazer_ledger::EntryKind;
use stargazer_roster::{Roster, StudentConfig};
use stargazer_types::{Dice, Skill, SkillMap, StudentId, Tier, TraitKind, Weather};
use tracing::{info, warn};

use crate::config::{ContestConfig, TierRules};
use crate::decision::DecisionSource;
use crate::effects::{Branch, EffectContext, apply_effect};
use crate::session::Session;

/// One participant's result.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    /// Who.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// Contest score in `[0, 100]`.
    pub score: f64,
    /// Whether the participant promoted out of the tier.
    pub promoted: bool,
    /// Whether the participant withdrew under contest stress.
    pub withdrew: bool,
}

/// The result of running one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct ContestOutcome {
    /// The tier that ran.
    pub tier: Tier,
    /// Participants ranked best first. Empty when the tier was skipped.
    pub standings: Vec<Standing>,
    /// Whether the tier was skipped for lack of participants.
    pub skipped: bool,
    /// Skill whose weight was dropped by bad weather, if any.
    pub dropped_skill: Option<Skill>,
}

impl ContestOutcome {
    const fn skipped(tier: Tier) -> Self {
        Self {
            tier,
            standings: Vec::new(),
            skipped: true,
            dropped_skill: None,
        }
    }

    /// Standings of the participants who promoted, best first.
    pub fn promoted(&self) -> impl Iterator<Item = &Standing> {
        self.standings.iter().filter(|s| s.promoted)
    }

    /// Whether anyone promoted.
    pub fn any_promoted(&self) -> bool {
        self.promoted().next().is_some()
    }
}

/// Everything scoring needs to know about the tier being run.
#[derive(Debug, Clone, Copy)]
pub struct ContestSetup<'a> {
    /// The tier being run.
    pub tier: Tier,
    /// Its rules.
    pub rules: &'a TierRules,
    /// The week's weather.
    pub weather: Weather,
    /// Shared contest parameters.
    pub contest: &'a ContestConfig,
    /// Stress rules.
    pub students: &'a StudentConfig,
}

/// Candidates for a roster-gated tier.
///
/// City and national-preliminary are open to every active student;
/// province and national-final require the preceding tier's honor. The
/// international tier is gated on the national team instead and yields
/// no candidates here.
pub fn eligible_for(tier: Tier, roster: &Roster) -> Vec<StudentId> {
    match tier {
        Tier::International => Vec::new(),
        _ => roster
            .active()
            .filter(|s| tier.required_honor().is_none_or(|honor| s.holds_honor(honor)))
            .map(|s| s.id)
            .collect(),
    }
}

/// The tier's weights for this week, and the skill bad weather dropped.
pub fn effective_weights(rules: &TierRules, weather: Weather) -> (SkillMap, Option<Skill>) {
    let mut weights = rules.weights.clone();
    let dropped = rules
        .adverse_weather_drops
        .filter(|_| weather.is_adverse());
    if let Some(skill) = dropped {
        weights.insert(skill, 0.0);
    }
    (weights, dropped)
}

/// Score, rank, promote, and stress the participants of one tier.
///
/// Honors are written before any stress is applied, so a promoted student
/// who then withdraws keeps the result. Ties keep participant order.
pub fn settle_contest(
    setup: &ContestSetup<'_>,
    participants: &[StudentId],
    roster: &mut Roster,
    dice: &mut dyn Dice,
) -> ContestOutcome {
    let (weights, dropped_skill) = effective_weights(setup.rules, setup.weather);

    let mut standings: Vec<Standing> = Vec::with_capacity(participants.len());
    for id in participants {
        let Ok(student) = roster.get(*id) else {
            continue;
        };
        if !student.is_active() {
            continue;
        }
        standings.push(Standing {
            id: *id,
            name: student.name.clone(),
            score: student.contest_score(&weights, &setup.students.variance, dice),
            promoted: false,
            withdrew: false,
        });
    }
    standings.sort_by(|a, b| b.score.total_cmp(&a.score));

    let places = setup.rules.cutoff.limit(standings.len());
    for (rank, standing) in standings.iter_mut().enumerate() {
        standing.promoted = rank < places && standing.score >= setup.rules.score_floor;
        if standing.promoted
            && let Ok(student) = roster.get_mut(standing.id)
        {
            student.award_honor(setup.tier);
        }
    }

    for standing in &mut standings {
        let Ok(student) = roster.get_mut(standing.id) else {
            continue;
        };
        standing.withdrew = student.apply_stress(setup.contest.contest_stress, setup.students, dice);
        if !standing.promoted && !standing.withdrew {
            standing.withdrew =
                student.apply_stress(setup.contest.elimination_stress, setup.students, dice);
        }
    }

    ContestOutcome {
        tier: setup.tier,
        standings,
        skipped: false,
        dropped_skill,
    }
}

/// Run `tier` against the session: eligibility, interactive phase,
/// settlement, journal, and the victory check.
pub fn run_contest(
    session: &mut Session,
    tier: Tier,
    decisions: &mut dyn DecisionSource,
    dice: &mut dyn Dice,
) -> ContestOutcome {
    let candidates = if tier == Tier::International {
        std::mem::take(&mut session.national_team)
    } else {
        eligible_for(tier, &session.roster)
    };
    let participants: Vec<StudentId> = candidates
        .into_iter()
        .filter(|id| session.roster.get(*id).is_ok_and(|s| s.is_active()))
        .collect();

    if participants.is_empty() {
        info!(%tier, "Contest skipped: no eligible participants");
        session.log(format!("{tier}: nobody is eligible, the round is skipped."));
        return ContestOutcome::skipped(tier);
    }

    session.roster.clear_boosts();
    session.log(format!(
        "{tier} begins with {} participant(s).",
        participants.len()
    ));
    decisions.on_contest_start(session, tier);

    let days = session.config.contest.tiers.rules(tier).interactive_days;
    for day in 1..=days {
        run_interactive_day(session, tier, (day, days), &participants, decisions, dice);
    }

    let setup = ContestSetup {
        tier,
        rules: session.config.contest.tiers.rules(tier),
        weather: session.weather,
        contest: &session.config.contest,
        students: &session.config.roster,
    };
    let outcome = settle_contest(&setup, &participants, &mut session.roster, dice);

    record_outcome(session, &outcome);
    decisions.on_contest_result(session, &outcome);
    outcome
}

fn run_interactive_day(
    session: &mut Session,
    tier: Tier,
    (day, days): (u32, u32),
    participants: &[StudentId],
    decisions: &mut dyn DecisionSource,
    dice: &mut dyn Dice,
) {
    let offered = dice.distinct(
        session.catalogs.mini_events.len(),
        session.config.contest.offers_per_day,
    );
    let event = {
        let offers: Vec<_> = offered
            .iter()
            .filter_map(|index| session.catalogs.mini_events.get(*index))
            .collect();
        let pick = decisions.choose_mini_event(session, tier, day, days, &offers);
        if pick >= offers.len() {
            warn!(pick, offers = offers.len(), "Mini-event pick out of range, taking the first");
        }
        let Some(event) = offers.get(pick).or_else(|| offers.first()) else {
            return;
        };
        (*event).clone()
    };

    let branch = decisions.choose_branch(session, &event);
    if branch >= event.choices.len() {
        warn!(branch, event = %event.name, "Branch out of range, taking the first");
    }
    let Some(choice) = event.choices.get(branch).or_else(|| event.choices.first()) else {
        return;
    };
    let weights: Vec<f64> = choice.outcomes.iter().map(|o| o.weight).collect();
    let Some(outcome) = dice.weighted(&weights).and_then(|i| choice.outcomes.get(i)) else {
        warn!(choice = %choice.label, "Choice has no drawable outcome");
        return;
    };

    let socialite = participants.iter().any(|id| {
        session
            .roster
            .get(*id)
            .is_ok_and(|s| s.is_active() && s.has_trait(TraitKind::Socialite))
    });
    let factor = if choice.social && socialite {
        session.config.contest.social_factor
    } else {
        1.0
    };

    let context = EffectContext {
        weather: session.weather,
        tier: Some(tier),
        factor,
        students: &session.config.roster,
    };
    let report = apply_effect(
        &outcome.effect,
        participants,
        &mut session.roster,
        &mut session.ledger,
        (EntryKind::Contest, &outcome.description),
        &context,
        dice,
    );

    match report.branch {
        Branch::Fallback => session.log(format!(
            "Day {day}/{days}, {}: {}. It made no difference this time.",
            event.name, choice.label
        )),
        Branch::Steps | Branch::Nothing => session.log(format!(
            "Day {day}/{days}, {}: {}",
            event.name, outcome.description
        )),
    }
    if factor > 1.0 {
        session.log("The socialite made the most of it.".to_owned());
    }
    if report.overdrew() {
        session.log("Club funds are overdrawn.".to_owned());
    }
    for name in report.withdrawn {
        session.log(format!("{name} could not take the pressure and left the club."));
    }
}

fn record_outcome(session: &mut Session, outcome: &ContestOutcome) {
    let tier = outcome.tier;
    if let Some(skill) = outcome.dropped_skill {
        session.log(format!(
            "{tier}: the {} round was cancelled by the weather.",
            skill.label()
        ));
    }
    for standing in &outcome.standings {
        let verdict = if standing.promoted { "advances" } else { "is eliminated" };
        session.log(format!("{}: {:.1}, {verdict}.", standing.name, standing.score));
        if standing.withdrew {
            session.log(format!("{} left the club after the contest.", standing.name));
        }
    }

    let promoted: Vec<String> = outcome.promoted().map(|s| s.name.clone()).collect();
    info!(
        %tier,
        participants = outcome.standings.len(),
        promoted = promoted.len(),
        "Contest settled"
    );
    if promoted.is_empty() {
        session.log(format!("Nobody made the {}.", tier.honor_title()));
    } else {
        session.log(format!(
            "{} made the {}.",
            promoted.join(", "),
            tier.honor_title()
        ));
    }

    if tier == Tier::International && !promoted.is_empty() {
        info!(champions = ?promoted, "International olympiad won");
        session.victory = true;
        session.champions = promoted;
        session.log("The club has conquered the International Olympiad!".to_owned());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use stargazer_roster::Student;
    use stargazer_types::skill_map;

    use super::*;
    use crate::config::Cutoff;

    /// Dice with every perturbation pinned to zero and trials at 0.5.
    struct PinnedDice;

    impl Dice for PinnedDice {
        fn unit(&mut self) -> f64 {
            0.5
        }

        fn uniform(&mut self, low: f64, high: f64) -> f64 {
            0.0_f64.clamp(low.min(high), high.max(low))
        }

        fn below(&mut self, _bound: usize) -> usize {
            0
        }
    }

    fn rules(cutoff: Cutoff, score_floor: f64) -> TierRules {
        TierRules {
            weights: skill_map([(Skill::Theory, 1.0)]),
            cutoff,
            score_floor,
            interactive_days: 0,
            adverse_weather_drops: None,
        }
    }

    fn field(bases: &[f64]) -> Roster {
        bases
            .iter()
            .enumerate()
            .map(|(i, base)| Student::uniform(format!("S{i}"), *base))
            .collect()
    }

    fn settle(
        tier: Tier,
        rules: &TierRules,
        roster: &mut Roster,
        contest: &ContestConfig,
        students: &StudentConfig,
    ) -> ContestOutcome {
        let participants: Vec<StudentId> = roster.iter().map(|s| s.id).collect();
        let setup = ContestSetup {
            tier,
            rules,
            weather: Weather::Clear,
            contest,
            students,
        };
        settle_contest(&setup, &participants, roster, &mut PinnedDice)
    }

    #[test]
    fn fraction_cutoff_promotes_the_top_four_of_five() {
        let mut roster = field(&[40.0, 80.0, 60.0, 70.0, 50.0]);
        let rules = rules(Cutoff::Fraction(0.8), 32.0);
        let outcome = settle(
            Tier::City,
            &rules,
            &mut roster,
            &ContestConfig::default(),
            &StudentConfig::default(),
        );

        let scores: Vec<f64> = outcome.standings.iter().map(|s| s.score).collect();
        assert_eq!(scores, [80.0, 70.0, 60.0, 50.0, 40.0]);
        let promoted: Vec<&str> = outcome.promoted().map(|s| s.name.as_str()).collect();
        assert_eq!(promoted, ["S1", "S3", "S2", "S4"]);
        assert_eq!(roster.honored(Tier::City).len(), 4);
    }

    #[test]
    fn score_floor_blocks_promotion_within_the_cutoff() {
        let mut roster = field(&[45.0, 35.0]);
        let rules = rules(Cutoff::Headcount(5), 40.0);
        let outcome = settle(
            Tier::NationalFinal,
            &rules,
            &mut roster,
            &ContestConfig::default(),
            &StudentConfig::default(),
        );
        let verdicts: Vec<bool> = outcome.standings.iter().map(|s| s.promoted).collect();
        assert_eq!(verdicts, [true, false]);
    }

    #[test]
    fn eliminated_participants_take_extra_stress() {
        let mut roster = field(&[80.0, 10.0]);
        let rules = rules(Cutoff::Headcount(1), 32.0);
        settle(
            Tier::City,
            &rules,
            &mut roster,
            &ContestConfig::default(),
            &StudentConfig::default(),
        );
        let stress: Vec<f64> = roster.iter().map(|s| s.stress).collect();
        assert_eq!(stress.len(), 2);
        assert!((stress.first().copied().unwrap() - 15.0).abs() < 1e-9);
        assert!((stress.get(1).copied().unwrap() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn honor_survives_a_withdrawal_from_contest_stress() {
        let mut roster = field(&[80.0]);
        roster.iter_mut().next().unwrap().stress = 95.0;
        let rules = rules(Cutoff::Headcount(1), 32.0);
        let outcome = settle(
            Tier::NationalPreliminary,
            &rules,
            &mut roster,
            &ContestConfig::default(),
            &StudentConfig::default(),
        );
        let standing = outcome.standings.first().unwrap();
        assert!(standing.promoted);
        assert!(standing.withdrew);
        let student = roster.iter().next().unwrap();
        assert!(!student.is_active());
        assert_eq!(student.honor, Some(Tier::NationalPreliminary));
    }

    #[test]
    fn withdrawn_participants_are_not_scored() {
        let mut roster = field(&[80.0, 70.0]);
        roster.iter_mut().next().unwrap().status = stargazer_types::Status::Withdrawn;
        let rules = rules(Cutoff::Headcount(1), 32.0);
        let outcome = settle(
            Tier::International,
            &rules,
            &mut roster,
            &ContestConfig::default(),
            &StudentConfig::default(),
        );
        assert_eq!(outcome.standings.len(), 1);
        assert_eq!(outcome.standings.first().unwrap().name, "S1");
    }

    #[test]
    fn gated_tiers_read_the_previous_honor() {
        let mut roster = field(&[50.0, 50.0, 50.0]);
        {
            let mut students = roster.iter_mut();
            students.next().unwrap().award_honor(Tier::City);
            students.next().unwrap().award_honor(Tier::Province);
        }
        assert_eq!(eligible_for(Tier::Province, &roster).len(), 1);
        assert_eq!(eligible_for(Tier::NationalPreliminary, &roster).len(), 3);
        assert!(eligible_for(Tier::NationalFinal, &roster).is_empty());
        assert!(eligible_for(Tier::International, &roster).is_empty());
    }

    #[test]
    fn adverse_weather_zeroes_the_dropped_skill() {
        let mut rules = rules(Cutoff::Fraction(0.8), 32.0);
        rules.weights = skill_map([(Skill::Theory, 0.5), (Skill::Observation, 0.5)]);
        rules.adverse_weather_drops = Some(Skill::Observation);

        let (clear, dropped) = effective_weights(&rules, Weather::Clear);
        assert_eq!(dropped, None);
        assert_eq!(clear, rules.weights);

        let (rainy, dropped) = effective_weights(&rules, Weather::Rain);
        assert_eq!(dropped, Some(Skill::Observation));
        assert_eq!(rainy.get(&Skill::Observation).copied(), Some(0.0));
        assert_eq!(rainy.get(&Skill::Theory).copied(), Some(0.5));
    }
}
