//! Tick cycle: one calendar week of the Stargazer simulation.
//!
//! Each tick runs through these phases:
//!
//! 1. **Weather** -- draw this week's weather, weighting overcast by the
//!    active cloud-bringers.
//!
//! 2. **Allowance** -- on week 1 of every month, credit the monthly
//!    allowance before anything else resolves.
//!
//! 3. **Checkpoint or week** -- if a contest checkpoint falls on this week,
//!    run the contest pipeline and nothing else. Otherwise draw the menu,
//!    ask the [`DecisionSource`] for a pick, resolve it, and evaluate the
//!    ambient events.
//!
//! 4. **Advance** -- move the calendar one week. When the cycle wraps into
//!    a new year, record the national team and then clear every active
//!    student's honor.
//!
//! The tick cycle cannot fail; every non-fatal problem (a rejected action,
//! a skipped tier) is journaled and reported in the [`TickSummary`].

use stargazer_ledger::EntryKind;
use stargazer_types::{Dice, Tier, TraitKind, Weather};
use tracing::{debug, info, warn};

use crate::actions::{ActionRejection, Resolution, draw_menu, resolve_action};
use crate::calendar::Advance;
use crate::contest::{ContestOutcome, run_contest};
use crate::decision::{DecisionSource, idle_index};
use crate::effects::EffectContext;
use crate::events::{FiredEvent, run_ambient_events};
use crate::session::Session;

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummary {
    /// Year the tick ran in.
    pub year: u32,
    /// Calendar month the tick ran in.
    pub month: u8,
    /// Week the tick ran in.
    pub week: u8,
    /// The week's weather.
    pub weather: Weather,
    /// The contest run this week, if it was a checkpoint.
    pub contest: Option<ContestOutcome>,
    /// The resolved menu pick, if it was a normal week.
    pub action: Option<Result<Resolution, ActionRejection>>,
    /// Ambient events that fired.
    pub events: Vec<FiredEvent>,
    /// Whether this tick closed an academic year.
    pub year_ended: bool,
    /// Funds after the tick.
    pub funds: i64,
    /// Active students after the tick.
    pub active: usize,
}

/// Execute one week of the simulation.
///
/// # Phases
///
/// 1. Weather
/// 2. Allowance
/// 3. Contest, or action plus ambient events
/// 4. Calendar advance and year rollover
pub fn run_tick(
    session: &mut Session,
    decisions: &mut dyn DecisionSource,
    dice: &mut dyn Dice,
) -> TickSummary {
    let (year, month, week) = (
        session.calendar.year(),
        session.calendar.month(),
        session.calendar.week(),
    );

    // --- Phase 1: Weather ---
    let cloud_bringers = session.roster.count_active_with(TraitKind::CloudBringer);
    session.weather = session.config.weather.generate(cloud_bringers, dice);
    debug!(year, month, week, weather = ?session.weather, "Tick started");

    // --- Phase 2: Allowance ---
    if week == 1 {
        let allowance = session.config.economy.monthly_allowance;
        session.adjust_funds(allowance, EntryKind::Allowance, "Monthly allowance");
    }

    // --- Phase 3: Checkpoint or week ---
    let mut contest = None;
    let mut action = None;
    let mut events = Vec::new();
    if let Some(tier) = session.calendar.checkpoint() {
        session.menu.clear();
        contest = Some(run_contest(session, tier, decisions, dice));
    } else {
        action = Some(phase_action(session, decisions, dice));
        events = phase_events(session, dice);
    }

    // --- Phase 4: Advance ---
    let year_ended = session.calendar.advance() == Advance::Year;
    if year_ended {
        phase_new_year(session);
    }

    TickSummary {
        year,
        month,
        week,
        weather: session.weather,
        contest,
        action,
        events,
        year_ended,
        funds: session.ledger.balance(),
        active: session.roster.active_count(),
    }
}

/// Phase 3a: draw the menu, take the pick, resolve it.
fn phase_action(
    session: &mut Session,
    decisions: &mut dyn DecisionSource,
    dice: &mut dyn Dice,
) -> Result<Resolution, ActionRejection> {
    session.menu = draw_menu(
        &session.catalogs.training,
        session.config.training.menu_size,
        dice,
    );
    let mut pick = decisions.choose_training(session);
    if pick >= session.menu.len() {
        warn!(pick, menu = session.menu.len(), "Menu pick out of range, resting instead");
        pick = idle_index(&session.menu);
    }
    let Some(entry) = session.menu.get(pick).cloned() else {
        return Ok(Resolution::Idle);
    };

    let result = resolve_action(
        &entry,
        &mut session.roster,
        &mut session.ledger,
        session.weather,
        &session.config.roster,
        dice,
    );
    match &result {
        Ok(Resolution::Idle) => session.log("The club took the week off.".to_owned()),
        Ok(Resolution::Trained {
            activity,
            funds,
            withdrawn,
        }) => {
            session.log(format!("{activity}. Funds: {}.", funds.balance));
            if funds.overdrawn {
                session.log("Club funds are overdrawn.".to_owned());
            }
            if !withdrawn.is_empty() {
                session.log(format!(
                    "{} could not take the pressure and left the club.",
                    withdrawn.join(", ")
                ));
            }
        }
        Err(rejection) => session.log(rejection.to_string()),
    }
    result
}

/// Phase 3b: ambient events.
fn phase_events(session: &mut Session, dice: &mut dyn Dice) -> Vec<FiredEvent> {
    let context = EffectContext {
        weather: session.weather,
        tier: None,
        factor: 1.0,
        students: &session.config.roster,
    };
    let fired = run_ambient_events(
        &session.catalogs.events,
        &mut session.roster,
        &mut session.ledger,
        &context,
        dice,
    );
    for event in &fired {
        session.log(event.description.clone());
        if event.report.overdrew() {
            session.log("Club funds are overdrawn.".to_owned());
        }
        for name in &event.report.withdrawn {
            session.log(format!("{name} could not take the pressure and left the club."));
        }
    }
    fired
}

/// Phase 4: year rollover.
///
/// The national team is recorded before honors are cleared, so the
/// international tier can still find it after the boundary.
fn phase_new_year(session: &mut Session) {
    session.national_team = session.roster.honored(Tier::NationalFinal);
    let cleared = session.roster.reset_honors();
    info!(
        year = session.calendar.year(),
        national_team = session.national_team.len(),
        cleared,
        "New academic year"
    );
    session.log(format!(
        "Academic year {} begins. Last year's honors are history.",
        session.calendar.year()
    ));
}
