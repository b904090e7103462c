//! Session loop runner.
//!
//! [`run_session`] drives [`run_tick`] until the session reaches one of
//! its three terminal states:
//!
//! - **Victory**: the international tier promoted at least one student.
//! - **Horizon reached**: the calendar ran past the last configured year.
//! - **All withdrawn**: no active student remains.
//!
//! The horizon bounds the loop, so a session always terminates.
//!
//! [`run_tick`]: crate::tick::run_tick

use serde::{Deserialize, Serialize};
use stargazer_ledger::{EntryKind, Ledger};
use stargazer_types::Dice;
use tracing::{info, warn};

use crate::decision::DecisionSource;
use crate::session::Session;
use crate::tick::{self, TickSummary};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The international olympiad was won.
    Victory,
    /// The calendar ran past the last year.
    HorizonReached,
    /// Every student withdrew.
    AllWithdrawn,
}

/// Result of a session run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    /// The reason the session ended.
    pub end_reason: EndReason,
    /// Total number of ticks executed.
    pub ticks: u64,
    /// Calendar year at the end.
    pub final_year: u32,
    /// Club funds at the end.
    pub funds: i64,
    /// Students still active.
    pub active: usize,
    /// Students who withdrew.
    pub withdrawn: usize,
    /// International medalists, if the session was won.
    pub champions: Vec<String>,
    /// Funds credited over the session, by kind.
    pub income: Vec<(EntryKind, i64)>,
    /// Funds debited over the session (as positive amounts), by kind.
    pub spending: Vec<(EntryKind, i64)>,
    /// Whether the ledger history replays to the final balance.
    pub balanced: bool,
}

/// Callback invoked after each tick completes.
///
/// The terminal front end uses this to render the week; tests use it to
/// observe intermediate state.
pub trait TickCallback {
    /// Called after a tick completes.
    fn on_tick(&mut self, summary: &TickSummary, session: &Session);
}

/// A no-op tick callback.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary, _session: &Session) {}
}

/// Run ticks until the session ends.
pub fn run_session(
    session: &mut Session,
    decisions: &mut dyn DecisionSource,
    dice: &mut dyn Dice,
    callback: &mut dyn TickCallback,
) -> SessionResult {
    let mut ticks: u64 = 0;

    info!(
        horizon = session.calendar.horizon(),
        students = session.roster.len(),
        funds = session.ledger.balance(),
        "Session starting"
    );

    let end_reason = loop {
        if let Some(reason) = session.end_reason() {
            break reason;
        }
        let summary = tick::run_tick(session, decisions, dice);
        ticks = ticks.saturating_add(1);
        callback.on_tick(&summary, session);
    };

    let balanced = match session.ledger.reconcile() {
        Ok(()) => true,
        Err(error) => {
            warn!(%error, "Ledger does not reconcile");
            false
        }
    };
    let ledger = &session.ledger;
    let totals = |amount: fn(&Ledger, EntryKind) -> i64| -> Vec<(EntryKind, i64)> {
        EntryKind::ALL
            .into_iter()
            .map(|kind| (kind, amount(ledger, kind)))
            .filter(|(_, total)| *total != 0)
            .collect()
    };

    SessionResult {
        end_reason,
        ticks,
        final_year: session.calendar.year(),
        funds: ledger.balance(),
        active: session.roster.active_count(),
        withdrawn: session.roster.withdrawn_count(),
        champions: session.champions.clone(),
        income: totals(Ledger::credited),
        spending: totals(Ledger::debited),
        balanced,
    }
}

/// Log the session end.
pub fn log_session_end(result: &SessionResult) {
    info!(
        reason = ?result.end_reason,
        ticks = result.ticks,
        final_year = result.final_year,
        funds = result.funds,
        active = result.active,
        withdrawn = result.withdrawn,
        balanced = result.balanced,
        "Session ended"
    );

    if result.ticks == 0 {
        warn!("Session ended before any tick ran");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use stargazer_world::Catalogs;

    use super::*;
    use crate::config::SimulationConfig;
    use crate::decision::IdleDecisionSource;

    struct Counter(u64);

    impl TickCallback for Counter {
        fn on_tick(&mut self, _summary: &TickSummary, _session: &Session) {
            self.0 = self.0.saturating_add(1);
        }
    }

    #[test]
    fn empty_roster_ends_before_the_first_tick() {
        let mut session = Session::new(SimulationConfig::default(), Catalogs::standard()).unwrap();
        let mut counter = Counter(0);
        let mut dice = rand::rngs::SmallRng::seed_from_u64(1);
        let result = run_session(&mut session, &mut IdleDecisionSource, &mut dice, &mut counter);
        assert_eq!(result.end_reason, EndReason::AllWithdrawn);
        assert_eq!(result.ticks, 0);
        assert_eq!(counter.0, 0);
    }

    #[test]
    fn result_totals_the_ledger_by_kind() {
        let mut session = Session::new(SimulationConfig::default(), Catalogs::standard()).unwrap();
        session.adjust_funds(500, EntryKind::Allowance, "Monthly allowance");
        session.adjust_funds(-300, EntryKind::Training, "Telescope rental");
        session.adjust_funds(120, EntryKind::Training, "Odd jobs");
        let mut dice = rand::rngs::SmallRng::seed_from_u64(1);
        let result = run_session(&mut session, &mut IdleDecisionSource, &mut dice, &mut NoOpCallback);

        assert!(result.balanced);
        assert_eq!(result.funds, 2320);
        assert_eq!(
            result.income,
            vec![(EntryKind::Allowance, 500), (EntryKind::Training, 120)]
        );
        assert_eq!(result.spending, vec![(EntryKind::Training, 300)]);
    }

    #[test]
    fn end_reasons_serialize_in_snake_case() {
        let json = serde_json::to_string(&EndReason::HorizonReached).unwrap();
        assert_eq!(json, "\"horizon_reached\"");
        let back: EndReason = serde_json::from_str("\"all_withdrawn\"").unwrap();
        assert_eq!(back, EndReason::AllWithdrawn);
    }
}
