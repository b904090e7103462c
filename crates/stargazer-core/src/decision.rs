//! Decision source trait and built-in implementations.
//!
//! The simulation suspends at exactly three kinds of decision point: the
//! weekly training menu, the mini-event offer of each interactive contest
//! day, and the branch of the chosen mini-event. The [`DecisionSource`]
//! trait abstracts who answers them -- a human at the terminal, a scripted
//! test, or an autoplay bot.
//!
//! Sources return plain indices. The engine treats an out-of-range index as
//! a safe default (rest for the week, the first offer, the first branch)
//! and logs a warning; re-prompting on bad input is the source's job.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use stargazer_types::{MiniEvent, Tier};

use crate::actions::MenuEntry;
use crate::contest::ContestOutcome;
use crate::session::Session;

/// A source of player decisions.
pub trait DecisionSource {
    /// Pick an index into `session.menu` for this week.
    fn choose_training(&mut self, session: &Session) -> usize;

    /// Pick one of today's mini-event `offers` during `tier`'s interactive
    /// phase. `day` counts from 1 up to `days`.
    fn choose_mini_event(
        &mut self,
        session: &Session,
        tier: Tier,
        day: u32,
        days: u32,
        offers: &[&MiniEvent],
    ) -> usize;

    /// Pick a branch of `event`.
    fn choose_branch(&mut self, session: &Session, event: &MiniEvent) -> usize;

    /// Called once a tier with participants begins.
    fn on_contest_start(&mut self, _session: &Session, _tier: Tier) {}

    /// Called once a tier has been settled.
    fn on_contest_result(&mut self, _session: &Session, _outcome: &ContestOutcome) {}
}

/// Position of the idle entry in a menu, or 0 if the menu has none.
pub fn idle_index(menu: &[MenuEntry]) -> usize {
    menu.iter()
        .position(|entry| matches!(entry, MenuEntry::Idle))
        .unwrap_or(0)
}

/// Always rests and always takes the first option.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleDecisionSource;

impl DecisionSource for IdleDecisionSource {
    fn choose_training(&mut self, session: &Session) -> usize {
        idle_index(&session.menu)
    }

    fn choose_mini_event(
        &mut self,
        _session: &Session,
        _tier: Tier,
        _day: u32,
        _days: u32,
        _offers: &[&MiniEvent],
    ) -> usize {
        0
    }

    fn choose_branch(&mut self, _session: &Session, _event: &MiniEvent) -> usize {
        0
    }
}

/// Replays queued answers, then behaves like [`IdleDecisionSource`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisionSource {
    /// Menu indices, one per non-contest week.
    pub training: VecDeque<usize>,
    /// Offer indices, one per interactive day.
    pub mini_events: VecDeque<usize>,
    /// Branch indices, one per chosen mini-event.
    pub branches: VecDeque<usize>,
    /// Tiers announced through [`DecisionSource::on_contest_start`].
    pub contests_started: Vec<Tier>,
    /// Outcomes received through [`DecisionSource::on_contest_result`].
    pub results: Vec<ContestOutcome>,
}

impl ScriptedDecisionSource {
    /// A source that will pick these menu indices in order.
    pub fn with_training(training: impl IntoIterator<Item = usize>) -> Self {
        Self {
            training: training.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl DecisionSource for ScriptedDecisionSource {
    fn choose_training(&mut self, session: &Session) -> usize {
        self.training
            .pop_front()
            .unwrap_or_else(|| idle_index(&session.menu))
    }

    fn choose_mini_event(
        &mut self,
        _session: &Session,
        _tier: Tier,
        _day: u32,
        _days: u32,
        _offers: &[&MiniEvent],
    ) -> usize {
        self.mini_events.pop_front().unwrap_or(0)
    }

    fn choose_branch(&mut self, _session: &Session, _event: &MiniEvent) -> usize {
        self.branches.pop_front().unwrap_or(0)
    }

    fn on_contest_start(&mut self, _session: &Session, tier: Tier) {
        self.contests_started.push(tier);
    }

    fn on_contest_result(&mut self, _session: &Session, outcome: &ContestOutcome) {
        self.results.push(outcome.clone());
    }
}

/// Picks uniformly at random at every decision point.
///
/// Used by autoplay and by whole-session tests. It owns its generator so
/// that its picks never disturb the simulation's own draws.
#[derive(Debug, Clone)]
pub struct RandomDecisionSource {
    rng: SmallRng,
}

impl RandomDecisionSource {
    /// A source seeded for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 { 0 } else { self.rng.random_range(0..len) }
    }
}

impl DecisionSource for RandomDecisionSource {
    fn choose_training(&mut self, session: &Session) -> usize {
        self.pick(session.menu.len())
    }

    fn choose_mini_event(
        &mut self,
        _session: &Session,
        _tier: Tier,
        _day: u32,
        _days: u32,
        offers: &[&MiniEvent],
    ) -> usize {
        self.pick(offers.len())
    }

    fn choose_branch(&mut self, _session: &Session, event: &MiniEvent) -> usize {
        self.pick(event.choices.len())
    }
}
