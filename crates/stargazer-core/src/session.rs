//! The session: every piece of mutable game state, owned in one place.
//!
//! Components never reach for globals. The tick cycle, the contest pipeline,
//! and the decision sources all receive the session (or the parts of it
//! they need) explicitly.

use stargazer_ledger::{Adjustment, EntryKind, Ledger};
use stargazer_roster::{Roster, RosterError, create_student};
use stargazer_types::{Dice, StudentId, TraitKind, Weather};
use stargazer_world::{Catalogs, random_name};
use tracing::info;

use crate::actions::MenuEntry;
use crate::calendar::{Calendar, CalendarError, Countdown};
use crate::config::{ConfigError, SimulationConfig};
use crate::journal::{Journal, JournalEntry};
use crate::runner::EndReason;

/// Errors that can occur while setting up a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The calendar could not be built.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// A student could not be created.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// The weekly menu asks for more activities than the catalog holds.
    #[error("menu size {menu_size} exceeds the {catalog} activities in the training catalog")]
    MenuTooLarge {
        /// Configured menu size.
        menu_size: usize,
        /// Catalog length.
        catalog: usize,
    },
}

/// The whole mutable state of one playthrough.
#[derive(Debug, Clone)]
pub struct Session {
    /// Validated configuration.
    pub config: SimulationConfig,
    /// Read-only game content.
    pub catalogs: Catalogs,
    /// Current position in time.
    pub calendar: Calendar,
    /// Club funds.
    pub ledger: Ledger,
    /// Every recruited student.
    pub roster: Roster,
    /// This week's weather.
    pub weather: Weather,
    /// Recent happenings, for the player.
    pub journal: Journal,
    /// This week's training menu. Empty during contest weeks.
    pub menu: Vec<MenuEntry>,
    /// Students who held the national-final honor at the last year boundary.
    pub national_team: Vec<StudentId>,
    /// Names of the international medalists, once the olympiad is won.
    pub champions: Vec<String>,
    /// Set when the international tier promotes anyone.
    pub victory: bool,
}

impl Session {
    /// A fresh session with an empty roster.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the configuration is invalid or does not
    /// fit the catalogs.
    pub fn new(config: SimulationConfig, catalogs: Catalogs) -> Result<Self, SessionError> {
        config.validate()?;
        if config.training.menu_size > catalogs.training.len() {
            return Err(SessionError::MenuTooLarge {
                menu_size: config.training.menu_size,
                catalog: catalogs.training.len(),
            });
        }
        let calendar = Calendar::new(config.calendar.horizon_years)?;
        let ledger = Ledger::new(config.economy.starting_funds);
        let journal = Journal::new(config.journal.capacity);
        Ok(Self {
            config,
            catalogs,
            calendar,
            ledger,
            roster: Roster::new(),
            weather: Weather::Clear,
            journal,
            menu: Vec::new(),
            national_team: Vec::new(),
            champions: Vec::new(),
            victory: false,
        })
    }

    /// Recruit `requested` students (clamped to the configured bounds).
    ///
    /// Each student holding the Patron trait brings a sponsorship.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Roster`] if a student cannot be created.
    pub fn recruit(
        &mut self,
        requested: usize,
        dice: &mut dyn Dice,
    ) -> Result<Vec<StudentId>, SessionError> {
        let count = self.config.roster.clamp_size(requested);
        let mut recruited = Vec::with_capacity(count);
        for _ in 0..count {
            let name = random_name(dice);
            let student = create_student(name, &self.config.roster, &self.catalogs.traits, dice)?;
            let patron = student.has_trait(TraitKind::Patron);
            let joined = format!("{} joined the club.", student.name);
            recruited.push(student.id);
            self.roster.push(student);
            self.log(joined);
            if patron {
                let amount = self.config.economy.patron_sponsorship;
                self.adjust_funds(amount, EntryKind::Sponsorship, "Patron family sponsorship");
            }
        }
        info!(
            requested,
            recruited = recruited.len(),
            funds = self.ledger.balance(),
            "Roster recruited"
        );
        Ok(recruited)
    }

    /// Append a journal entry stamped with the current calendar position.
    pub fn log(&mut self, message: String) {
        self.journal.push(JournalEntry {
            year: self.calendar.year(),
            month: self.calendar.month(),
            week: self.calendar.week(),
            message,
        });
    }

    /// Move club funds and journal the movement (and any overdraft).
    pub fn adjust_funds(&mut self, amount: i64, kind: EntryKind, reason: &str) -> Adjustment {
        let adjustment = self.ledger.adjust(amount, kind, reason);
        if amount != 0 {
            self.log(format!("{reason}: {amount:+}. Funds: {}.", adjustment.balance));
        }
        if adjustment.overdrawn {
            self.log("Club funds are overdrawn.".to_owned());
        }
        adjustment
    }

    /// Weeks until the next contest, or `None` once the horizon is exceeded.
    pub fn countdown(&self) -> Option<Countdown> {
        self.calendar.countdown()
    }

    /// Why the session is over, or `None` while it continues.
    ///
    /// Victory takes precedence over the horizon, and the horizon over
    /// attrition.
    pub fn end_reason(&self) -> Option<EndReason> {
        if self.victory {
            Some(EndReason::Victory)
        } else if self.calendar.is_past_horizon() {
            Some(EndReason::HorizonReached)
        } else if self.roster.all_withdrawn() {
            Some(EndReason::AllWithdrawn)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn new_session_starts_with_configured_funds() {
        let session = Session::new(SimulationConfig::default(), Catalogs::standard()).unwrap();
        assert_eq!(session.ledger.balance(), 2000);
        assert_eq!(session.calendar.year(), 1);
        assert!(session.roster.is_empty());
    }

    #[test]
    fn oversized_menu_is_rejected() {
        let mut config = SimulationConfig::default();
        config.training.menu_size = 500;
        let result = Session::new(config, Catalogs::standard());
        assert!(matches!(result, Err(SessionError::MenuTooLarge { .. })));
    }

    #[test]
    fn recruitment_clamps_and_sponsors() {
        let mut session = Session::new(SimulationConfig::default(), Catalogs::standard()).unwrap();
        let mut rng = SmallRng::seed_from_u64(17);
        let ids = session.recruit(25, &mut rng).unwrap();
        assert_eq!(ids.len(), 10);
        assert_eq!(session.roster.len(), 10);

        let patrons = session
            .roster
            .iter()
            .filter(|s| s.has_trait(TraitKind::Patron))
            .count();
        let expected = 2000_i64.saturating_add(
            2000_i64.saturating_mul(i64::try_from(patrons).unwrap()),
        );
        assert_eq!(session.ledger.balance(), expected);
    }

    #[test]
    fn empty_roster_counts_as_attrition() {
        let session = Session::new(SimulationConfig::default(), Catalogs::standard()).unwrap();
        assert_eq!(session.end_reason(), Some(EndReason::AllWithdrawn));
    }

    #[test]
    fn victory_takes_precedence() {
        let mut session = Session::new(SimulationConfig::default(), Catalogs::standard()).unwrap();
        session.victory = true;
        assert_eq!(session.end_reason(), Some(EndReason::Victory));
    }
}
