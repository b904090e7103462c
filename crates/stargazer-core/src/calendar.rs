//! The session calendar and contest checkpoint schedule.
//!
//! The calendar is the single source of truth for temporal state. A
//! position is `(year, cycle index, week)`, where the cycle index walks a
//! fixed twelve-month academic cycle that starts in August. Each tick
//! advances the calendar by one week.
//!
//! # Checkpoints
//!
//! | Tier                 | Month | Week | Earliest year |
//! |----------------------|-------|------|---------------|
//! | City                 | 10    | 4    | 1             |
//! | Province             | 11    | 4    | 1             |
//! | National preliminary | 4     | 4    | 1             |
//! | National final       | 5     | 4    | 1             |
//! | International        | 8     | 1    | 2             |
//!
//! At most one checkpoint matches any position.

use stargazer_types::Tier;

/// Calendar months in academic-cycle order.
pub const MONTH_CYCLE: [u8; 12] = [8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6, 7];

/// Weeks in every month.
pub const WEEKS_PER_MONTH: u8 = 4;

/// Errors that can occur during calendar construction.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Invalid calendar configuration or position.
    #[error("invalid calendar configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong.
        reason: String,
    },
}

/// A scheduled contest date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    /// The tier held on this date.
    pub tier: Tier,
    /// Calendar month value (not the cycle index).
    pub month: u8,
    /// Week of the month.
    pub week: u8,
    /// The checkpoint only fires from this year on.
    pub min_year: u32,
}

/// The fixed checkpoint schedule, in ladder order.
pub const CHECKPOINTS: [Checkpoint; 5] = [
    Checkpoint { tier: Tier::City, month: 10, week: 4, min_year: 1 },
    Checkpoint { tier: Tier::Province, month: 11, week: 4, min_year: 1 },
    Checkpoint { tier: Tier::NationalPreliminary, month: 4, week: 4, min_year: 1 },
    Checkpoint { tier: Tier::NationalFinal, month: 5, week: 4, min_year: 1 },
    Checkpoint { tier: Tier::International, month: 8, week: 1, min_year: 2 },
];

/// What a single [`Calendar::advance`] crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Still in the same month.
    Week,
    /// A new month began.
    Month,
    /// The cycle wrapped and a new year began.
    Year,
}

/// Distance to the next scheduled contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    /// The upcoming tier.
    pub tier: Tier,
    /// Weeks until it fires; always at least 1.
    pub weeks: u64,
}

/// The session calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    /// Current year, starting at 1.
    year: u32,
    /// Index into [`MONTH_CYCLE`].
    cycle_index: usize,
    /// Week of the month, `1..=4`.
    week: u8,
    /// Last playable year.
    horizon: u32,
}

impl Calendar {
    /// A calendar at year 1, August, week 1.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidConfig`] if `horizon` is 0.
    pub fn new(horizon: u32) -> Result<Self, CalendarError> {
        Self::from_parts(1, 0, 1, horizon)
    }

    /// A calendar at an explicit position (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidConfig`] if any component is out of
    /// range.
    pub fn from_parts(
        year: u32,
        cycle_index: usize,
        week: u8,
        horizon: u32,
    ) -> Result<Self, CalendarError> {
        if horizon == 0 {
            return Err(CalendarError::InvalidConfig {
                reason: "horizon must be at least 1 year".to_owned(),
            });
        }
        if year == 0 {
            return Err(CalendarError::InvalidConfig {
                reason: "years are counted from 1".to_owned(),
            });
        }
        if cycle_index >= MONTH_CYCLE.len() {
            return Err(CalendarError::InvalidConfig {
                reason: format!("cycle index {cycle_index} is outside the 12-month cycle"),
            });
        }
        if !(1..=WEEKS_PER_MONTH).contains(&week) {
            return Err(CalendarError::InvalidConfig {
                reason: format!("week {week} is outside 1..={WEEKS_PER_MONTH}"),
            });
        }
        Ok(Self {
            year,
            cycle_index,
            week,
            horizon,
        })
    }

    /// Current year.
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// Current index into [`MONTH_CYCLE`].
    pub const fn cycle_index(&self) -> usize {
        self.cycle_index
    }

    /// Current week of the month.
    pub const fn week(&self) -> u8 {
        self.week
    }

    /// Last playable year.
    pub const fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Current calendar month value.
    pub fn month(&self) -> u8 {
        MONTH_CYCLE.get(self.cycle_index).copied().unwrap_or(8)
    }

    /// Whether the session has run past its last year.
    pub const fn is_past_horizon(&self) -> bool {
        self.year > self.horizon
    }

    /// Advance by one week.
    pub fn advance(&mut self) -> Advance {
        self.week = self.week.saturating_add(1);
        if self.week <= WEEKS_PER_MONTH {
            return Advance::Week;
        }
        self.week = 1;
        self.cycle_index = self.cycle_index.saturating_add(1);
        if self.cycle_index < MONTH_CYCLE.len() {
            return Advance::Month;
        }
        self.cycle_index = 0;
        self.year = self.year.saturating_add(1);
        Advance::Year
    }

    /// The checkpoint firing at the current position, if any.
    pub fn checkpoint(&self) -> Option<Tier> {
        let month = self.month();
        CHECKPOINTS
            .iter()
            .find(|c| c.month == month && c.week == self.week && self.year >= c.min_year)
            .map(|c| c.tier)
    }

    /// Weeks since year 1, August, week 0.
    pub fn absolute_week(&self) -> u64 {
        absolute_week(self.year, self.cycle_index, self.week)
    }

    /// The nearest strictly-future checkpoint.
    ///
    /// Each checkpoint is projected into the earliest year it can fire in
    /// that is not in the past; a projection at or before the current week
    /// moves to the following year. The projection may land beyond the
    /// last year. Returns `None` only once the horizon is exceeded.
    pub fn countdown(&self) -> Option<Countdown> {
        if self.is_past_horizon() {
            return None;
        }
        let now = self.absolute_week();
        CHECKPOINTS
            .iter()
            .filter_map(|checkpoint| {
                let index = cycle_index_of(checkpoint.month)?;
                let mut year = self.year.max(checkpoint.min_year);
                if absolute_week(year, index, checkpoint.week) <= now {
                    year = year.saturating_add(1);
                }
                let weeks = absolute_week(year, index, checkpoint.week).checked_sub(now)?;
                (weeks > 0).then_some(Countdown {
                    tier: checkpoint.tier,
                    weeks,
                })
            })
            .min_by_key(|c| c.weeks)
    }
}

/// Position of a calendar month within [`MONTH_CYCLE`].
pub fn cycle_index_of(month: u8) -> Option<usize> {
    MONTH_CYCLE.iter().position(|m| *m == month)
}

fn absolute_week(year: u32, cycle_index: usize, week: u8) -> u64 {
    let months_per_year = MONTH_CYCLE.len() as u64;
    let index = u64::try_from(cycle_index).unwrap_or(u64::MAX);
    u64::from(year.saturating_sub(1))
        .saturating_mul(months_per_year)
        .saturating_add(index)
        .saturating_mul(u64::from(WEEKS_PER_MONTH))
        .saturating_add(u64::from(week))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_calendar_starts_in_august() {
        let calendar = Calendar::new(3).unwrap();
        assert_eq!(calendar.year(), 1);
        assert_eq!(calendar.month(), 8);
        assert_eq!(calendar.week(), 1);
    }

    #[test]
    fn invalid_positions_are_rejected() {
        assert!(Calendar::new(0).is_err());
        assert!(Calendar::from_parts(0, 0, 1, 3).is_err());
        assert!(Calendar::from_parts(1, 12, 1, 3).is_err());
        assert!(Calendar::from_parts(1, 0, 5, 3).is_err());
    }

    #[test]
    fn advance_rolls_weeks_months_and_years() {
        let mut calendar = Calendar::from_parts(1, 0, 3, 3).unwrap();
        assert_eq!(calendar.advance(), Advance::Week);
        assert_eq!(calendar.advance(), Advance::Month);
        assert_eq!((calendar.cycle_index(), calendar.week()), (1, 1));

        let mut calendar = Calendar::from_parts(1, 11, 4, 3).unwrap();
        assert_eq!(calendar.advance(), Advance::Year);
        assert_eq!((calendar.year(), calendar.cycle_index(), calendar.week()), (2, 0, 1));
    }

    #[test]
    fn year_rolls_exactly_once_per_cycle() {
        let mut calendar = Calendar::new(3).unwrap();
        let rolls = (0..48).filter(|_| calendar.advance() == Advance::Year).count();
        assert_eq!(rolls, 1);
        assert_eq!(calendar.year(), 2);
    }

    #[test]
    fn checkpoints_fire_on_schedule() {
        let city = Calendar::from_parts(1, 2, 4, 3).unwrap();
        assert_eq!(city.checkpoint(), Some(Tier::City));
        let final_round = Calendar::from_parts(1, 9, 4, 3).unwrap();
        assert_eq!(final_round.checkpoint(), Some(Tier::NationalFinal));
        let quiet = Calendar::from_parts(1, 2, 3, 3).unwrap();
        assert_eq!(quiet.checkpoint(), None);
    }

    #[test]
    fn international_waits_for_year_two() {
        let first = Calendar::from_parts(1, 0, 1, 3).unwrap();
        assert_eq!(first.checkpoint(), None);
        let second = Calendar::from_parts(2, 0, 1, 3).unwrap();
        assert_eq!(second.checkpoint(), Some(Tier::International));
    }

    #[test]
    fn countdown_one_week_before_a_checkpoint() {
        let calendar = Calendar::from_parts(1, 2, 3, 3).unwrap();
        assert_eq!(
            calendar.countdown(),
            Some(Countdown {
                tier: Tier::City,
                weeks: 1
            })
        );
    }

    #[test]
    fn countdown_on_a_checkpoint_points_past_it() {
        let calendar = Calendar::from_parts(1, 2, 4, 3).unwrap();
        let next = calendar.countdown().unwrap();
        assert_eq!(next.tier, Tier::Province);
        assert_eq!(next.weeks, 4);
    }

    #[test]
    fn countdown_projects_international_into_year_two() {
        // Year 1, July, week 4: the international round is next week.
        let calendar = Calendar::from_parts(1, 11, 4, 3).unwrap();
        assert_eq!(
            calendar.countdown(),
            Some(Countdown {
                tier: Tier::International,
                weeks: 1
            })
        );
    }

    #[test]
    fn countdown_projects_past_the_last_year_until_the_horizon_ends() {
        let last_weeks = Calendar::from_parts(3, 11, 4, 3).unwrap();
        assert_eq!(
            last_weeks.countdown(),
            Some(Countdown {
                tier: Tier::International,
                weeks: 1
            })
        );
        let late_spring = Calendar::from_parts(3, 9, 4, 3).unwrap();
        assert_eq!(late_spring.countdown().map(|c| c.tier), Some(Tier::International));
        let past = Calendar::from_parts(4, 0, 1, 3).unwrap();
        assert_eq!(past.countdown(), None);
    }
}
