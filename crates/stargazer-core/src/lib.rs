//! Calendar, tick cycle, contest pipeline, and orchestration for the
//! Stargazer simulation.
//!
//! This crate owns the weekly tick cycle: Weather, Allowance, Contest or
//! Action-plus-Events, and Advance. It wires the student model from
//! `stargazer-roster`, the catalogs from `stargazer-world`, and the ledger
//! from `stargazer-ledger` into one [`Session`].
//!
//! # Modules
//!
//! - [`actions`] -- Weekly menu and the training action resolver.
//! - [`calendar`] -- Year/month/week state machine, checkpoints, countdown.
//! - [`config`] -- Configuration loading from `stargazer-config.yaml` into
//!   strongly-typed structs.
//! - [`contest`] -- Eligibility, interactive phase, scoring, promotion.
//! - [`decision`] -- [`DecisionSource`] trait and built-in sources.
//! - [`effects`] -- The generic effect application path.
//! - [`events`] -- The ambient event engine.
//! - [`journal`] -- Bounded player-facing log.
//! - [`runner`] -- The session loop and end conditions.
//! - [`session`] -- The session state container.
//! - [`tick`] -- The weekly tick cycle.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use stargazer_core::{
//!     IdleDecisionSource, NoOpCallback, Session, SimulationConfig, run_session,
//! };
//! use stargazer_world::Catalogs;
//!
//! let mut dice = SmallRng::seed_from_u64(42);
//! let mut session = Session::new(SimulationConfig::default(), Catalogs::standard())?;
//! session.recruit(4, &mut dice)?;
//! let result = run_session(&mut session, &mut IdleDecisionSource, &mut dice, &mut NoOpCallback);
//! assert!(result.ticks > 0);
//! # Ok::<(), stargazer_core::SessionError>(())
//! ```
//!
//! [`DecisionSource`]: decision::DecisionSource

pub mod actions;
pub mod calendar;
pub mod config;
pub mod contest;
pub mod decision;
pub mod effects;
pub mod events;
pub mod journal;
pub mod runner;
pub mod session;
pub mod tick;

// Re-export primary items at crate root.
pub use actions::{ActionRejection, MenuEntry, Resolution};
pub use calendar::{Calendar, CalendarError, Countdown};
pub use config::{ConfigError, SimulationConfig};
pub use contest::{ContestOutcome, Standing};
pub use decision::{
    DecisionSource, IdleDecisionSource, RandomDecisionSource, ScriptedDecisionSource,
};
pub use journal::{Journal, JournalEntry};
pub use runner::{EndReason, NoOpCallback, SessionResult, TickCallback, log_session_end, run_session};
pub use session::{Session, SessionError};
pub use tick::{TickSummary, run_tick};
