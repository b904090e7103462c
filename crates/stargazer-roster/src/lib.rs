//! Student state, lifecycle, and contest scoring for the Stargazer simulation.
//!
//! This crate contains the logic layer for students -- everything that
//! operates on student state without touching I/O. It sits between
//! `stargazer-types` (which defines the vocabulary) and `stargazer-core`
//! (which orchestrates weeks and contests).
//!
//! # Modules
//!
//! - [`config`] -- Creation ranges and stress rules ([`StudentConfig`])
//! - [`error`] -- Error types for roster operations ([`RosterError`])
//! - [`modifiers`] -- Generic trait modifier application
//! - [`recruit`] -- Student creation ([`create_student`])
//! - [`roster`] -- The roster container ([`Roster`])
//! - [`student`] -- The student entity and its transitions ([`Student`])

pub mod config;
pub mod error;
pub mod modifiers;
pub mod recruit;
pub mod roster;
pub mod student;

// Re-export primary types at crate root for convenience.
pub use config::{Span, StudentConfig, VarianceRanges};
pub use error::RosterError;
pub use modifiers::{apply_all, apply_modifier};
pub use recruit::create_student;
pub use roster::Roster;
pub use student::{MAX_ATTRIBUTE, Student};
