//! Error types for the stargazer-roster crate.

use stargazer_types::StudentId;

/// Errors that can occur during roster operations.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Student with the given ID is not on the roster.
    #[error("student not found: {0}")]
    StudentNotFound(StudentId),

    /// A trait draw was requested but the trait catalog is empty.
    #[error("cannot draw {requested} traits from an empty trait catalog")]
    EmptyTraitCatalog {
        /// Number of traits the draw asked for.
        requested: usize,
    },

    /// The trait-count weights contain no positive entry.
    #[error("trait-count weights must contain at least one positive weight")]
    InvalidTraitWeights,
}
