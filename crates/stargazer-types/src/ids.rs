//! The student identifier.
//!
//! Students are addressed by a strongly-typed ID rather than by their
//! generated name, because names are drawn from a finite pool and may
//! repeat inside one cohort.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a student on the roster.
///
/// Time-ordered (UUID v7), so sorting by id follows recruitment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub Uuid);

impl StudentId {
    /// A fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// The wrapped [`Uuid`].
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for StudentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
