//! Club fund ledger for the Stargazer olympiad simulation.
//!
//! The club owns a single signed balance. Training costs, commissions,
//! ambient events, the monthly allowance, and patron sponsorships all move
//! it through [`Ledger::adjust`], which appends an [`LedgerEntry`] to an
//! append-only history.
//!
//! # Overdraft
//!
//! The balance may go negative. An adjustment that leaves the balance
//! below zero is flagged on its entry (and the caller surfaces the flag in
//! the journal), but nothing is blocked. Affordability checks are the
//! caller's job ([`Ledger::can_afford`]).
//!
//! # Usage
//!
//! ```
//! use stargazer_ledger::{EntryKind, Ledger};
//!
//! let mut ledger = Ledger::new(50);
//! assert!(!ledger.can_afford(100));
//!
//! let adjustment = ledger.adjust(-80, EntryKind::Event, "telescope repair");
//! assert_eq!(ledger.balance(), -30);
//! assert!(adjustment.overdrawn);
//! assert!(ledger.reconcile().is_ok());
//! ```

pub mod ledger;

// Re-export primary types at crate root.
pub use ledger::{Adjustment, EntryKind, Ledger, LedgerEntry};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors surfaced by ledger verification.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The opening balance plus every recorded amount does not equal the
    /// current balance. Only possible if arithmetic saturated.
    #[error("ledger out of balance: expected {expected}, holding {actual}")]
    Unbalanced {
        /// Opening balance plus the sum of all entries.
        expected: i128,
        /// The balance actually held.
        actual: i64,
    },
}
