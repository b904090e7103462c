//! The club ledger: one signed balance and an append-only adjustment log.
//!
//! # Design
//!
//! - **Append-only**: entries are never modified or deleted.
//! - **Signed**: the balance may go negative; overdraft is flagged, not refused.
//! - **Saturating**: arithmetic never wraps; [`Ledger::reconcile`] detects
//!   the (practically unreachable) saturation case.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::LedgerError;

/// Category of a ledger movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// The school's monthly allowance.
    Allowance,
    /// A family sponsorship at recruitment.
    Sponsorship,
    /// A weekly training activity (cost net of any commission).
    Training,
    /// An ambient weekly event.
    Event,
    /// A contest mini-event outcome.
    Contest,
}

impl EntryKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 5] = [
        Self::Allowance,
        Self::Sponsorship,
        Self::Training,
        Self::Event,
        Self::Contest,
    ];
}

/// One recorded balance movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// What moved the balance.
    pub kind: EntryKind,
    /// Signed amount applied.
    pub amount: i64,
    /// Balance immediately after the movement.
    pub balance_after: i64,
    /// Whether the balance was negative after the movement.
    pub overdrawn: bool,
    /// Human-readable reason.
    pub reason: String,
}

/// The result of a single [`Ledger::adjust`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    /// Signed amount applied.
    pub amount: i64,
    /// Balance after the movement.
    pub balance: i64,
    /// Whether the balance is now negative.
    pub overdrawn: bool,
}

/// The club's fund ledger.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Balance at construction.
    opening: i64,
    /// Current balance.
    balance: i64,
    /// All non-zero movements, in insertion order.
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Create a ledger holding `opening` funds.
    pub const fn new(opening: i64) -> Self {
        Self {
            opening,
            balance: opening,
            entries: Vec::new(),
        }
    }

    /// Current balance.
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    /// Balance at construction.
    pub const fn opening(&self) -> i64 {
        self.opening
    }

    /// Whether the balance is negative.
    pub const fn is_overdrawn(&self) -> bool {
        self.balance < 0
    }

    /// Whether the balance covers `cost`.
    pub const fn can_afford(&self, cost: i64) -> bool {
        self.balance >= cost
    }

    /// All recorded movements, oldest first.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Apply a signed movement to the balance.
    ///
    /// Zero-amount adjustments change nothing and are not recorded.
    pub fn adjust(&mut self, amount: i64, kind: EntryKind, reason: &str) -> Adjustment {
        if amount != 0 {
            self.balance = self.balance.saturating_add(amount);
            let overdrawn = self.is_overdrawn();
            debug!(amount, balance = self.balance, ?kind, reason, "Ledger adjusted");
            if overdrawn {
                warn!(balance = self.balance, reason, "Club funds overdrawn");
            }
            self.entries.push(LedgerEntry {
                kind,
                amount,
                balance_after: self.balance,
                overdrawn,
                reason: reason.to_owned(),
            });
        }
        Adjustment {
            amount,
            balance: self.balance,
            overdrawn: self.is_overdrawn(),
        }
    }

    /// Total credited across all entries of `kind`.
    pub fn credited(&self, kind: EntryKind) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.kind == kind && e.amount > 0)
            .fold(0_i64, |acc, e| acc.saturating_add(e.amount))
    }

    /// Total debited (as a positive number) across all entries of `kind`.
    pub fn debited(&self, kind: EntryKind) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.kind == kind && e.amount < 0)
            .fold(0_i64, |acc, e| acc.saturating_sub(e.amount))
    }

    /// Verify that the opening balance plus every entry equals the balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unbalanced`] if saturation ever clipped a
    /// movement.
    pub fn reconcile(&self) -> Result<(), LedgerError> {
        let expected = self
            .entries
            .iter()
            .fold(i128::from(self.opening), |acc, e| {
                acc.saturating_add(i128::from(e.amount))
            });
        if expected == i128::from(self.balance) {
            Ok(())
        } else {
            Err(LedgerError::Unbalanced {
                expected,
                actual: self.balance,
            })
        }
    }
}
