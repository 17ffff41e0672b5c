//! Idempotent chip application.
//!
//! Settlements reach the chip store over an at-least-once channel, so
//! the ledger takes an explicit idempotency key with every apply and
//! treats replays as no-ops. The key is chosen by the caller (the
//! original system keyed on table id + hand number) and checked
//! against the ledger itself — there is no process-wide static set of
//! "seen" transactions hiding in this crate.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::outcome::Settlement;
use crate::state::PlayerId;

/// Result of applying a settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerStatus {
    /// The deltas were applied.
    Applied,
    /// This key was already settled; nothing changed.
    AlreadyApplied,
}

/// Why a settlement could not be applied. The ledger is unchanged
/// after any error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no account for {0}")]
    UnknownAccount(PlayerId),

    #[error("{player} cannot cover a {debit} chip debit")]
    InsufficientChips { player: PlayerId, debit: i64 },

    #[error("settlement nets to {0}, not zero")]
    Unbalanced(i64),
}

/// The seam between the rules engine and whatever holds the money.
///
/// Implementations must make `apply` atomic per key: either every
/// delta lands or none do, and a key can only ever land once.
pub trait ChipLedger {
    fn apply(&mut self, key: &str, settlement: &Settlement) -> Result<LedgerStatus, LedgerError>;

    fn balance(&self, player: PlayerId) -> Option<i64>;
}

/// In-memory ledger. Backs tests and single-process deployments; the
/// production implementation wraps the chip service.
#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    applied: FxHashSet<String>,
    balances: FxHashMap<PlayerId, i64>,
}

impl MemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an account with a starting balance.
    pub fn open_account(&mut self, player: PlayerId, chips: i64) {
        self.balances.insert(player, chips);
    }

    /// Number of settlements applied so far.
    #[must_use]
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }
}

impl ChipLedger for MemoryLedger {
    fn apply(&mut self, key: &str, settlement: &Settlement) -> Result<LedgerStatus, LedgerError> {
        if self.applied.contains(key) {
            return Ok(LedgerStatus::AlreadyApplied);
        }

        let net = settlement.net();
        if net != 0 {
            return Err(LedgerError::Unbalanced(net));
        }

        // Validate everything before touching a balance.
        for delta in &settlement.deltas {
            let balance = self
                .balances
                .get(&delta.player)
                .copied()
                .ok_or(LedgerError::UnknownAccount(delta.player))?;
            if delta.amount < 0 && balance + delta.amount < 0 {
                return Err(LedgerError::InsufficientChips {
                    player: delta.player,
                    debit: -delta.amount,
                });
            }
        }

        for delta in &settlement.deltas {
            if let Some(balance) = self.balances.get_mut(&delta.player) {
                *balance += delta.amount;
            }
        }
        self.applied.insert(key.to_owned());
        Ok(LedgerStatus::Applied)
    }

    fn balance(&self, player: PlayerId) -> Option<i64> {
        self.balances.get(&player).copied()
    }
}
