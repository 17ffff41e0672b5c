//! Chip settlement of a finished hand.
//!
//! A `Settlement` is a pure description of who pays what: a list of
//! signed chip deltas that always sums to zero. The engine never moves
//! chips itself; a [`crate::ledger::ChipLedger`] applies the deltas
//! idempotently under an explicit settlement key.

use serde::{Deserialize, Serialize};

use super::resolver::{RoundOutcome, WinType};
use crate::state::PlayerId;

/// One signed balance change. Positive credits, negative debits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipDelta {
    pub player: PlayerId,
    pub amount: i64,
}

/// The complete chip movement for one finished hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub deltas: Vec<ChipDelta>,
}

impl Settlement {
    /// Derive the chip movement from an outcome.
    ///
    /// Standard wins: every non-winner pays `stake x multiplier`; the
    /// collected pot splits evenly across the winners, odd chips going
    /// to the earliest seats. A caught drop is different: only the
    /// dropper pays, `stake x multiplier` to *each* winner, and every
    /// other seat is flat.
    #[must_use]
    pub fn from_outcome(outcome: &RoundOutcome, stake: i64, player_count: usize) -> Settlement {
        if outcome.winners.is_empty() {
            return Settlement { deltas: Vec::new() };
        }

        let unit = stake * i64::from(outcome.payout_multiplier);

        if outcome.win_type == WinType::DropCaught {
            if let Some(dropper) = outcome.dropper {
                let mut deltas = vec![ChipDelta {
                    player: dropper,
                    amount: -unit * outcome.winners.len() as i64,
                }];
                deltas.extend(outcome.winners.iter().map(|&w| ChipDelta {
                    player: w,
                    amount: unit,
                }));
                return Settlement { deltas };
            }
            return Settlement { deltas: Vec::new() };
        }

        let losers: Vec<PlayerId> = PlayerId::all(player_count)
            .filter(|&p| !outcome.is_winner(p))
            .collect();

        let pot = unit * losers.len() as i64;
        let winner_count = outcome.winners.len() as i64;
        let share = pot / winner_count;
        let mut remainder = pot % winner_count;

        let mut deltas: Vec<ChipDelta> = losers
            .into_iter()
            .map(|p| ChipDelta { player: p, amount: -unit })
            .collect();

        // Winners in seat order, so odd chips land on the earliest seats.
        let mut winners = outcome.winners.clone();
        winners.sort_unstable();
        for winner in winners {
            let extra = if remainder > 0 { 1 } else { 0 };
            remainder -= extra;
            deltas.push(ChipDelta {
                player: winner,
                amount: share + extra,
            });
        }

        Settlement { deltas }
    }

    /// Net sum of all deltas. Zero for every settlement this crate
    /// produces; the ledger asserts it before applying.
    #[must_use]
    pub fn net(&self) -> i64 {
        self.deltas.iter().map(|d| d.amount).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// The delta for one player, zero if they are not mentioned.
    #[must_use]
    pub fn delta_for(&self, player: PlayerId) -> i64 {
        self.deltas
            .iter()
            .filter(|d| d.player == player)
            .map(|d| d.amount)
            .sum()
    }
}
