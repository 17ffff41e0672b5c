//! Table policy knobs.
//!
//! Two rules of Tonk vary house to house, so the engine takes them as
//! configuration instead of hardcoding a guess: when the stock-empty
//! condition fires, and how hit penalties accrue and decay.

use serde::{Deserialize, Serialize};

/// When the stock-empty terminal condition fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockEmptyPolicy {
    /// The hand ends the instant the last stock card is drawn.
    OnDepletion,
    /// The player who drew the last card still makes the mandatory
    /// discard; the hand ends after it. Their score then reflects a
    /// completed turn, so this is the default.
    #[default]
    AfterFinalDiscard,
}

/// How `hit_penalty_rounds` accrues on a spread's owner and decays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPenaltyPolicy {
    /// Added on the first hit against a player's spreads this hand.
    pub first_hit: u8,
    /// Added on each later hit against that player this hand.
    pub later_hit: u8,
    /// Subtracted at the start of the penalized player's turn.
    pub decay_per_turn: u8,
}

impl Default for HitPenaltyPolicy {
    fn default() -> Self {
        Self {
            first_hit: 2,
            later_hit: 1,
            decay_per_turn: 1,
        }
    }
}

/// Rules configuration for one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Cards dealt to each player at hand start.
    pub cards_per_player: usize,
    pub stock_empty: StockEmptyPolicy,
    pub hit_penalty: HitPenaltyPolicy,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            cards_per_player: 5,
            stock_empty: StockEmptyPolicy::default(),
            hit_penalty: HitPenaltyPolicy::default(),
        }
    }
}
