//! # tonk-rules
//!
//! Authoritative rules engine for the card game **Tonk**: spread and
//! hit validation, hand scoring, turn transitions, and round-outcome /
//! payout resolution over the 40-card deck (8s, 9s, and 10s removed).
//!
//! ## Design Principles
//!
//! 1. **One implementation of the rules**: UI enablement, AI move
//!    selection, and optimistic prediction all import these functions.
//!    Nothing re-implements a predicate.
//!
//! 2. **Pure and total**: predicates never panic on well-typed input
//!    and never mutate their arguments. Transitions take `&self` and
//!    return a new snapshot; `im` persistent vectors keep those clones
//!    O(1).
//!
//! 3. **Money moves elsewhere**: the resolver produces a verdict, the
//!    settlement describes chip deltas, and a [`ledger::ChipLedger`]
//!    applies them idempotently under an explicit key. No global
//!    mutable state anywhere in the crate.
//!
//! ## Modules
//!
//! - `cards`: ranks, suits, the two value tables, the 40-card deck
//! - `rules`: `is_valid_spread`, `is_valid_hit`, `hand_points`
//! - `state`: players, the table snapshot, pure turn transitions
//! - `outcome`: terminal events, the resolver, chip settlement
//! - `ledger`: idempotent chip application behind a trait
//! - `moves`: legal-move enumeration for UI and AI
//! - `config`: stock-empty timing and hit-penalty policy
//! - `rng`: seeded shuffling for reproducible deals

pub mod cards;
pub mod config;
pub mod ledger;
pub mod moves;
pub mod outcome;
pub mod rng;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use crate::cards::{full_deck, is_complete_deck, Card, Rank, Suit, DECK_SIZE};

pub use crate::rules::{hand_points, is_valid_hit, is_valid_spread};

pub use crate::state::{
    ActionError, GameState, Player, PlayerId, SeatMap, Spread, StateParts, Step, TurnPhase,
};

pub use crate::outcome::{
    resolve_outcome, ChipDelta, RoundOutcome, Settlement, TerminalEvent, WinType,
};

pub use crate::ledger::{ChipLedger, LedgerError, LedgerStatus, MemoryLedger};

pub use crate::moves::{hit_plays, legal_moves, spread_candidates, HitPlay, LegalMoves};

pub use crate::config::{HitPenaltyPolicy, RulesConfig, StockEmptyPolicy};

pub use crate::rng::DealRng;
