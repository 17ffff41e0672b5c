//! Rejected-action errors.
//!
//! An error here means the action simply does not happen; the table
//! state is unchanged. Terminal conditions are not errors — they come
//! back as a [`crate::outcome::RoundOutcome`] on a successful step.

use thiserror::Error;

use super::player::PlayerId;

/// Why a proposed table action was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("a card must be drawn before playing")]
    MustDrawFirst,

    #[error("a card was already drawn this turn")]
    AlreadyDrawn,

    #[error("the stock is empty")]
    StockEmpty,

    #[error("the discard pile is empty")]
    DiscardEmpty,

    #[error("no card at hand index {0}")]
    CardNotInHand(usize),

    #[error("hand index {0} used twice in one play")]
    DuplicateCardIndex(usize),

    #[error("those cards do not form a valid spread")]
    InvalidSpread,

    #[error("no spread at index {0}")]
    NoSuchSpread(usize),

    #[error("that card does not extend that spread")]
    InvalidHit,

    #[error("drop is blocked for {0} more turn(s) after being hit")]
    DropBlocked(u8),

    #[error("no seat {0} at this table")]
    UnknownSeat(PlayerId),
}
