//! Ranks, suits, and the two Tonk value tables.
//!
//! Tonk plays with a 40-card deck: the 8s, 9s, and 10s are removed.
//! A rank therefore carries *three* numeric views, and they are not
//! interchangeable:
//!
//! - **pip value** — what a card scores in a hand (`ace=1`, `2..7` face,
//!   court cards 10 each).
//! - **sequence index** — position in the canonical run order
//!   `[ace, 2, 3, 4, 5, 6, 7, J, Q, K]`. Spread runs are consecutive in
//!   *this* order, so `6-7-J` of one suit is a legal run.
//! - **sequence value** — the integer used for hit adjacency (`J=11`,
//!   `Q=12`, `K=13`). Under this table `7` and `J` are *not* adjacent,
//!   so a run spread can exist that no card can legally extend across
//!   the `7/J` boundary.
//!
//! The pip and sequence tables intentionally disagree on the court
//! cards. Collapsing them into one table changes which hits are legal.

use serde::{Deserialize, Serialize};

/// Card rank. 8, 9, and 10 do not exist in the Tonk deck.
///
/// Serializes to the wire strings the state sync channel uses:
/// `"ace"`, `"2"` .. `"7"`, `"J"`, `"Q"`, `"K"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "ace")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    /// All ranks in canonical sequence order.
    pub const ALL: [Rank; 10] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Scoring value: ace=1, 2..7 face value, court cards 10.
    #[must_use]
    pub const fn pip_value(self) -> u32 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    /// Position in the canonical run order `[ace,2,..,7,J,Q,K]`.
    ///
    /// Spread runs are validated against this order, which makes `J`
    /// adjacent to `7`.
    #[must_use]
    pub const fn seq_index(self) -> u32 {
        match self {
            Rank::Ace => 0,
            Rank::Two => 1,
            Rank::Three => 2,
            Rank::Four => 3,
            Rank::Five => 4,
            Rank::Six => 5,
            Rank::Seven => 6,
            Rank::Jack => 7,
            Rank::Queen => 8,
            Rank::King => 9,
        }
    }

    /// Hit-adjacency value: ace=1, 2..7 face value, J=11, Q=12, K=13.
    ///
    /// This is the table used when deciding whether a hit keeps a run
    /// gapless. It is deliberately not `pip_value` and deliberately not
    /// `seq_index`.
    #[must_use]
    pub const fn seq_value(self) -> u32 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rank::Ace => "ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        };
        f.write_str(s)
    }
}

/// Card suit. Serializes to the wire strings (`"Hearts"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        f.write_str(s)
    }
}

/// An immutable card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
