//! The 40-card Tonk deck.

use rustc_hash::FxHashSet;

use super::card::{Card, Rank, Suit};

/// Number of cards in a Tonk deck (10 ranks x 4 suits).
pub const DECK_SIZE: usize = 40;

/// Build the full 40-card deck in canonical order (suits, then ranks).
///
/// Shuffling is the caller's job; see [`crate::rng::DealRng`].
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Check that `cards` is exactly the 40-card set, each card once.
///
/// The table invariant is that stock, discard, hands, and spreads
/// together always partition the deck; this is the check behind it.
#[must_use]
pub fn is_complete_deck<I>(cards: I) -> bool
where
    I: IntoIterator<Item = Card>,
{
    let mut seen = FxHashSet::default();
    let mut count = 0usize;
    for card in cards {
        if !seen.insert(card) {
            return false;
        }
        count += 1;
    }
    count == DECK_SIZE
}
