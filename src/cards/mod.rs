//! Card model: ranks, suits, value tables, and the 40-card deck.

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{full_deck, is_complete_deck, DECK_SIZE};
