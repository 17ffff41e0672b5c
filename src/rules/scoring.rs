//! Hand scoring.

use crate::cards::Card;

/// Sum the pip values of `cards` (ace=1, 2..7 face, court cards 10).
///
/// Scores exactly the list it is given. Cards already moved into a
/// spread no longer count against a hand, so callers pass the cards
/// still in hand, not the dealt thirteen-odd.
#[must_use]
pub fn hand_points(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.rank.pip_value()).sum()
}
