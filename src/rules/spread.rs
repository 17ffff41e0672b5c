//! Spread validation.
//!
//! A spread is at least three cards that are either all of one rank
//! ("set") or all of one suit and consecutive in the canonical run
//! order `[ace,2,3,4,5,6,7,J,Q,K]` ("run"). Note that run order puts
//! `J` directly after `7`; it is not point-value order.

use smallvec::SmallVec;

use crate::cards::Card;

/// Decide whether `cards` forms a valid spread.
///
/// Input order is irrelevant. Total: anything shorter than three
/// cards, or satisfying neither the set nor the run shape, is `false`.
/// Never panics and never touches its input.
#[must_use]
pub fn is_valid_spread(cards: &[Card]) -> bool {
    if cards.len() < 3 {
        return false;
    }
    is_set(cards) || is_run(cards)
}

/// All cards share one rank.
pub(crate) fn is_set(cards: &[Card]) -> bool {
    cards.iter().all(|c| c.rank == cards[0].rank)
}

/// All cards share one suit and occupy consecutive sequence indices.
pub(crate) fn is_run(cards: &[Card]) -> bool {
    if !same_suit(cards) {
        return false;
    }

    let mut indices: SmallVec<[u32; 10]> = cards.iter().map(|c| c.rank.seq_index()).collect();
    indices.sort_unstable();
    // Strictly increasing by one also rules out duplicate ranks.
    indices.windows(2).all(|w| w[1] == w[0] + 1)
}

pub(crate) fn same_suit(cards: &[Card]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_short_inputs_are_invalid() {
        assert!(!is_valid_spread(&[]));
        assert!(!is_valid_spread(&[card(Rank::Seven, Suit::Hearts)]));
        assert!(!is_valid_spread(&[
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Seven, Suit::Clubs),
        ]));
    }

    #[test]
    fn test_same_rank_triple_any_order() {
        let cards = [
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Seven, Suit::Spades),
        ];
        assert!(is_valid_spread(&cards));

        let reversed = [cards[2], cards[0], cards[1]];
        assert!(is_valid_spread(&reversed));
    }

    #[test]
    fn test_four_of_a_kind() {
        let cards = [
            card(Rank::Queen, Suit::Hearts),
            card(Rank::Queen, Suit::Clubs),
            card(Rank::Queen, Suit::Spades),
            card(Rank::Queen, Suit::Diamonds),
        ];
        assert!(is_valid_spread(&cards));
    }

    #[test]
    fn test_suited_run_any_order() {
        let cards = [
            card(Rank::Three, Suit::Hearts),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
        ];
        assert!(is_valid_spread(&cards));
    }

    #[test]
    fn test_gapped_run_is_invalid() {
        let cards = [
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Five, Suit::Hearts),
        ];
        assert!(!is_valid_spread(&cards));
    }

    #[test]
    fn test_seven_jack_queen_is_a_run() {
        // Canonical order makes J adjacent to 7.
        let cards = [
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Jack, Suit::Clubs),
            card(Rank::Queen, Suit::Clubs),
        ];
        assert!(is_valid_spread(&cards));
    }

    #[test]
    fn test_mixed_suit_run_is_invalid() {
        let cards = [
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Four, Suit::Hearts),
        ];
        assert!(!is_valid_spread(&cards));
    }

    #[test]
    fn test_duplicate_rank_in_run_is_invalid() {
        // Impossible from a real deck, but the predicate is total.
        let cards = [
            card(Rank::Two, Suit::Hearts),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
        ];
        assert!(!is_valid_spread(&cards));
    }
}
