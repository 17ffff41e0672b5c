//! Hit validation.
//!
//! A hit adds a single card from a hand onto an already-finalized
//! spread. Set spreads accept any card of the matching rank; run
//! spreads accept a matching-suit card whose *sequence value*
//! (`ace=1 .. 7=7, J=11, Q=12, K=13`) keeps the combined run gapless.
//!
//! Sequence values, not the canonical run order, govern hits. The two
//! disagree across the `7/J` boundary: `6-7-J` of one suit is a legal
//! spread, but no card can hit it because `7` and `J` are four apart
//! in sequence values. That asymmetry is the game rule, not a bug.

use smallvec::SmallVec;

use super::spread::{is_set, same_suit};
use crate::cards::Card;

/// Decide whether `card` may be played onto `spread`.
///
/// Total: spreads shorter than three cards, or spreads that are
/// neither uniformly one rank nor uniformly one suit (a malformed
/// state this engine never produces), yield `false` rather than a
/// panic. Pure: neither argument is mutated.
#[must_use]
pub fn is_valid_hit(card: Card, spread: &[Card]) -> bool {
    if spread.len() < 3 {
        return false;
    }

    if is_set(spread) {
        return card.rank == spread[0].rank;
    }

    if same_suit(spread) {
        if card.suit != spread[0].suit {
            return false;
        }

        let mut values: SmallVec<[u32; 11]> =
            spread.iter().map(|c| c.rank.seq_value()).collect();
        values.push(card.rank.seq_value());
        values.sort_unstable();
        // Gapless and duplicate-free. The low-ace run {1,2,3,4,5}
        // falls out of this check because the ace's sequence value is 1.
        return values.windows(2).all(|w| w[1] == w[0] + 1);
    }

    false
}
