//! Legal-move enumeration.
//!
//! One implementation feeds every consumer that needs to know "what
//! can this player do right now": UI button enablement, the AI player,
//! and optimistic client-side prediction. All of it runs on the same
//! predicates as the authoritative transitions, so a move listed here
//! is exactly a move the table will accept.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::rules::is_valid_hit;
use crate::state::{GameState, PlayerId, Spread, TurnPhase};

/// One playable hit: hand card onto table spread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitPlay {
    pub card_index: usize,
    pub spread_index: usize,
}

/// Everything a seat can legally do against a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub can_draw_stock: bool,
    pub can_take_discard: bool,
    pub can_drop: bool,
    /// Hand indices of each layable spread (maximal groups and runs).
    pub spreads: Vec<Vec<usize>>,
    pub hits: Vec<HitPlay>,
    /// Whether a discard is expected to end the turn.
    pub can_discard: bool,
}

impl LegalMoves {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.can_draw_stock
            && !self.can_take_discard
            && !self.can_drop
            && !self.can_discard
            && self.spreads.is_empty()
            && self.hits.is_empty()
    }
}

/// Enumerate the legal moves for `seat`.
///
/// A seat that is not active has no moves. During the draw phase the
/// choices are the draw sources and (penalty permitting) the drop;
/// after drawing, spreads, hits, and the discard open up.
#[must_use]
pub fn legal_moves(state: &GameState, seat: PlayerId) -> LegalMoves {
    if seat != state.active_player() || seat.index() >= state.player_count() {
        return LegalMoves::default();
    }

    match state.phase() {
        TurnPhase::AwaitingDraw => LegalMoves {
            can_draw_stock: state.stock_len() > 0,
            can_take_discard: state.discard_top().is_some(),
            can_drop: state.can_drop(seat),
            ..LegalMoves::default()
        },
        TurnPhase::AwaitingDiscard => {
            let hand = state.hand_cards(seat);
            let spreads: Vec<&Spread> = state.spreads().collect();
            LegalMoves {
                spreads: spread_candidates(&hand),
                hits: hit_plays(&hand, &spreads),
                can_discard: !hand.is_empty(),
                ..LegalMoves::default()
            }
        }
    }
}

/// Hand-index groups that would form a valid spread, maximal only:
/// whole rank groups of three or more, and longest consecutive suit
/// runs. Sub-slices of a listed run are also legal to lay but add no
/// information, so they are not enumerated.
#[must_use]
pub fn spread_candidates(hand: &[Card]) -> Vec<Vec<usize>> {
    let mut out = Vec::new();

    // Rank groups.
    for rank in crate::cards::Rank::ALL {
        let group: Vec<usize> = hand
            .iter()
            .enumerate()
            .filter(|(_, c)| c.rank == rank)
            .map(|(i, _)| i)
            .collect();
        if group.len() >= 3 {
            out.push(group);
        }
    }

    // Suit runs: walk each suit's cards in sequence order and cut at
    // every gap in canonical indices.
    for suit in crate::cards::Suit::ALL {
        let mut in_suit: SmallVec<[(u32, usize); 10]> = hand
            .iter()
            .enumerate()
            .filter(|(_, c)| c.suit == suit)
            .map(|(i, c)| (c.rank.seq_index(), i))
            .collect();
        in_suit.sort_unstable();

        let mut stretch: Vec<usize> = Vec::new();
        let mut prev: Option<u32> = None;
        for &(seq, hand_index) in &in_suit {
            match prev {
                Some(p) if seq == p + 1 => stretch.push(hand_index),
                _ => {
                    if stretch.len() >= 3 {
                        out.push(std::mem::take(&mut stretch));
                    }
                    stretch.clear();
                    stretch.push(hand_index);
                }
            }
            prev = Some(seq);
        }
        if stretch.len() >= 3 {
            out.push(stretch);
        }
    }

    out
}

/// Every (hand card, spread) pair that is a legal hit.
#[must_use]
pub fn hit_plays(hand: &[Card], spreads: &[&Spread]) -> Vec<HitPlay> {
    let mut out = Vec::new();
    for (card_index, &card) in hand.iter().enumerate() {
        for (spread_index, spread) in spreads.iter().enumerate() {
            if is_valid_hit(card, &spread.cards) {
                out.push(HitPlay {
                    card_index,
                    spread_index,
                });
            }
        }
    }
    out
}
