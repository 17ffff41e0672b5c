//! The table snapshot and its turn transitions.
//!
//! `GameState` is an immutable snapshot of one hand in progress. Every
//! transition takes `&self`, validates the action, and returns a
//! [`Step`] holding the *next* snapshot plus the terminal
//! [`RoundOutcome`] if the action ended the hand. Inputs are never
//! mutated, so the same snapshot can be probed speculatively (UI
//! enablement, AI lookahead, optimistic prediction) without any risk
//! of corrupting it. Card sequences are `im` vectors, which makes the
//! snapshot clone behind each step O(1).
//!
//! ## Conservation invariant
//!
//! At every point, stock + discard + hands + spreads is exactly the
//! 40-card deck, each card once. Transitions only ever move cards
//! between those piles.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{full_deck, Card, DECK_SIZE};
use crate::config::{RulesConfig, StockEmptyPolicy};
use crate::outcome::{resolve_outcome, RoundOutcome, TerminalEvent};
use crate::rng::DealRng;
use crate::rules::{hand_points, is_valid_hit, is_valid_spread};

use super::error::ActionError;
use super::player::{Player, PlayerId, SeatMap};

/// Where the active player is within their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Must draw from the stock or take the discard top (or drop).
    AwaitingDraw,
    /// Has drawn; may lay spreads and hit, must eventually discard.
    AwaitingDiscard,
}

/// A finalized spread on the table.
///
/// Valid at the moment of creation and grown only through valid hits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    /// The player who laid it. Hits against it penalize this player.
    pub owner: PlayerId,
    pub cards: SmallVec<[Card; 10]>,
}

/// One applied transition: the next snapshot, and the hand-ending
/// outcome if the transition was terminal.
#[derive(Clone, Debug)]
pub struct Step {
    pub state: GameState,
    pub outcome: Option<RoundOutcome>,
}

/// The synced components of a mid-hand snapshot, as the state sync
/// channel delivers them. Feed to [`GameState::from_parts`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateParts {
    pub players: Vec<Player>,
    pub hands: Vec<Vec<Card>>,
    pub spreads: Vec<Spread>,
    pub stock: Vec<Card>,
    pub discard: Vec<Card>,
    pub active: PlayerId,
    pub phase: TurnPhase,
    pub spreads_laid: Vec<u8>,
    pub hits_taken: Vec<u8>,
    pub config: RulesConfig,
}

impl StateParts {
    /// Parts for a hand that has not started moving yet: empty table,
    /// seat 0 to act. Tests and rehydration tweak fields from here.
    #[must_use]
    pub fn new(players: Vec<Player>, hands: Vec<Vec<Card>>) -> Self {
        let n = players.len();
        Self {
            players,
            hands,
            spreads: Vec::new(),
            stock: Vec::new(),
            discard: Vec::new(),
            active: PlayerId::new(0),
            phase: TurnPhase::AwaitingDraw,
            spreads_laid: vec![0; n],
            hits_taken: vec![0; n],
            config: RulesConfig::default(),
        }
    }
}

/// Snapshot of one hand at a table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    players: Vec<Player>,
    hands: SeatMap<Vector<Card>>,
    spreads: Vector<Spread>,
    /// Draw pile; the back is the top.
    stock: Vector<Card>,
    /// Discard pile; the back is the top and the only card in play.
    discard: Vector<Card>,
    active: PlayerId,
    phase: TurnPhase,
    /// Spreads laid per seat this hand; the second one is a Reem.
    spreads_laid: SeatMap<u8>,
    /// Hits taken against each seat's spreads this hand.
    hits_taken: SeatMap<u8>,
    config: RulesConfig,
}

impl GameState {
    /// Shuffle with `seed` and deal a fresh hand.
    ///
    /// Seat order follows `players` order; seat 0 acts first. One card
    /// is flipped to start the discard pile and the rest becomes the
    /// stock.
    ///
    /// ## Panics
    ///
    /// If the roster is not 2-6 players, or the configured deal would
    /// consume the whole deck.
    #[must_use]
    pub fn deal(players: Vec<Player>, config: RulesConfig, seed: u64) -> GameState {
        let n = players.len();
        assert!((2..=6).contains(&n), "Tonk seats 2-6 players");
        assert!(
            config.cards_per_player >= 1 && config.cards_per_player * n < DECK_SIZE,
            "deal would exhaust the deck"
        );

        let mut deck = full_deck();
        DealRng::new(seed).shuffle(&mut deck);

        let mut hands = SeatMap::new(n, |_| Vector::new());
        for _ in 0..config.cards_per_player {
            for seat in PlayerId::all(n) {
                let card = deck.pop().expect("deck sized by the assert above");
                hands[seat].push_back(card);
            }
        }

        let upcard = deck.pop().expect("deal leaves at least one stock card");
        let mut discard = Vector::new();
        discard.push_back(upcard);

        GameState {
            players,
            hands,
            spreads: Vector::new(),
            stock: deck.into_iter().collect(),
            discard,
            active: PlayerId::new(0),
            phase: TurnPhase::AwaitingDraw,
            spreads_laid: SeatMap::with_value(n, 0),
            hits_taken: SeatMap::with_value(n, 0),
            config,
        }
    }

    /// Reassemble a snapshot from externally synced parts.
    ///
    /// The server is the authority on card consistency; this performs
    /// shape checks only (matching roster/hand/counter lengths).
    ///
    /// ## Panics
    ///
    /// If the per-seat collections do not match the roster length.
    #[must_use]
    pub fn from_parts(parts: StateParts) -> GameState {
        let n = parts.players.len();
        assert_eq!(parts.hands.len(), n, "one hand per seat");
        assert_eq!(parts.spreads_laid.len(), n, "one spread counter per seat");
        assert_eq!(parts.hits_taken.len(), n, "one hit counter per seat");
        assert!(parts.active.index() < n, "active seat must exist");

        GameState {
            players: parts.players,
            hands: SeatMap::new(n, |seat| parts.hands[seat.index()].iter().copied().collect()),
            spreads: parts.spreads.into_iter().collect(),
            stock: parts.stock.into_iter().collect(),
            discard: parts.discard.into_iter().collect(),
            active: parts.active,
            phase: parts.phase,
            spreads_laid: SeatMap::new(n, |seat| parts.spreads_laid[seat.index()]),
            hits_taken: SeatMap::new(n, |seat| parts.hits_taken[seat.index()]),
            config: parts.config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.get(seat.index())
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Cards still in a seat's hand, in hand order.
    #[must_use]
    pub fn hand_cards(&self, seat: PlayerId) -> Vec<Card> {
        self.hands[seat].iter().copied().collect()
    }

    #[must_use]
    pub fn hand_size(&self, seat: PlayerId) -> usize {
        self.hands[seat].len()
    }

    /// The seat's displayable score: spread cards are already out of
    /// the hand, so this is just the hand's pip total.
    #[must_use]
    pub fn hand_score(&self, seat: PlayerId) -> u32 {
        let cards: SmallVec<[Card; 16]> = self.hands[seat].iter().copied().collect();
        hand_points(&cards)
    }

    pub fn spreads(&self) -> impl Iterator<Item = &Spread> {
        self.spreads.iter()
    }

    #[must_use]
    pub fn spread_count(&self) -> usize {
        self.spreads.len()
    }

    /// Spreads a seat has laid this hand (two means Reem).
    #[must_use]
    pub fn spreads_laid(&self, seat: PlayerId) -> u8 {
        self.spreads_laid[seat]
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn discard_top(&self) -> Option<Card> {
        self.discard.back().copied()
    }

    /// Every card currently at the table, across all piles.
    ///
    /// Feed to [`crate::cards::is_complete_deck`] to check conservation.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.stock
            .iter()
            .chain(self.discard.iter())
            .copied()
            .chain(
                PlayerId::all(self.players.len())
                    .flat_map(move |seat| self.hands[seat].iter().copied()),
            )
            .chain(self.spreads.iter().flat_map(|s| s.cards.iter().copied()))
    }

    /// Whether a seat may drop right now: their turn, nothing drawn
    /// yet, and no outstanding hit penalty.
    #[must_use]
    pub fn can_drop(&self, seat: PlayerId) -> bool {
        self.active == seat
            && self.phase == TurnPhase::AwaitingDraw
            && self
                .player(seat)
                .map_or(false, |p| p.hit_penalty_rounds == 0)
    }

    // === Transitions ===

    /// Draw the top stock card.
    pub fn draw_stock(&self, seat: PlayerId) -> Result<Step, ActionError> {
        self.require_turn(seat, TurnPhase::AwaitingDraw)?;
        if self.stock.is_empty() {
            return Err(ActionError::StockEmpty);
        }

        let mut next = self.clone();
        let card = next.stock.pop_back().expect("checked non-empty above");
        next.hands[seat].push_back(card);
        next.phase = TurnPhase::AwaitingDiscard;

        let outcome = if next.stock.is_empty()
            && next.config.stock_empty == StockEmptyPolicy::OnDepletion
        {
            Some(resolve_outcome(&TerminalEvent::StockEmpty, &next))
        } else {
            None
        };
        Ok(Step { state: next, outcome })
    }

    /// Take the top of the discard pile instead of drawing.
    pub fn take_discard(&self, seat: PlayerId) -> Result<Step, ActionError> {
        self.require_turn(seat, TurnPhase::AwaitingDraw)?;
        if self.discard.is_empty() {
            return Err(ActionError::DiscardEmpty);
        }

        let mut next = self.clone();
        let card = next.discard.pop_back().expect("checked non-empty above");
        next.hands[seat].push_back(card);
        next.phase = TurnPhase::AwaitingDiscard;
        Ok(Step { state: next, outcome: None })
    }

    /// Lay the hand cards at `indices` down as a new spread.
    ///
    /// A second spread in one hand ends it immediately as a Reem.
    pub fn lay_spread(&self, seat: PlayerId, indices: &[usize]) -> Result<Step, ActionError> {
        self.require_turn(seat, TurnPhase::AwaitingDiscard)?;

        let hand = &self.hands[seat];
        let mut picked: SmallVec<[usize; 10]> = SmallVec::new();
        for &i in indices {
            if i >= hand.len() {
                return Err(ActionError::CardNotInHand(i));
            }
            if picked.contains(&i) {
                return Err(ActionError::DuplicateCardIndex(i));
            }
            picked.push(i);
        }

        let cards: SmallVec<[Card; 10]> = picked
            .iter()
            .map(|&i| *hand.get(i).expect("bounds checked above"))
            .collect();
        if !is_valid_spread(&cards) {
            return Err(ActionError::InvalidSpread);
        }

        let mut next = self.clone();
        picked.sort_unstable();
        for &i in picked.iter().rev() {
            next.hands[seat].remove(i);
        }
        next.spreads.push_back(Spread { owner: seat, cards });
        next.spreads_laid[seat] += 1;

        let outcome = if next.spreads_laid[seat] >= 2 {
            Some(resolve_outcome(&TerminalEvent::Reem { player: seat }, &next))
        } else if next.hands[seat].is_empty() {
            // Going out on a single spread leaves nothing to discard;
            // the hand ends as a regular win.
            Some(resolve_outcome(&TerminalEvent::HandEmptied { player: seat }, &next))
        } else {
            None
        };
        Ok(Step { state: next, outcome })
    }

    /// Hit the card at `card_index` onto the spread at `spread_index`.
    ///
    /// Any spread may be hit, own or opponent's. Every hit penalizes
    /// the spread's owner: the first against them this hand adds
    /// `first_hit` to their penalty, later ones add `later_hit`.
    pub fn hit(
        &self,
        seat: PlayerId,
        card_index: usize,
        spread_index: usize,
    ) -> Result<Step, ActionError> {
        self.require_turn(seat, TurnPhase::AwaitingDiscard)?;

        let card = *self.hands[seat]
            .get(card_index)
            .ok_or(ActionError::CardNotInHand(card_index))?;
        let spread = self
            .spreads
            .get(spread_index)
            .ok_or(ActionError::NoSuchSpread(spread_index))?;
        if !is_valid_hit(card, &spread.cards) {
            return Err(ActionError::InvalidHit);
        }
        let owner = spread.owner;

        let mut next = self.clone();
        next.hands[seat].remove(card_index);
        if let Some(s) = next.spreads.get_mut(spread_index) {
            s.cards.push(card);
        }

        let policy = next.config.hit_penalty;
        let add = if next.hits_taken[owner] == 0 {
            policy.first_hit
        } else {
            policy.later_hit
        };
        next.hits_taken[owner] = next.hits_taken[owner].saturating_add(1);
        next.players[owner.index()].hit_penalty_rounds =
            next.players[owner.index()].hit_penalty_rounds.saturating_add(add);

        let outcome = if next.hands[seat].is_empty() {
            Some(resolve_outcome(&TerminalEvent::HandEmptied { player: seat }, &next))
        } else {
            None
        };
        Ok(Step { state: next, outcome })
    }

    /// Discard the card at `card_index`, ending the turn.
    ///
    /// Ends the hand if this empties the hand, or if the stock is
    /// empty under the `AfterFinalDiscard` policy.
    pub fn discard(&self, seat: PlayerId, card_index: usize) -> Result<Step, ActionError> {
        self.require_turn(seat, TurnPhase::AwaitingDiscard)?;
        if card_index >= self.hands[seat].len() {
            return Err(ActionError::CardNotInHand(card_index));
        }

        let mut next = self.clone();
        let card = next.hands[seat].remove(card_index);
        next.discard.push_back(card);

        if next.hands[seat].is_empty() {
            let outcome = resolve_outcome(&TerminalEvent::HandEmptied { player: seat }, &next);
            return Ok(Step { state: next, outcome: Some(outcome) });
        }
        if next.stock.is_empty()
            && next.config.stock_empty == StockEmptyPolicy::AfterFinalDiscard
        {
            let outcome = resolve_outcome(&TerminalEvent::StockEmpty, &next);
            return Ok(Step { state: next, outcome: Some(outcome) });
        }

        next.advance_turn();
        Ok(Step { state: next, outcome: None })
    }

    /// Declare a drop: end the hand on the strength of a low score.
    ///
    /// Legal only before drawing and with no outstanding hit penalty.
    /// Whether it wins or gets caught is decided by the resolver.
    pub fn declare_drop(&self, seat: PlayerId) -> Result<Step, ActionError> {
        self.require_turn(seat, TurnPhase::AwaitingDraw)?;
        let penalty = self.players[seat.index()].hit_penalty_rounds;
        if penalty > 0 {
            return Err(ActionError::DropBlocked(penalty));
        }

        let next = self.clone();
        let outcome = resolve_outcome(&TerminalEvent::Drop { player: seat }, &next);
        Ok(Step { state: next, outcome: Some(outcome) })
    }

    /// Resolve a disconnect or table exit during the hand.
    ///
    /// This is an external event, not a card play, so it is legal on
    /// anyone's turn.
    pub fn forfeit(&self, leaver: PlayerId) -> Result<Step, ActionError> {
        if leaver.index() >= self.players.len() {
            return Err(ActionError::UnknownSeat(leaver));
        }

        let remaining: Vec<PlayerId> = PlayerId::all(self.players.len())
            .filter(|&p| p != leaver)
            .collect();
        let outcome = resolve_outcome(&TerminalEvent::Forfeit { remaining }, self);
        Ok(Step { state: self.clone(), outcome: Some(outcome) })
    }

    // === Internals ===

    fn require_turn(&self, seat: PlayerId, phase: TurnPhase) -> Result<(), ActionError> {
        if seat.index() >= self.players.len() {
            return Err(ActionError::UnknownSeat(seat));
        }
        if self.active != seat {
            return Err(ActionError::NotYourTurn(seat));
        }
        if self.phase != phase {
            return Err(match phase {
                TurnPhase::AwaitingDiscard => ActionError::MustDrawFirst,
                TurnPhase::AwaitingDraw => ActionError::AlreadyDrawn,
            });
        }
        Ok(())
    }

    fn advance_turn(&mut self) {
        let n = self.players.len() as u8;
        self.active = PlayerId::new((self.active.0 + 1) % n);
        self.phase = TurnPhase::AwaitingDraw;

        // Penalty decays as the penalized player's turns start.
        let decay = self.config.hit_penalty.decay_per_turn;
        let incoming = &mut self.players[self.active.index()];
        incoming.hit_penalty_rounds = incoming.hit_penalty_rounds.saturating_sub(decay);
    }
}
