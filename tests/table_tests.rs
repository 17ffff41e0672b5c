//! Full-hand integration tests: dealing, turn flow, hit penalties,
//! and the stock-empty ending under both timing policies.

use tonk_rules::{
    is_complete_deck, ActionError, Card, GameState, Player, PlayerId, Rank, RulesConfig,
    StateParts, StockEmptyPolicy, Suit, TurnPhase, WinType,
};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn roster(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::new(format!("p{i}"), 1_000, true)).collect()
}

fn seat(i: u8) -> PlayerId {
    PlayerId::new(i)
}

/// Draw-then-discard until the hand ends; returns the ending outcome
/// and how many stock cards were left when the outcome fired.
fn cycle_until_end(mut state: GameState) -> (tonk_rules::RoundOutcome, usize) {
    for _ in 0..200 {
        let active = state.active_player();

        let step = state.draw_stock(active).unwrap();
        if let Some(outcome) = step.outcome {
            return (outcome, step.state.stock_len());
        }
        state = step.state;

        // Throw back the card just drawn.
        let drawn_index = state.hand_size(active) - 1;
        let step = state.discard(active, drawn_index).unwrap();
        if let Some(outcome) = step.outcome {
            return (outcome, step.state.stock_len());
        }
        state = step.state;
    }
    panic!("hand did not end");
}

#[test]
fn stock_empty_fires_after_the_final_discard_by_default() {
    let config = RulesConfig::default();
    assert_eq!(config.stock_empty, StockEmptyPolicy::AfterFinalDiscard);

    let state = GameState::deal(roster(2), config, 7);
    let (outcome, _) = cycle_until_end(state.clone());

    assert_eq!(outcome.win_type, WinType::StockEmpty);
    assert!(!outcome.winners.is_empty());

    // Winners are exactly the seats at the minimum score.
    let min = (0..2).map(|i| state.hand_score(seat(i))).min().unwrap();
    for winner in &outcome.winners {
        assert_eq!(state.hand_score(*winner), min);
    }
}

#[test]
fn stock_empty_can_fire_on_depletion_instead() {
    let config = RulesConfig {
        stock_empty: StockEmptyPolicy::OnDepletion,
        ..RulesConfig::default()
    };
    let state = GameState::deal(roster(2), config, 7);

    // Walk manually so we can see which action fired the ending.
    let mut state = state;
    loop {
        let active = state.active_player();
        let step = state.draw_stock(active).unwrap();
        if step.state.stock_len() == 0 {
            // The depleting draw itself must end the hand.
            let outcome = step.outcome.expect("ends on depletion");
            assert_eq!(outcome.win_type, WinType::StockEmpty);
            // The hand ended mid-turn: the drawn card is still in hand.
            assert_eq!(step.state.phase(), TurnPhase::AwaitingDiscard);
            break;
        }
        assert!(step.outcome.is_none());
        state = step.state;
        let drawn_index = state.hand_size(active) - 1;
        state = state.discard(active, drawn_index).unwrap().state;
    }
}

#[test]
fn both_policies_agree_on_everything_but_timing() {
    let after = GameState::deal(roster(2), RulesConfig::default(), 11);
    let (outcome_after, stock_after) = cycle_until_end(after);

    let on = GameState::deal(
        roster(2),
        RulesConfig {
            stock_empty: StockEmptyPolicy::OnDepletion,
            ..RulesConfig::default()
        },
        11,
    );
    let (outcome_on, stock_on) = cycle_until_end(on);

    assert_eq!(stock_after, 0);
    assert_eq!(stock_on, 0);
    assert_eq!(outcome_after.win_type, WinType::StockEmpty);
    assert_eq!(outcome_on.win_type, WinType::StockEmpty);
}

#[test]
fn cards_are_conserved_through_play() {
    let mut state = GameState::deal(roster(3), RulesConfig::default(), 3);
    assert!(is_complete_deck(state.all_cards()));

    for turn in 0..12 {
        let active = state.active_player();

        // Alternate draw sources when the discard pile allows it.
        let step = if turn % 3 == 0 && state.discard_top().is_some() {
            state.take_discard(active).unwrap()
        } else {
            state.draw_stock(active).unwrap()
        };
        assert!(is_complete_deck(step.state.all_cards()));
        state = step.state;

        let step = state.discard(active, 0).unwrap();
        assert!(is_complete_deck(step.state.all_cards()));
        if step.outcome.is_some() {
            break;
        }
        state = step.state;
    }
}

#[test]
fn same_seed_same_hand() {
    let a = GameState::deal(roster(4), RulesConfig::default(), 12345);
    let b = GameState::deal(roster(4), RulesConfig::default(), 12345);
    assert_eq!(a, b);

    let c = GameState::deal(roster(4), RulesConfig::default(), 54321);
    assert_ne!(a, c);
}

fn penalized_table() -> GameState {
    // Seat 1 owns a 2-3-4 of hearts run; seat 0 has drawn and holds
    // two cards that hit it.
    let mut parts = StateParts::new(
        roster(2),
        vec![
            vec![
                card(Rank::Five, Suit::Hearts),
                card(Rank::Ace, Suit::Hearts),
                card(Rank::King, Suit::Diamonds),
                card(Rank::Queen, Suit::Diamonds),
            ],
            vec![
                card(Rank::Seven, Suit::Spades),
                card(Rank::Six, Suit::Spades),
                card(Rank::Two, Suit::Clubs),
            ],
        ],
    );
    parts.spreads = vec![tonk_rules::Spread {
        owner: seat(1),
        cards: [
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
        ]
        .into_iter()
        .collect(),
    }];
    parts.spreads_laid = vec![0, 1];
    parts.stock = vec![
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::Jack, Suit::Spades),
    ];
    parts.phase = TurnPhase::AwaitingDiscard;
    GameState::from_parts(parts)
}

#[test]
fn hits_penalize_the_spread_owner_two_then_one() {
    let state = penalized_table();

    // First hit against seat 1 this hand: +2.
    let step = state.hit(seat(0), 0, 0).unwrap();
    assert_eq!(step.state.player(seat(1)).unwrap().hit_penalty_rounds, 2);

    // Second hit (the ace completes the low run): +1.
    let step = step.state.hit(seat(0), 0, 0).unwrap();
    assert_eq!(step.state.player(seat(1)).unwrap().hit_penalty_rounds, 3);
}

#[test]
fn penalty_blocks_the_drop_and_decays_per_turn() {
    let state = penalized_table();

    // Two hits, then end the turn.
    let state = state.hit(seat(0), 0, 0).unwrap().state;
    let state = state.hit(seat(0), 0, 0).unwrap().state;
    let state = state.discard(seat(0), 0).unwrap().state;

    // Seat 1's turn began: 3 decayed to 2, still blocked.
    assert_eq!(state.player(seat(1)).unwrap().hit_penalty_rounds, 2);
    assert!(!state.can_drop(seat(1)));
    assert_eq!(
        state.declare_drop(seat(1)).unwrap_err(),
        ActionError::DropBlocked(2)
    );

    // Two more full rounds clear it.
    let mut state = state;
    for _ in 0..2 {
        let p1 = state.draw_stock(seat(1)).unwrap().state;
        let p1_last = p1.hand_size(seat(1)) - 1;
        let back_to_p0 = p1.discard(seat(1), p1_last).unwrap().state;
        let p0 = back_to_p0.draw_stock(seat(0)).unwrap().state;
        let p0_last = p0.hand_size(seat(0)) - 1;
        state = p0.discard(seat(0), p0_last).unwrap().state;
    }

    assert_eq!(state.player(seat(1)).unwrap().hit_penalty_rounds, 0);
    assert!(state.can_drop(seat(1)));
    assert!(state.declare_drop(seat(1)).unwrap().outcome.is_some());
}

#[test]
fn hitting_your_own_spread_penalizes_yourself() {
    let mut parts = StateParts::new(
        roster(2),
        vec![
            vec![card(Rank::Five, Suit::Hearts), card(Rank::King, Suit::Diamonds)],
            vec![card(Rank::Two, Suit::Clubs)],
        ],
    );
    parts.spreads = vec![tonk_rules::Spread {
        owner: seat(0),
        cards: [
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
        ]
        .into_iter()
        .collect(),
    }];
    parts.spreads_laid = vec![1, 0];
    parts.phase = TurnPhase::AwaitingDiscard;
    let state = GameState::from_parts(parts);

    let step = state.hit(seat(0), 0, 0).unwrap();
    assert_eq!(step.state.player(seat(0)).unwrap().hit_penalty_rounds, 2);
}

#[test]
fn bad_spread_and_hit_attempts_leave_state_unchanged() {
    let state = penalized_table();
    let snapshot = state.clone();

    // Not a spread: 5h + Kd + Qd.
    assert_eq!(
        state.lay_spread(seat(0), &[0, 2, 3]).unwrap_err(),
        ActionError::InvalidSpread
    );
    assert_eq!(
        state.lay_spread(seat(0), &[0, 0, 1]).unwrap_err(),
        ActionError::DuplicateCardIndex(0)
    );
    assert_eq!(
        state.lay_spread(seat(0), &[0, 1, 9]).unwrap_err(),
        ActionError::CardNotInHand(9)
    );
    assert_eq!(state.hit(seat(0), 2, 0).unwrap_err(), ActionError::InvalidHit);
    assert_eq!(state.hit(seat(0), 0, 5).unwrap_err(), ActionError::NoSuchSpread(5));

    assert_eq!(state, snapshot);
}

#[test]
fn laying_a_valid_spread_moves_cards_to_the_table() {
    let mut parts = StateParts::new(
        roster(2),
        vec![
            vec![
                card(Rank::Five, Suit::Hearts),
                card(Rank::Five, Suit::Clubs),
                card(Rank::King, Suit::Diamonds),
                card(Rank::Five, Suit::Spades),
            ],
            vec![card(Rank::Two, Suit::Clubs)],
        ],
    );
    parts.phase = TurnPhase::AwaitingDiscard;
    let state = GameState::from_parts(parts);

    let step = state.lay_spread(seat(0), &[0, 1, 3]).unwrap();
    assert!(step.outcome.is_none());
    assert_eq!(step.state.hand_cards(seat(0)), vec![card(Rank::King, Suit::Diamonds)]);
    assert_eq!(step.state.spread_count(), 1);

    let spread = step.state.spreads().next().unwrap();
    assert_eq!(spread.owner, seat(0));
    assert_eq!(spread.cards.len(), 3);
}

#[test]
fn lay_spread_errors_do_not_partially_apply() {
    // A valid set picked alongside an out-of-range index: nothing moves.
    let mut parts = StateParts::new(
        roster(2),
        vec![
            vec![
                card(Rank::Five, Suit::Hearts),
                card(Rank::Five, Suit::Clubs),
                card(Rank::Five, Suit::Spades),
            ],
            vec![card(Rank::Two, Suit::Clubs)],
        ],
    );
    parts.phase = TurnPhase::AwaitingDiscard;
    let state = GameState::from_parts(parts);
    let snapshot = state.clone();

    assert!(state.lay_spread(seat(0), &[0, 1, 2, 7]).is_err());
    assert_eq!(state, snapshot);
}
