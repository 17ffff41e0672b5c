//! Terminal events and the round-outcome resolver.

use serde::{Deserialize, Serialize};

use crate::state::{GameState, PlayerId};

/// The five ways a hand can end, plus forfeiture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalEvent {
    /// A second spread laid by one player in one hand.
    Reem { player: PlayerId },
    /// A declared drop; the resolver decides win or caught.
    Drop { player: PlayerId },
    /// A hand emptied through discard, hit, or a final spread.
    HandEmptied { player: PlayerId },
    /// The stock ran out (timing governed by `StockEmptyPolicy`).
    StockEmpty,
    /// A player disconnected or left mid-hand. External event; the
    /// winners are handed in rather than computed from cards.
    Forfeit { remaining: Vec<PlayerId> },
}

/// Classification of a finished hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinType {
    Reem,
    DropWin,
    DropCaught,
    RegularWin,
    StockEmpty,
    Forfeit,
}

/// The verdict of a finished hand.
///
/// Derived, never stored: recomputed at the moment the terminal event
/// fires. `winners` is always the complete set of players sharing the
/// minimum score — never an arbitrary single pick. Chips do not move
/// here; see [`super::Settlement`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winners: Vec<PlayerId>,
    pub win_type: WinType,
    /// Multiplier applied to the table stake when settling.
    pub payout_multiplier: u32,
    /// Set on drop outcomes; a caught dropper pays the penalty.
    pub dropper: Option<PlayerId>,
}

impl RoundOutcome {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }
}

/// Resolve a terminal event against the current snapshot.
///
/// Pure: reads hand scores from `state`, mutates nothing.
#[must_use]
pub fn resolve_outcome(event: &TerminalEvent, state: &GameState) -> RoundOutcome {
    match event {
        TerminalEvent::Reem { player } => RoundOutcome {
            winners: vec![*player],
            win_type: WinType::Reem,
            payout_multiplier: 2,
            dropper: None,
        },

        TerminalEvent::HandEmptied { player } => RoundOutcome {
            winners: vec![*player],
            win_type: WinType::RegularWin,
            payout_multiplier: 1,
            dropper: None,
        },

        TerminalEvent::StockEmpty => {
            let winners = min_score_seats(state, None);
            RoundOutcome {
                winners,
                win_type: WinType::StockEmpty,
                payout_multiplier: 1,
                dropper: None,
            }
        }

        TerminalEvent::Forfeit { remaining } => RoundOutcome {
            winners: remaining.clone(),
            win_type: WinType::Forfeit,
            payout_multiplier: 1,
            dropper: None,
        },

        TerminalEvent::Drop { player } => resolve_drop(*player, state),
    }
}

fn resolve_drop(dropper: PlayerId, state: &GameState) -> RoundOutcome {
    let drop_score = state.hand_score(dropper);
    let best_other = PlayerId::all(state.player_count())
        .filter(|&p| p != dropper)
        .map(|p| state.hand_score(p))
        .min();

    match best_other {
        // Degenerate single-seat state: nobody left to catch the drop.
        None => RoundOutcome {
            winners: vec![dropper],
            win_type: WinType::DropWin,
            payout_multiplier: 1,
            dropper: Some(dropper),
        },
        Some(other) if drop_score < other => RoundOutcome {
            winners: vec![dropper],
            win_type: WinType::DropWin,
            payout_multiplier: 1,
            dropper: Some(dropper),
        },
        // Equal counts as caught: the dropper gambled and lost.
        Some(_) => RoundOutcome {
            winners: min_score_seats(state, Some(dropper)),
            win_type: WinType::DropCaught,
            payout_multiplier: 2,
            dropper: Some(dropper),
        },
    }
}

/// All seats holding the minimum hand score, optionally excluding one.
fn min_score_seats(state: &GameState, exclude: Option<PlayerId>) -> Vec<PlayerId> {
    let candidates: Vec<PlayerId> = PlayerId::all(state.player_count())
        .filter(|&p| Some(p) != exclude)
        .collect();

    let min = candidates.iter().map(|&p| state.hand_score(p)).min();
    match min {
        Some(min) => candidates
            .into_iter()
            .filter(|&p| state.hand_score(p) == min)
            .collect(),
        None => Vec::new(),
    }
}
