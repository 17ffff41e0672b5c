//! Seats and player records.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier at a table, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate the seats of a table with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// A player record as the session store emits it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub username: String,
    pub chips: i64,
    pub is_human: bool,
    /// Turns this player is still blocked from dropping after being hit.
    pub hit_penalty_rounds: u8,
}

impl Player {
    /// Convenience constructor for a fresh (un-penalized) player.
    #[must_use]
    pub fn new(username: impl Into<String>, chips: i64, is_human: bool) -> Self {
        Self {
            username: username.into(),
            chips,
            is_human,
            hit_penalty_rounds: 0,
        }
    }
}

/// Per-seat storage with O(1) access, indexable by [`PlayerId`].
///
/// Serializes transparently as the underlying array, one entry per
/// seat, which is the shape the sync channel uses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Build from a factory invoked once per seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: (0..player_count as u8).map(|i| factory(PlayerId(i))).collect(),
        }
    }

    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: PlayerId) -> &T {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<PlayerId> for SeatMap<T> {
    fn index_mut(&mut self, seat: PlayerId) -> &mut T {
        &mut self.data[seat.index()]
    }
}
