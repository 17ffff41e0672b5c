//! Deterministic shuffling for reproducible deals.
//!
//! The server records the seed of every hand it deals; replaying the
//! seed replays the exact shuffle, which is what makes a disputed
//! real-money hand auditable after the fact.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used for the hand-start shuffle.
///
/// ChaCha8 keeps the stream cryptographic-quality while staying fast;
/// the same seed always produces the same deal.
#[derive(Clone, Debug)]
pub struct DealRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DealRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
