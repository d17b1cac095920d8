use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::card::Card;

/// Permutes a sequence of cards in place.
///
/// Injected into a [`Hand`](crate::hand::Hand) so that dealing and reshuffling
/// can be made deterministic. Any `FnMut(&mut [Card])` closure is a shuffler.
pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [Card]);
}

impl<F> Shuffler for F
where
    F: FnMut(&mut [Card]),
{
    fn shuffle(&mut self, cards: &mut [Card]) {
        self(cards)
    }
}

/// Uniform shuffler backed by `rand`'s `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        SliceRandom::shuffle(cards, &mut self.rng);
    }
}
