//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomizer: each bag holds one of every kind,
//! shuffled. Kinds are handed out until the bag is empty, then a fresh bag is
//! shuffled. Any 7 draws aligned to a bag boundary are a permutation of all
//! seven kinds.
//!
//! The sequence is infinite and pull-based: [`BagRandomizer`] is an
//! [`Iterator`] that never returns `None`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct BagRandomizer {
    /// Current bag of pieces
    bag: [PieceKind; PieceKind::LEN],
    /// Index of the next kind to hand out
    bag_index: usize,
    /// RNG for shuffling
    rng: StdRng,
}

impl BagRandomizer {
    /// Create a randomizer.
    ///
    /// With a seed the sequence is reproducible; without one the shuffles draw
    /// from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            bag: PieceKind::ALL,
            // Exhausted, so the first draw shuffles.
            bag_index: PieceKind::LEN,
            rng,
        }
    }

    /// Shorthand for a reproducible randomizer.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }

    /// Draw the next kind, shuffling a new bag when the current one is spent.
    pub fn next_kind(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }

        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }

    /// Kinds left in the current bag before the next shuffle.
    pub fn remaining_in_bag(&self) -> usize {
        self.bag.len() - self.bag_index
    }
}

impl Iterator for BagRandomizer {
    type Item = PieceKind;

    fn next(&mut self) -> Option<PieceKind> {
        Some(self.next_kind())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
