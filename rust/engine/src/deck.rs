use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Fisher-Yates shuffle of a loose pile. Consumes the pile and returns the
/// permuted one, so callers cannot keep the old ordering around.
pub fn shuffle_pile(mut cards: Vec<Card>, rng: &mut ChaCha20Rng) -> Vec<Card> {
    cards.shuffle(rng);
    cards
}

/// Dealing source for match setup. Cards are dealt front to back; whatever
/// has not been dealt becomes the Future Pile.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep construction order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position].clone();
            self.position += 1;
            Some(c)
        }
    }

    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.deal_card()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Consumes the deck, returning the undealt remainder in order
    /// (top of the resulting pile = next card that would have been dealt).
    pub fn into_pile(mut self) -> Vec<Card> {
        self.cards.split_off(self.position)
    }
}
