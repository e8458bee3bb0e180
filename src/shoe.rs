//! The shuffled shoe cards are drawn from.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeExhausted;

/// A single shuffled deck. The last card in the list is the top of the shoe.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Creates a shuffled 52-card shoe from a seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{DECK_SIZE, Shoe};
    ///
    /// let shoe = Shoe::new(7);
    /// assert_eq!(shoe.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(&mut rng)
    }

    /// Creates a shuffled 52-card shoe using the given random number generator.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::ordered_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a shoe holding exactly `cards`, drawn from the end first.
    ///
    /// No shuffling or validation takes place, which makes this suitable for
    /// stacked test decks and for restoring a saved shoe.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    fn ordered_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeExhausted`] if the shoe is empty.
    pub fn draw(&mut self) -> Result<Card, ShoeExhausted> {
        let card = self.cards.pop().ok_or(ShoeExhausted)?;
        log::trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
