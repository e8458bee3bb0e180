//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total a hand can hold without busting.
pub const BLACKJACK: u8 = 21;

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood.
    Stand,
    /// Hand has busted (over 21).
    Bust,
}

/// A hand of cards with its wager.
///
/// The total is maintained incrementally: every Ace enters at 11 and is
/// lowered to 1 only while the hand would otherwise bust.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Best total not exceeding 21 when possible.
    value: u8,
    /// Aces still counted as 11.
    soft_aces: u8,
    /// Current status of the hand.
    status: HandStatus,
    /// Bet amount for this hand.
    bet: usize,
    /// Whether the bet on this hand was doubled.
    doubled: bool,
    /// Whether this hand is from a split.
    from_split: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
            soft_aces: 0,
            status: HandStatus::Active,
            bet,
            doubled: false,
            from_split: false,
        }
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        let mut hand = Self::new(bet);
        hand.from_split = true;
        hand.add_card(card);
        hand
    }

    /// Adds a card to the hand and rescores it.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new(0);
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Clubs, Rank::Nine));
    /// assert_eq!(hand.value(), 21);
    /// assert_eq!(hand.soft_ace_count(), 1);
    /// ```
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.value = self.value.saturating_add(card.value());
        if card.is_ace() {
            self.soft_aces += 1;
        }

        while self.value > BLACKJACK && self.soft_aces > 0 {
            self.value -= 10;
            self.soft_aces -= 1;
        }

        if self.value > BLACKJACK {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current value of the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the number of Aces still counted as 11.
    #[must_use]
    pub const fn soft_ace_count(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.value > BLACKJACK
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value == BLACKJACK
    }

    /// Returns whether the hand holds two cards of equal point value.
    ///
    /// Ranks need not match: any two ten-value cards form a pair.
    #[must_use]
    pub fn can_split(&self) -> bool {
        matches!(self.cards.as_slice(), [first, second] if first.value() == second.value())
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub(crate) const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    pub(crate) const fn set_bet(&mut self, bet: usize) {
        self.bet = bet;
    }

    /// Doubles the bet amount.
    pub(crate) const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    /// Returns whether the bet on this hand was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card of a splittable pair.
    ///
    /// The remaining card is rescored on its own.
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if !self.can_split() {
            return None;
        }
        let card = self.cards.pop()?;
        self.from_split = true;
        self.rescore();
        Some(card)
    }

    fn rescore(&mut self) {
        let cards = core::mem::take(&mut self.cards);
        self.value = 0;
        self.soft_aces = 0;
        self.status = HandStatus::Active;
        for card in cards {
            self.add_card(card);
        }
    }

    /// Rebuilds a hand from stored parts, recomputing its value.
    ///
    /// Returns `None` when `status` contradicts the cards, including a hand
    /// left active at 21.
    pub(crate) fn rebuild(
        cards: Vec<Card>,
        bet: usize,
        status: HandStatus,
        doubled: bool,
        from_split: bool,
    ) -> Option<Self> {
        let mut hand = Self::new(bet);
        hand.doubled = doubled;
        hand.from_split = from_split;
        for card in cards {
            hand.add_card(card);
        }
        match (hand.is_bust(), status) {
            (true, HandStatus::Bust) => {}
            (true, _) | (false, HandStatus::Bust) => return None,
            (false, HandStatus::Active) if hand.value == BLACKJACK => return None,
            (false, status) => hand.status = status,
        }
        Some(hand)
    }
}
