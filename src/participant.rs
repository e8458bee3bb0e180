//! The player and the dealer seated at the table.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, BetError, ShoeExhausted};
use crate::hand::{Hand, HandStatus};
use crate::shoe::Shoe;

/// The dealer draws until reaching at least this total.
pub const DEALER_STANDS_ON: u8 = 17;

/// Most money a player can bring to a round.
///
/// Winning every stake at most doubles the money in play, so settlement
/// totals stay within `isize`.
pub const MAX_BANKROLL: usize = usize::MAX >> 2;

/// Behavior shared by everyone who holds cards.
pub trait Participant {
    /// Display name.
    fn name(&self) -> &str;

    /// The hand currently being played, if any.
    fn active_hand(&self) -> Option<&Hand>;

    /// Mutable access to the hand currently being played.
    fn active_hand_mut(&mut self) -> Option<&mut Hand>;

    /// Draws one card from `shoe` into the active hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidAction`] when there is no active hand or it
    /// has already finished, and [`ActionError::ShoeExhausted`] when the shoe
    /// is empty.
    fn hit(&mut self, shoe: &mut Shoe) -> Result<Card, ActionError> {
        let hand = self
            .active_hand_mut()
            .filter(|hand| hand.status() == HandStatus::Active)
            .ok_or(ActionError::InvalidAction)?;
        let card = shoe.draw()?;
        hand.add_card(card);
        Ok(card)
    }
}

/// The player: a bankroll and one hand, or several after splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    bankroll: usize,
    hands: Vec<Hand>,
    active: usize,
}

impl Player {
    /// Creates a player with no hands and the given bankroll.
    #[must_use]
    pub fn new(name: impl Into<String>, bankroll: usize) -> Self {
        Self {
            name: name.into(),
            bankroll,
            hands: Vec::new(),
            active: 0,
        }
    }

    pub(crate) const fn from_parts(
        name: String,
        bankroll: usize,
        hands: Vec<Hand>,
        active: usize,
    ) -> Self {
        Self {
            name,
            bankroll,
            hands,
            active,
        }
    }

    /// Returns the money not currently at stake.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the total amount currently wagered across all hands.
    #[must_use]
    pub fn bet(&self) -> usize {
        self.hands.iter().map(Hand::bet).sum()
    }

    /// Returns the player's hands in play order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the index of the hand being played, or `None` once every hand
    /// has finished.
    #[must_use]
    pub fn active_hand_index(&self) -> Option<usize> {
        (self.active < self.hands.len()).then_some(self.active)
    }

    /// Places the opening bet, moving `amount` from the bankroll onto a fresh
    /// hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, exceeds the bankroll, or a bet
    /// is already riding, and [`BetError::BankrollTooLarge`] if the bankroll
    /// is above [`MAX_BANKROLL`].
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{BetError, Player};
    ///
    /// let mut player = Player::new("Player", 100);
    /// assert_eq!(player.place_bet(150), Err(BetError::InsufficientFunds));
    /// player.place_bet(40).unwrap();
    /// assert_eq!(player.bankroll(), 60);
    /// assert_eq!(player.bet(), 40);
    /// ```
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if self.bet() > 0 {
            return Err(BetError::AlreadyPlaced);
        }
        if self.bankroll > MAX_BANKROLL {
            return Err(BetError::BankrollTooLarge);
        }
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        self.bankroll -= amount;
        self.hands = alloc::vec![Hand::new(amount)];
        self.active = 0;
        Ok(())
    }

    /// Settles a winning hand at even money: the stake plus an equal amount.
    ///
    /// Returns the amount credited.
    pub fn win_bet(&mut self, hand_index: usize) -> usize {
        self.settle(hand_index, 2)
    }

    /// Settles a tied hand by returning the stake.
    ///
    /// Returns the amount credited.
    pub fn push_bet(&mut self, hand_index: usize) -> usize {
        self.settle(hand_index, 1)
    }

    /// Settles a losing hand; the stake was already taken from the bankroll.
    pub fn lose_bet(&mut self, hand_index: usize) -> usize {
        self.settle(hand_index, 0)
    }

    fn settle(&mut self, hand_index: usize, multiplier: usize) -> usize {
        let Some(hand) = self.hands.get_mut(hand_index) else {
            return 0;
        };
        let payout = hand.bet() * multiplier;
        hand.set_bet(0);
        self.bankroll += payout;
        payout
    }

    /// Stands on the active hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidAction`] if there is no active hand.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let hand = self.playable_hand()?;
        hand.set_status(HandStatus::Stand);
        Ok(())
    }

    /// Doubles the wager on a two-card hand, draws exactly one card and stands.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not hold exactly two cards or was
    /// already doubled, the bankroll cannot cover the extra stake, or the shoe
    /// is empty. Nothing changes when an error is returned.
    pub fn double_down(&mut self, shoe: &mut Shoe) -> Result<Card, ActionError> {
        let bankroll = self.bankroll;
        let hand = self.playable_hand()?;
        if hand.len() != 2 || hand.is_doubled() {
            return Err(ActionError::InvalidAction);
        }
        let extra = hand.bet();
        if extra > bankroll {
            return Err(ActionError::InsufficientFunds);
        }

        let card = shoe.draw()?;
        hand.double_bet();
        hand.add_card(card);
        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }
        self.bankroll -= extra;
        Ok(card)
    }

    /// Splits a pair into two hands, staking the original bet again on the new
    /// hand.
    ///
    /// The second card moves to a new hand placed right after the active one;
    /// the active hand draws its second card first, then the new hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidAction`] unless the active hand holds
    /// exactly two cards, [`ActionError::NotSplittable`] if their values
    /// differ, [`ActionError::InsufficientFunds`] if the second stake is not
    /// affordable, and [`ActionError::ShoeExhausted`] if fewer than two cards
    /// remain. Nothing changes when an error is returned.
    pub fn split(&mut self, shoe: &mut Shoe) -> Result<(), ActionError> {
        let bankroll = self.bankroll;
        let index = self.active;
        let hand = self.playable_hand()?;
        if hand.len() != 2 {
            return Err(ActionError::InvalidAction);
        }
        if !hand.can_split() {
            return Err(ActionError::NotSplittable);
        }
        let bet = hand.bet();
        if bet > bankroll {
            return Err(ActionError::InsufficientFunds);
        }
        if shoe.len() < 2 {
            return Err(ActionError::ShoeExhausted);
        }

        let moved = hand.take_split_card().ok_or(ActionError::NotSplittable)?;
        hand.add_card(shoe.draw()?);
        let mut new_hand = Hand::from_split(moved, bet);
        new_hand.add_card(shoe.draw()?);

        self.bankroll -= bet;
        self.hands.insert(index + 1, new_hand);
        Ok(())
    }

    /// Moves play to the next hand that is still active.
    ///
    /// Returns `false` once no active hand remains.
    pub(crate) fn advance(&mut self) -> bool {
        while self
            .hands
            .get(self.active)
            .is_some_and(|hand| hand.status() != HandStatus::Active)
        {
            self.active += 1;
        }
        self.active < self.hands.len()
    }

    fn playable_hand(&mut self) -> Result<&mut Hand, ActionError> {
        self.active_hand_mut()
            .filter(|hand| hand.status() == HandStatus::Active)
            .ok_or(ActionError::InvalidAction)
    }

    pub(crate) const fn active_raw(&self) -> usize {
        self.active
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn active_hand(&self) -> Option<&Hand> {
        self.hands.get(self.active)
    }

    fn active_hand_mut(&mut self) -> Option<&mut Hand> {
        self.hands.get_mut(self.active)
    }
}

/// The dealer: unlimited funds, a single hand, and a fixed drawing policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    name: String,
    hand: Hand,
    hole_revealed: bool,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(0),
            hole_revealed: false,
        }
    }

    pub(crate) const fn from_parts(name: String, hand: Hand, hole_revealed: bool) -> Self {
        Self {
            name,
            hand,
            hole_revealed,
        }
    }

    /// Returns the dealer's hand, hole card included.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the value a viewer can see: the up card alone until the hole
    /// card is revealed.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.hand.value()
        } else {
            self.up_card().map_or(0, Card::value)
        }
    }

    pub(crate) fn deal(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Reveals the hole card and draws while the total is below 17.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeExhausted`] if the shoe runs out mid-turn; cards drawn
    /// before that stay in the hand.
    pub fn play(&mut self, shoe: &mut Shoe) -> Result<Vec<Card>, ShoeExhausted> {
        self.reveal_hole();
        let mut drawn = Vec::new();
        while self.hand.value() < DEALER_STANDS_ON {
            let card = shoe.draw()?;
            self.hand.add_card(card);
            drawn.push(card);
        }
        Ok(drawn)
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        &self.name
    }

    fn active_hand(&self) -> Option<&Hand> {
        Some(&self.hand)
    }

    fn active_hand_mut(&mut self) -> Option<&mut Hand> {
        Some(&mut self.hand)
    }
}
