//! Round engine and state management.

use crate::error::{DealError, ShoeExhausted};
use crate::hand::{BLACKJACK, Hand, HandStatus};
use crate::options::GameOptions;
use crate::participant::{Dealer, Participant, Player};
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod dealer;
mod snapshot;
pub mod state;

pub use snapshot::{DealerSnapshot, HandSnapshot, PlayerSnapshot, RoundSnapshot};
pub use state::RoundState;

/// One deal-play-resolve cycle between the player and the dealer.
///
/// The round owns its shoe and both participants. Every action is a method
/// call that completes before returning; the round never shares state with
/// other rounds, so the caller carries the bankroll forward with
/// [`Round::into_player`].
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards left to draw.
    shoe: Shoe,
    /// The player and their hands.
    player: Player,
    /// The dealer and their hand.
    dealer: Dealer,
    /// Current round state.
    state: RoundState,
    /// Settlement, once resolved.
    outcome: Option<RoundResult>,
}

impl Round {
    /// Places the opening bet and deals two cards each, player first.
    ///
    /// A player natural stands immediately, so the returned round may already
    /// be resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is rejected or the shoe holds fewer than
    /// the four cards needed to deal.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{GameOptions, Round, RoundState, Shoe};
    ///
    /// let options = GameOptions::default();
    /// let round = Round::start(&options, 100, 10, Shoe::new(42)).unwrap();
    /// assert_eq!(round.player_hands()[0].len(), 2);
    /// assert_eq!(round.dealer().hand().len(), 2);
    /// assert!(matches!(round.state(), RoundState::PlayerTurn | RoundState::Resolved));
    /// ```
    pub fn start(
        options: &GameOptions,
        bankroll: usize,
        bet: usize,
        shoe: Shoe,
    ) -> Result<Self, DealError> {
        let mut player = Player::new(options.player_name.clone(), bankroll);
        player.place_bet(bet)?;

        let mut round = Self {
            shoe,
            player,
            dealer: Dealer::new(options.dealer_name.clone()),
            state: RoundState::Dealing,
            outcome: None,
        };
        round.deal()?;
        log::debug!(
            "dealt {} {:?} against up card {:?}",
            round.player.name(),
            round.player.active_hand().map(Hand::value),
            round.dealer.up_card(),
        );

        round.state = RoundState::PlayerTurn;
        round.continue_play();
        Ok(round)
    }

    /// Deals player, dealer, player, dealer.
    fn deal(&mut self) -> Result<(), ShoeExhausted> {
        if self.shoe.len() < 4 {
            return Err(ShoeExhausted);
        }
        for _ in 0..2 {
            let card = self.shoe.draw()?;
            if let Some(hand) = self.player.active_hand_mut() {
                hand.add_card(card);
            }
            self.dealer.deal(self.shoe.draw()?);
        }
        Ok(())
    }

    /// Finishes hands that cannot act further and hands over to the dealer
    /// once none remain.
    fn continue_play(&mut self) {
        while let Some(hand) = self.player.active_hand_mut() {
            if hand.status() == HandStatus::Active && hand.value() == BLACKJACK {
                hand.set_status(HandStatus::Stand);
            }
            if hand.status() == HandStatus::Active {
                return;
            }
            if !self.player.advance() {
                break;
            }
        }
        self.finish_player_turn()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether every hand has been settled.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.state, RoundState::Resolved)
    }

    /// Returns the settlement once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<&RoundResult> {
        self.outcome.as_ref()
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the player's hands in play order.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        self.player.hands()
    }

    /// Returns the index of the hand awaiting a decision.
    #[must_use]
    pub fn active_hand_index(&self) -> Option<usize> {
        if self.state == RoundState::PlayerTurn {
            self.player.active_hand_index()
        } else {
            None
        }
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Reveals the dealer's hole card for display, e.g. after a player bust.
    pub const fn reveal_dealer_hole(&mut self) {
        self.dealer.reveal_hole();
    }

    /// Ends the round and returns the player to carry the bankroll into the
    /// next one.
    ///
    /// An unresolved round is abandoned first, so stakes still on the table
    /// go back to the bankroll.
    #[must_use]
    pub fn into_player(self) -> Player {
        self.abandon()
    }

    /// Abandons the round, returning every unsettled stake to the bankroll.
    ///
    /// Use this to end a round that cannot finish: after
    /// [`ActionError::ShoeExhausted`](crate::ActionError::ShoeExhausted), or
    /// when the shoe ran out during the dealer turn and the round was left in
    /// [`RoundState::DealerTurn`]. A resolved round is returned unchanged.
    #[must_use]
    pub fn abandon(mut self) -> Player {
        if !self.is_resolved() {
            for index in 0..self.player.hands().len() {
                self.player.push_bet(index);
            }
            log::debug!("round abandoned in {:?}", self.state);
        }
        self.player
    }
}
