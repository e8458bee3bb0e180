use crate::error::ActionError;
use crate::participant::Participant;
use crate::result::{HandState, RoundResult};

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<usize, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        self.player
            .active_hand_index()
            .ok_or(ActionError::InvalidState)
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust finishes the hand; so does reaching 21. When it was the last
    /// hand, the round moves on to the dealer (or resolves straight away if
    /// every hand busted).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state or the shoe
    /// is empty. Nothing changes when an error is returned.
    pub fn player_hit(&mut self) -> Result<HandState, ActionError> {
        let hand_index = self.ensure_player_turn()?;
        let card = self.player.hit(&mut self.shoe)?;
        log::debug!("{} hits hand {hand_index}: {card}", self.player.name());

        self.continue_play();
        let hand = &self.player.hands()[hand_index];
        Ok(HandState {
            hand_index,
            card,
            value: hand.value(),
            status: hand.status(),
        })
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Returns the settlement if this was the last hand to play. If the shoe
    /// runs out during the dealer turn the stand still counts: `Ok(None)` is
    /// returned and the round stays in [`RoundState::DealerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state.
    pub fn player_stand(&mut self) -> Result<Option<RoundResult>, ActionError> {
        let hand_index = self.ensure_player_turn()?;
        self.player.stand()?;
        log::debug!("{} stands on hand {hand_index}", self.player.name());

        self.continue_play();
        Ok(self.outcome.clone())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// Returns the settlement if this was the last hand to play, with the
    /// same dealer-turn exhaustion behavior as [`Round::player_stand`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state, the hand
    /// does not hold exactly two cards, the bankroll cannot match the bet, or
    /// the shoe is empty. Nothing changes when an error is returned.
    pub fn player_double_down(&mut self) -> Result<Option<RoundResult>, ActionError> {
        let hand_index = self.ensure_player_turn()?;
        let card = self.player.double_down(&mut self.shoe)?;
        log::debug!("{} doubles hand {hand_index}: {card}", self.player.name());

        self.continue_play();
        Ok(self.outcome.clone())
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// Each resulting hand is then played in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state, the hand is
    /// not a two-card pair of equal value, the bankroll cannot cover a second
    /// bet, or fewer than two cards remain. Nothing changes when an error is
    /// returned.
    pub fn player_split(&mut self) -> Result<(), ActionError> {
        let hand_index = self.ensure_player_turn()?;
        self.player.split(&mut self.shoe)?;
        log::debug!(
            "{} splits hand {hand_index} into {} hands",
            self.player.name(),
            self.player.hands().len(),
        );

        self.continue_play();
        Ok(())
    }
}
