use alloc::vec::Vec;

use crate::error::ShoeExhausted;
use crate::hand::HandStatus;
use crate::participant::Participant;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Round, RoundState};

impl Round {
    /// Runs the dealer turn if any hand still stands, then settles.
    ///
    /// When every player hand busted the dealer does not draw. If the shoe
    /// runs out mid-turn the round stays in [`RoundState::DealerTurn`]
    /// without an outcome.
    pub(super) fn finish_player_turn(&mut self) {
        let any_standing = self
            .player
            .hands()
            .iter()
            .any(|hand| hand.status() != HandStatus::Bust);

        if any_standing {
            self.state = RoundState::DealerTurn;
            match self.dealer.play(&mut self.shoe) {
                Ok(drawn) => log::debug!(
                    "{} draws {} card(s) to {}",
                    self.dealer.name(),
                    drawn.len(),
                    self.dealer.hand().value(),
                ),
                Err(ShoeExhausted) => {
                    log::warn!(
                        "shoe ran out with {} on {}; round left unresolved",
                        self.dealer.name(),
                        self.dealer.hand().value(),
                    );
                    return;
                }
            }
        }

        self.settle(any_standing);
    }

    /// Compares each hand against the dealer and pays it out exactly once.
    fn settle(&mut self, dealer_played: bool) {
        let dealer_hand = self.dealer.hand();
        let dealer_value = dealer_hand.value();
        let dealer_bust = dealer_hand.is_bust();

        let mut hands = Vec::with_capacity(self.player.hands().len());
        let mut total_payout: usize = 0;
        let mut total_bet: usize = 0;

        for hand_index in 0..self.player.hands().len() {
            let hand = &self.player.hands()[hand_index];
            let bet = hand.bet();
            let player_value = hand.value();
            let doubled = hand.is_doubled();

            let outcome = if hand.is_bust() {
                HandOutcome::Lose
            } else if dealer_bust || player_value > dealer_value {
                HandOutcome::Win
            } else if player_value < dealer_value {
                HandOutcome::Lose
            } else {
                HandOutcome::Push
            };

            let payout = match outcome {
                HandOutcome::Win => self.player.win_bet(hand_index),
                HandOutcome::Push => self.player.push_bet(hand_index),
                HandOutcome::Lose => self.player.lose_bet(hand_index),
            };

            total_bet += bet;
            total_payout += payout;
            hands.push(HandResult {
                hand_index,
                outcome,
                bet,
                payout,
                player_value,
                dealer_value,
                doubled,
            });
        }

        #[expect(clippy::cast_possible_wrap, reason = "money in play is capped at MAX_BANKROLL")]
        let net = total_payout as isize - total_bet as isize;

        log::debug!(
            "round settled: {:?}, net {net}, bankroll {}",
            hands.iter().map(|hand| hand.outcome).collect::<Vec<_>>(),
            self.player.bankroll(),
        );

        self.outcome = Some(RoundResult {
            hands,
            dealer_value,
            dealer_bust,
            dealer_played,
            total_payout,
            net,
            bankroll: self.player.bankroll(),
        });
        self.state = RoundState::Resolved;
    }
}
