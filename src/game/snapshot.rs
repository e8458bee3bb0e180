//! Plain, serializable round state for saving and resuming games.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE};
use crate::error::RestoreError;
use crate::hand::{Hand, HandStatus};
use crate::participant::{Dealer, MAX_BANKROLL, Participant, Player};
use crate::result::RoundResult;
use crate::shoe::Shoe;

use super::{Round, RoundState};

/// A stored hand. Values are recomputed from the cards on restore.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandSnapshot {
    /// Cards in deal order.
    pub cards: Vec<Card>,
    /// Amount still riding on the hand.
    pub bet: usize,
    /// Hand status.
    pub status: HandStatus,
    /// Whether the bet was doubled.
    pub doubled: bool,
    /// Whether the hand came from a split.
    pub from_split: bool,
}

/// A stored player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    /// Player name.
    pub name: String,
    /// Money not at stake.
    pub bankroll: usize,
    /// Hands in play order.
    pub hands: Vec<HandSnapshot>,
    /// Index of the hand being played.
    pub active_hand: usize,
}

/// A stored dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealerSnapshot {
    /// Dealer name.
    pub name: String,
    /// Cards in deal order, hole card second.
    pub cards: Vec<Card>,
    /// Whether the hole card has been revealed.
    pub hole_revealed: bool,
}

/// Everything needed to resume a round.
///
/// ```
/// use blackjack_engine::{GameOptions, Round, Shoe};
///
/// let round = Round::start(&GameOptions::default(), 100, 10, Shoe::new(3)).unwrap();
/// let saved = round.snapshot();
/// let resumed = Round::restore(saved.clone()).unwrap();
/// assert_eq!(resumed.snapshot(), saved);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSnapshot {
    /// Round state.
    pub state: RoundState,
    /// The player.
    pub player: PlayerSnapshot,
    /// The dealer.
    pub dealer: DealerSnapshot,
    /// Remaining shoe; the last card is drawn next.
    pub shoe: Vec<Card>,
    /// Settlement of a resolved round.
    pub outcome: Option<RoundResult>,
}

impl From<&Hand> for HandSnapshot {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            bet: hand.bet(),
            status: hand.status(),
            doubled: hand.is_doubled(),
            from_split: hand.is_from_split(),
        }
    }
}

impl TryFrom<HandSnapshot> for Hand {
    type Error = RestoreError;

    fn try_from(snapshot: HandSnapshot) -> Result<Self, Self::Error> {
        Self::rebuild(
            snapshot.cards,
            snapshot.bet,
            snapshot.status,
            snapshot.doubled,
            snapshot.from_split,
        )
        .ok_or(RestoreError::InconsistentHand)
    }
}

impl Round {
    /// Captures the full round state as plain data.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.state,
            player: PlayerSnapshot {
                name: self.player.name().into(),
                bankroll: self.player.bankroll(),
                hands: self.player.hands().iter().map(HandSnapshot::from).collect(),
                active_hand: self.player.active_raw(),
            },
            dealer: DealerSnapshot {
                name: self.dealer.name().into(),
                cards: self.dealer.hand().cards().to_vec(),
                hole_revealed: self.dealer.is_hole_revealed(),
            },
            shoe: self.shoe.cards().to_vec(),
            outcome: self.outcome.clone(),
        }
    }

    /// Rebuilds a round from a snapshot.
    ///
    /// Only rounds waiting on the player or already resolved can be resumed.
    ///
    /// # Errors
    ///
    /// Returns an error if a card appears twice, a hand's status contradicts
    /// its cards, the player has no hands, the money in play exceeds
    /// [`MAX_BANKROLL`], or the state is `Dealing` or `DealerTurn`. During the
    /// player turn the active hand must be the first unfinished one and the
    /// dealer must hold exactly the two dealt cards. A resolved round must
    /// carry its outcome.
    pub fn restore(snapshot: RoundSnapshot) -> Result<Self, RestoreError> {
        let RoundSnapshot {
            state,
            player,
            dealer,
            shoe,
            outcome,
        } = snapshot;

        check_unique(
            player
                .hands
                .iter()
                .flat_map(|hand| hand.cards.iter())
                .chain(dealer.cards.iter())
                .chain(shoe.iter()),
        )?;

        if player.hands.is_empty() {
            return Err(RestoreError::NoHands);
        }

        let hands = player
            .hands
            .into_iter()
            .map(Hand::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let in_play = hands
            .iter()
            .map(Hand::bet)
            .try_fold(player.bankroll, usize::checked_add);
        if !in_play.is_some_and(|total| total <= MAX_BANKROLL) {
            return Err(RestoreError::BankrollTooLarge);
        }

        let mut dealer_hand = Hand::new(0);
        for card in dealer.cards {
            dealer_hand.add_card(card);
        }

        match state {
            RoundState::Dealing | RoundState::DealerTurn => {
                return Err(RestoreError::InvalidState);
            }
            RoundState::PlayerTurn => {
                let first_unfinished = hands
                    .iter()
                    .position(|hand| hand.status() == HandStatus::Active);
                if first_unfinished != Some(player.active_hand) {
                    return Err(RestoreError::ActiveHandOutOfRange);
                }
                if dealer_hand.len() != 2 || dealer_hand.is_bust() {
                    return Err(RestoreError::InvalidDealerHand);
                }
            }
            RoundState::Resolved => {
                if outcome.is_none() {
                    return Err(RestoreError::MissingOutcome);
                }
            }
        }

        log::debug!("restored round in {state:?}");

        Ok(Self {
            shoe: Shoe::from_cards(shoe),
            player: Player::from_parts(player.name, player.bankroll, hands, player.active_hand),
            dealer: Dealer::from_parts(dealer.name, dealer_hand, dealer.hole_revealed),
            state,
            outcome: if state == RoundState::Resolved {
                outcome
            } else {
                None
            },
        })
    }
}

fn check_unique<'a>(cards: impl Iterator<Item = &'a Card>) -> Result<(), RestoreError> {
    let mut seen = [false; DECK_SIZE];
    for card in cards {
        let slot = &mut seen[card.index()];
        if *slot {
            return Err(RestoreError::DuplicateCard(*card));
        }
        *slot = true;
    }
    Ok(())
}
