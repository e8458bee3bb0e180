//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::HandStatus;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand.
    pub bet: usize,
    /// The amount credited back to the bankroll.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
    /// Whether the hand was doubled down.
    pub doubled: bool,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Results for each player hand, in play order.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer took a turn (skipped when every player hand busted).
    pub dealer_played: bool,
    /// Total credited to the bankroll across hands.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// Player bankroll after settlement.
    pub bankroll: usize,
}

impl RoundResult {
    /// Returns the outcome shared by every hand, or `None` for a split round
    /// whose hands ended differently.
    #[must_use]
    pub fn outcome(&self) -> Option<HandOutcome> {
        let (first, rest) = self.hands.split_first()?;
        rest.iter()
            .all(|hand| hand.outcome == first.outcome)
            .then_some(first.outcome)
    }
}

/// State of a hand after the player hits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandState {
    /// The hand that was hit.
    pub hand_index: usize,
    /// The card drawn.
    pub card: Card,
    /// The hand's value after the draw.
    pub value: u8,
    /// The hand's status after the draw.
    pub status: HandStatus,
}
