//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;

/// Drawing from a shoe with no cards left.
///
/// No reshuffle happens, so this ends the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct ShoeExhausted;

/// Errors that can occur while placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// A bet is already riding on the current hand.
    #[error("a bet has already been placed")]
    AlreadyPlaced,
    /// The bankroll exceeds [`MAX_BANKROLL`](crate::MAX_BANKROLL).
    #[error("bankroll is too large")]
    BankrollTooLarge,
}

/// Errors that can occur while starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The opening bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Not enough cards in the shoe to deal or finish the round.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
}

impl From<ShoeExhausted> for DealError {
    fn from(_: ShoeExhausted) -> Self {
        Self::ShoeExhausted
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not waiting for a player decision.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The active hand cannot take this action.
    #[error("action not allowed on this hand")]
    InvalidAction,
    /// The hand is not a two-card pair of equal value.
    #[error("hand cannot be split")]
    NotSplittable,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
}

impl From<ShoeExhausted> for ActionError {
    fn from(_: ShoeExhausted) -> Self {
        Self::ShoeExhausted
    }
}

/// Errors that can occur while restoring a saved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// The same card appears more than once across hands and shoe.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// The player holds no hands.
    #[error("player has no hands")]
    NoHands,
    /// The active hand index does not point at the first playable hand.
    #[error("active hand index is out of range")]
    ActiveHandOutOfRange,
    /// The dealer's hand cannot belong to a round in this state.
    #[error("dealer hand does not match the round state")]
    InvalidDealerHand,
    /// The money in play exceeds [`MAX_BANKROLL`](crate::MAX_BANKROLL).
    #[error("bankroll is too large")]
    BankrollTooLarge,
    /// A hand's stored status contradicts its cards.
    #[error("hand status does not match its cards")]
    InconsistentHand,
    /// A resolved round carries no outcome.
    #[error("resolved round has no outcome")]
    MissingOutcome,
    /// The round was saved in a state that cannot be resumed.
    #[error("round state cannot be restored")]
    InvalidState,
}
