//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that runs one deal-play-resolve cycle
//! between a [`Player`] and a [`Dealer`]: dealing, hit/stand/double/split,
//! the dealer's fixed drawing policy, and settlement of every hand.
//!
//! # Example
//!
//! ```
//! use blackjack_engine::{GameOptions, Round, Shoe};
//!
//! let options = GameOptions::default();
//! let mut bankroll = options.starting_bankroll;
//!
//! let mut round = Round::start(&options, bankroll, 10, Shoe::new(42)).unwrap();
//! if !round.is_resolved() {
//!     round.player_stand().unwrap();
//! }
//! bankroll = round.into_player().bankroll();
//! assert!(bankroll <= 1010);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, DealError, RestoreError, ShoeExhausted};
pub use game::{DealerSnapshot, HandSnapshot, PlayerSnapshot, Round, RoundSnapshot, RoundState};
pub use hand::{BLACKJACK, Hand, HandStatus};
pub use options::GameOptions;
pub use participant::{DEALER_STANDS_ON, Dealer, MAX_BANKROLL, Participant, Player};
pub use result::{HandOutcome, HandResult, HandState, RoundResult};
pub use shoe::Shoe;
