//! Save and resume tests.

use blackjack_engine::{
    Card, GameOptions, HandStatus, MAX_BANKROLL, Rank, RestoreError, Round, RoundState, Shoe, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn stacked(draws: &[Card]) -> Shoe {
    let mut cards = draws.to_vec();
    cards.reverse();
    Shoe::from_cards(cards)
}

fn split_round() -> Round {
    let mut round = Round::start(
        &GameOptions::default(),
        100,
        10,
        stacked(&[
            card(Suit::Hearts, Rank::Eight),   // player
            card(Suit::Clubs, Rank::Ten),      // dealer up
            card(Suit::Diamonds, Rank::Eight), // player
            card(Suit::Spades, Rank::Six),     // dealer hole
            card(Suit::Clubs, Rank::Three),    // first hand
            card(Suit::Hearts, Rank::Ten),     // second hand
            card(Suit::Spades, Rank::Nine),    // dealer draw
        ]),
    )
    .unwrap();
    round.player_split().unwrap();
    round
}

#[test]
fn snapshot_captures_full_state() {
    let round = split_round();
    let saved = round.snapshot();

    assert_eq!(saved.state, RoundState::PlayerTurn);
    assert_eq!(saved.player.name, "Player");
    assert_eq!(saved.player.bankroll, 80);
    assert_eq!(saved.player.hands.len(), 2);
    assert_eq!(saved.player.hands[1].bet, 10);
    assert!(saved.player.hands[1].from_split);
    assert_eq!(saved.player.active_hand, 0);
    assert_eq!(saved.dealer.cards.len(), 2);
    assert!(!saved.dealer.hole_revealed);
    assert_eq!(saved.shoe, vec![card(Suit::Spades, Rank::Nine)]);
    assert_eq!(saved.outcome, None);
}

#[test]
fn restored_round_plays_on_identically() {
    let mut original = split_round();
    let mut resumed = Round::restore(original.snapshot()).unwrap();
    assert_eq!(resumed.snapshot(), original.snapshot());

    for round in [&mut original, &mut resumed] {
        round.player_stand().unwrap();
        round.player_stand().unwrap();
    }

    assert_eq!(original.outcome(), resumed.outcome());
    assert_eq!(resumed.player().bankroll(), original.player().bankroll());
    assert_eq!(resumed.outcome().unwrap().dealer_value, 25);
}

#[test]
fn resolved_round_round_trips() {
    let mut round = split_round();
    round.player_stand().unwrap();
    round.player_stand().unwrap();

    let restored = Round::restore(round.snapshot()).unwrap();
    assert!(restored.is_resolved());
    assert_eq!(restored.outcome(), round.outcome());
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_survives_json() {
    let round = split_round();
    let json = serde_json::to_string(&round.snapshot()).unwrap();
    let decoded = serde_json::from_str(&json).unwrap();
    let resumed = Round::restore(decoded).unwrap();
    assert_eq!(resumed.snapshot(), round.snapshot());
}

#[test]
fn duplicate_cards_are_rejected() {
    let mut saved = split_round().snapshot();
    let dealt = saved.player.hands[0].cards[0];
    saved.shoe.push(dealt);

    assert_eq!(
        Round::restore(saved).unwrap_err(),
        RestoreError::DuplicateCard(dealt)
    );
}

#[test]
fn contradictory_status_is_rejected() {
    let mut saved = split_round().snapshot();
    saved.player.hands[0].status = HandStatus::Bust;

    assert_eq!(
        Round::restore(saved).unwrap_err(),
        RestoreError::InconsistentHand
    );
}

#[test]
fn structural_problems_are_rejected() {
    let saved = split_round().snapshot();

    let mut no_hands = saved.clone();
    no_hands.player.hands.clear();
    assert_eq!(Round::restore(no_hands).unwrap_err(), RestoreError::NoHands);

    let mut out_of_range = saved.clone();
    out_of_range.player.active_hand = 5;
    assert_eq!(
        Round::restore(out_of_range).unwrap_err(),
        RestoreError::ActiveHandOutOfRange
    );

    let mut missing_outcome = saved.clone();
    missing_outcome.state = RoundState::Resolved;
    assert_eq!(
        Round::restore(missing_outcome).unwrap_err(),
        RestoreError::MissingOutcome
    );

    let mut dealing = saved.clone();
    dealing.state = RoundState::Dealing;
    assert_eq!(
        Round::restore(dealing).unwrap_err(),
        RestoreError::InvalidState
    );

    let mut dealer_turn = saved;
    dealer_turn.state = RoundState::DealerTurn;
    assert_eq!(
        Round::restore(dealer_turn).unwrap_err(),
        RestoreError::InvalidState
    );
}

#[test]
fn active_hand_must_be_first_unfinished() {
    let mut saved = split_round().snapshot();
    saved.player.active_hand = 1;

    assert_eq!(
        Round::restore(saved).unwrap_err(),
        RestoreError::ActiveHandOutOfRange
    );
}

#[test]
fn unfinished_twenty_one_is_rejected() {
    let mut saved = split_round().snapshot();
    saved.player.hands[0].cards.push(card(Suit::Spades, Rank::King));

    assert_eq!(
        Round::restore(saved).unwrap_err(),
        RestoreError::InconsistentHand
    );
}

#[test]
fn dealer_must_hold_two_cards_during_player_turn() {
    let mut saved = split_round().snapshot();
    let drawn = saved.shoe.pop().unwrap();
    saved.dealer.cards.push(drawn);

    assert_eq!(
        Round::restore(saved).unwrap_err(),
        RestoreError::InvalidDealerHand
    );

    let mut saved = split_round().snapshot();
    saved.dealer.cards.pop();
    assert_eq!(
        Round::restore(saved).unwrap_err(),
        RestoreError::InvalidDealerHand
    );
}

#[test]
fn oversized_bankroll_is_rejected() {
    let mut saved = split_round().snapshot();
    saved.player.bankroll = MAX_BANKROLL;
    assert_eq!(
        Round::restore(saved).unwrap_err(),
        RestoreError::BankrollTooLarge
    );

    let mut saved = split_round().snapshot();
    saved.player.bankroll = usize::MAX;
    assert_eq!(
        Round::restore(saved).unwrap_err(),
        RestoreError::BankrollTooLarge
    );
}
