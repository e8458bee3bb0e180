//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_engine::{
    ActionError, Card, Dealer, GameOptions, Hand, HandOutcome, Participant, Round, RoundState,
    Shoe, Suit,
};

fn main() {
    env_logger::init();
    println!("Blackjack CLI example (type 'q' to quit)");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut bankroll = options.starting_bankroll;

    loop {
        if bankroll == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{bankroll}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        seed = seed.wrapping_add(1);
        let mut round = match Round::start(&options, bankroll, bet, Shoe::new(seed)) {
            Ok(round) => round,
            Err(err) => {
                println!("Deal error: {err}");
                continue;
            }
        };

        while round.state() == RoundState::PlayerTurn {
            print_table(&round);

            println!("{}", format_actions(&round));
            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => round.player_hit().map(|_| ()),
                "s" | "stand" => round.player_stand().map(|_| ()),
                "d" | "double" => round.player_double_down().map(|_| ()),
                "p" | "split" => round.player_split(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Err(ActionError::ShoeExhausted) => break,
                Err(err) => println!("Action error: {err}"),
                Ok(()) => {}
            }
        }

        let Some(result) = round.outcome().cloned() else {
            println!("The shoe ran out. Stakes are returned.");
            bankroll = round.abandon().bankroll();
            continue;
        };

        round.reveal_dealer_hole();
        print_table(&round);
        println!("Round complete.");
        for hand in &result.hands {
            let verdict = match hand.outcome {
                HandOutcome::Win => "win",
                HandOutcome::Lose => "lose",
                HandOutcome::Push => "push",
            };
            println!(
                "Hand {}: {} vs {} -> {verdict} (payout {})",
                hand.hand_index, hand.player_value, hand.dealer_value, hand.payout
            );
        }
        println!("Net {}", result.net);

        bankroll = round.into_player().bankroll();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(round: &Round) {
    let remaining = round.cards_remaining();
    println!("\nShoe: {remaining} cards remaining");

    let dealer = round.dealer();
    println!(
        "\n{}: {} (value {})",
        dealer.name(),
        format_dealer(dealer),
        dealer.visible_value()
    );

    let player = round.player();
    let active = round.active_hand_index();
    for (index, hand) in round.player_hands().iter().enumerate() {
        let marker = if Some(index) == active { "*" } else { " " };
        println!(
            "{} Hand {}: {} | value {} | bet {} | {:?}",
            marker,
            index,
            format_hand(hand),
            hand.value(),
            hand.bet(),
            hand.status()
        );
    }
    println!("{} bankroll: {}", player.name(), player.bankroll());
    println!();
}

fn format_actions(round: &Round) -> String {
    let (double, split) = round
        .player()
        .active_hand()
        .map_or((false, false), |hand| {
            let affordable = round.player().bankroll() >= hand.bet();
            let fresh = hand.len() == 2 && !hand.is_doubled();
            (fresh && affordable, hand.can_split() && affordable)
        });

    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", double),
        format_action("split", "p", split),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &Dealer) -> String {
    let cards = dealer.hand().cards();
    if cards.is_empty() {
        return "(no cards)".to_string();
    }

    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if index == 1 && !dealer.is_hole_revealed() {
                "??".to_string()
            } else {
                format_card(card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), code)
}
